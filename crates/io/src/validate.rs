//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the header check applied to
//! every source before any row is read.

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Header validation
// ---------------------------------------------------------------------------

/// Check that every required canonical column is present in `headers`.
pub(crate) fn validate_required_columns(
    headers: &[String],
    required: &[&str],
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for name in required {
        if !headers.iter().any(|h| h == name) {
            c.push(format!("missing column '{name}'"));
        }
    }

    c
}

/// Check that no canonical column appears twice after alias normalisation.
pub(crate) fn validate_unique_columns(headers: &[String], canonical: &[&str]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for name in canonical {
        let n = headers.iter().filter(|h| h == name).count();
        if n > 1 {
            c.push(format!("column '{name}' appears {n} times"));
        }
    }

    c
}
