//! Error types for riverflow-stats.

/// Error type for the fallible statistical routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when a routine receives fewer observations than it needs.
    #[error("insufficient data: need at least {needed} values, got {got}")]
    InsufficientData {
        /// Minimum number of values required.
        needed: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when paired inputs differ in length.
    #[error("length mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Length of the x input.
        x: usize,
        /// Length of the y input.
        y: usize,
    },

    /// Returned when the regressor has no spread (fewer than two distinct x values).
    #[error("degenerate regression: {reason}")]
    Degenerate {
        /// Why the fit is undefined.
        reason: String,
    },

    /// Returned when a parameter is outside its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the constraint that was violated.
        reason: String,
    },

    /// Wraps a failure to build a `statrs` distribution.
    ///
    /// Stored as a `String` because statrs errors are not `Clone`.
    #[error("distribution error: {reason}")]
    Distribution {
        /// Description of the underlying statrs failure.
        reason: String,
    },
}
