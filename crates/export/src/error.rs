//! Error types for riverflow-export.

use std::path::PathBuf;

/// Error type for all fallible operations in the riverflow-export crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The table has no rows; nothing is written.
    #[error("no results to export")]
    EmptyTable,

    /// No row of the table could be placed at a station location.
    #[error("no result row has a known station location")]
    MissingGeometry,

    /// The destination could not be created or written.
    #[error("cannot write {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    /// Wraps a CSV writer failure.
    #[error("csv error: {reason}")]
    Csv { reason: String },

    /// Wraps a JSON serialisation failure.
    #[error("json error: {reason}")]
    Json { reason: String },
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json {
            reason: e.to_string(),
        }
    }
}

impl ExportError {
    pub(crate) fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}
