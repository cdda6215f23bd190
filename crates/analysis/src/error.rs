//! Error types for riverflow-analysis.

use riverflow_calendar::CalendarError;
use riverflow_stats::StatsError;

/// Error type for all fallible operations in the riverflow-analysis crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Returned when an analysis is requested with no stations selected.
    #[error("no station selected")]
    NoStationSelected,

    /// Returned when the selection's start date is after its end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Returned when a row's field names differ from the table's.
    #[error("row fields [{got}] do not match table fields [{expected}]")]
    InconsistentRow {
        /// Table field names, comma separated.
        expected: String,
        /// Offending row's field names, comma separated.
        got: String,
    },

    /// Wraps a failure from a statistical routine.
    #[error("statistics error: {source}")]
    Statistics {
        #[from]
        source: StatsError,
    },

    /// Wraps a calendar helper failure.
    #[error("calendar error: {source}")]
    Calendar {
        #[from]
        source: CalendarError,
    },

    /// One or more [`AnalysisConfig`](crate::AnalysisConfig) checks failed.
    #[error("{count} invalid configuration value(s): {details}")]
    InvalidConfig { count: usize, details: String },

    /// Returned when an analysis name is not part of the catalog.
    #[error("unknown analysis kind '{name}'")]
    UnknownKind { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_station() {
        assert_eq!(AnalysisError::NoStationSelected.to_string(), "no station selected");
    }

    #[test]
    fn display_date_range() {
        let err = AnalysisError::InvalidDateRange {
            start: chrono::NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2021-01-01 is after end 2020-01-01"
        );
    }

    #[test]
    fn from_stats_error() {
        let err: AnalysisError = StatsError::InsufficientData { needed: 2, got: 1 }.into();
        assert!(matches!(err, AnalysisError::Statistics { .. }));
        assert!(err.to_string().contains("need at least 2"));
    }
}
