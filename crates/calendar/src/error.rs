//! Error types for the riverflow-calendar crate.

/// Error type for all fallible operations in the riverflow-calendar crate.
///
/// Covers date strings that cannot be read as a calendar date and month
/// numbers outside 1..=12.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date cell is empty or whitespace only.
    #[error("empty date value")]
    Empty,

    /// Returned when a date string matches none of the accepted layouts or
    /// names a day that does not exist.
    #[error("unparseable date: {input:?}")]
    Unparseable {
        /// The trimmed input that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty() {
        assert_eq!(CalendarError::Empty.to_string(), "empty date value");
    }

    #[test]
    fn error_unparseable() {
        let err = CalendarError::Unparseable {
            input: "31/02/2020".to_string(),
        };
        assert_eq!(err.to_string(), "unparseable date: \"31/02/2020\"");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CalendarError>();
    }
}
