//! Day-first date parsing for station records.
//!
//! Accepts year-first ISO dates (`2021-03-04`, also with `/` or `.`) and the
//! day-first layouts common in regional exports (`04.03.2021`, `04/03/2021`,
//! `04-03-2021`). A trailing time of day is validated and then discarded.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CalendarError;

const DATE_SEPARATORS: [char; 3] = ['-', '/', '.'];

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Parses a date cell, reading ambiguous numeric dates day-first.
///
/// Years must have four digits. When the first field has four digits the
/// value is read as year-month-day, otherwise as day-month-year.
///
/// # Errors
///
/// Returns [`CalendarError::Empty`] for blank input and
/// [`CalendarError::Unparseable`] for anything that is not a real date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riverflow_calendar::parse_day_first;
///
/// let d = parse_day_first("04.03.2021").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2021, 3, 4).unwrap());
/// ```
pub fn parse_day_first(input: &str) -> Result<NaiveDate, CalendarError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(CalendarError::Empty);
    }
    let unparseable = || CalendarError::Unparseable {
        input: s.to_string(),
    };

    let (date_part, time_part) = match s.split_once([' ', 'T']) {
        Some((d, t)) => (d, Some(t.trim())),
        None => (s, None),
    };

    if let Some(t) = time_part
        && !is_time_of_day(t)
    {
        return Err(unparseable());
    }

    let (year, month, day) = split_fields(date_part).ok_or_else(unparseable)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(unparseable)
}

/// Splits `date` into `(year, month, day)` using the first separator found.
fn split_fields(date: &str) -> Option<(i32, u32, u32)> {
    let sep = date.chars().find(|c| DATE_SEPARATORS.contains(c))?;
    let fields: Vec<&str> = date.split(sep).collect();
    let [a, b, c] = fields.as_slice() else {
        return None;
    };
    if ![a, b, c]
        .iter()
        .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    if a.len() == 4 && b.len() <= 2 && c.len() <= 2 {
        Some((a.parse().ok()?, b.parse().ok()?, c.parse().ok()?))
    } else if c.len() == 4 && a.len() <= 2 && b.len() <= 2 {
        Some((c.parse().ok()?, b.parse().ok()?, a.parse().ok()?))
    } else {
        None
    }
}

fn is_time_of_day(s: &str) -> bool {
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(s, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_day_first("2021-03-04").unwrap(), ymd(2021, 3, 4));
        assert_eq!(parse_day_first("2021/03/04").unwrap(), ymd(2021, 3, 4));
    }

    #[test]
    fn day_first_layouts() {
        assert_eq!(parse_day_first("04.03.2021").unwrap(), ymd(2021, 3, 4));
        assert_eq!(parse_day_first("04/03/2021").unwrap(), ymd(2021, 3, 4));
        assert_eq!(parse_day_first("4-3-2021").unwrap(), ymd(2021, 3, 4));
    }

    #[test]
    fn time_component_is_discarded() {
        assert_eq!(
            parse_day_first("2021-03-04T12:30:00").unwrap(),
            ymd(2021, 3, 4)
        );
        assert_eq!(
            parse_day_first("04.03.2021 08:15").unwrap(),
            ymd(2021, 3, 4)
        );
    }

    #[test]
    fn bad_time_component_rejected() {
        assert!(parse_day_first("04.03.2021 noon").is_err());
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_day_first("  01/12/1999 ").unwrap(), ymd(1999, 12, 1));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_day_first("   "), Err(CalendarError::Empty));
    }

    #[test]
    fn impossible_day_rejected() {
        let err = parse_day_first("31/02/2020").unwrap_err();
        assert!(matches!(err, CalendarError::Unparseable { .. }));
    }

    #[test]
    fn two_digit_year_rejected() {
        assert!(parse_day_first("04/03/21").is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_day_first("yesterday").is_err());
        assert!(parse_day_first("2021-03").is_err());
        assert!(parse_day_first("2021-0a-01").is_err());
    }
}
