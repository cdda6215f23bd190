//! Meteorological seasons.

use std::fmt;

use crate::error::CalendarError;

/// Meteorological season of the northern hemisphere.
///
/// December, January and February are winter; each following block of three
/// months is the next season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Season of a calendar month, numbered `(month mod 12) div 3 + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn from_month(month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(match (month % 12) / 3 + 1 {
            1 => Self::Winter,
            2 => Self::Spring,
            3 => Self::Summer,
            _ => Self::Autumn,
        })
    }

    /// Season number: 1 winter, 2 spring, 3 summer, 4 autumn.
    pub fn number(self) -> u8 {
        match self {
            Self::Winter => 1,
            Self::Spring => 2,
            Self::Summer => 3,
            Self::Autumn => 4,
        }
    }

    /// English display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winter_wraps_december() {
        assert_eq!(Season::from_month(12).unwrap(), Season::Winter);
        assert_eq!(Season::from_month(1).unwrap(), Season::Winter);
        assert_eq!(Season::from_month(2).unwrap(), Season::Winter);
    }

    #[test]
    fn season_numbers_follow_month_formula() {
        for m in 1..=12u32 {
            let s = Season::from_month(m).unwrap();
            assert_eq!(u32::from(s.number()), (m % 12) / 3 + 1, "month {m}");
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(Season::from_month(3).unwrap(), Season::Spring);
        assert_eq!(Season::from_month(6).unwrap(), Season::Summer);
        assert_eq!(Season::from_month(9).unwrap(), Season::Autumn);
        assert_eq!(Season::from_month(11).unwrap(), Season::Autumn);
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            Season::from_month(0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert!(Season::from_month(13).is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Season::Autumn.to_string(), "Autumn");
    }
}
