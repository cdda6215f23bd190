//! Station and date-range selection over loaded observations.

use chrono::NaiveDate;
use riverflow_io::Observation;
use tracing::debug;

use crate::error::AnalysisError;

/// Stations to analyse and the inclusive date window.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Stations in the order results are produced. No duplicates.
    pub stations: Vec<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Selection {
    /// Builds a selection; repeated station names keep their first position.
    pub fn new<I, S>(stations: I, start: NaiveDate, end: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for s in stations {
            let s = s.into();
            if !unique.contains(&s) {
                unique.push(s);
            }
        }
        Self {
            stations: unique,
            start,
            end,
        }
    }

    /// Checks the selection before any analysis runs.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoStationSelected`] for an empty station list,
    /// [`AnalysisError::InvalidDateRange`] when `start > end`.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.stations.is_empty() {
            return Err(AnalysisError::NoStationSelected);
        }
        if self.start > self.end {
            return Err(AnalysisError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether `obs` falls inside the selection.
    pub fn contains(&self, obs: &Observation) -> bool {
        self.start <= obs.timestamp
            && obs.timestamp <= self.end
            && self.stations.iter().any(|s| *s == obs.station)
    }
}

/// Observations of the selected stations inside `[start, end]`, in load order.
///
/// # Errors
///
/// See [`Selection::validate`].
pub fn apply(observations: &[Observation], selection: &Selection) -> Result<Vec<Observation>, AnalysisError> {
    selection.validate()?;

    let filtered: Vec<Observation> = observations
        .iter()
        .filter(|o| selection.contains(o))
        .cloned()
        .collect();

    debug!(
        total = observations.len(),
        kept = filtered.len(),
        stations = selection.stations.len(),
        "applied selection"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Observation> {
        vec![
            Observation::new("A", date(2020, 1, 1), Some(1.0)),
            Observation::new("B", date(2020, 1, 2), Some(2.0)),
            Observation::new("A", date(2020, 2, 1), Some(3.0)),
            Observation::new("A", date(2020, 3, 1), None),
        ]
    }

    #[test]
    fn empty_selection_rejected() {
        let sel = Selection::new(Vec::<String>::new(), date(2020, 1, 1), date(2020, 12, 31));
        assert_eq!(apply(&sample(), &sel), Err(AnalysisError::NoStationSelected));
    }

    #[test]
    fn reversed_range_rejected() {
        let sel = Selection::new(["A"], date(2021, 1, 1), date(2020, 1, 1));
        assert!(matches!(
            apply(&sample(), &sel),
            Err(AnalysisError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        let sel = Selection::new(["A"], date(2020, 1, 1), date(2020, 2, 1));
        let out = apply(&sample(), &sel).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].flow, Some(1.0));
        assert_eq!(out[1].flow, Some(3.0));
    }

    #[test]
    fn keeps_load_order_and_null_flows() {
        let sel = Selection::new(["B", "A"], date(2020, 1, 1), date(2020, 12, 31));
        let out = apply(&sample(), &sel).unwrap();
        let stations: Vec<&str> = out.iter().map(|o| o.station.as_str()).collect();
        assert_eq!(stations, ["A", "B", "A", "A"]);
        assert_eq!(out[3].flow, None);
    }

    #[test]
    fn duplicate_stations_collapse() {
        let sel = Selection::new(["A", "B", "A"], date(2020, 1, 1), date(2020, 1, 1));
        assert_eq!(sel.stations, ["A", "B"]);
    }
}
