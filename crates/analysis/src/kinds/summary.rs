//! Whole-period summaries: mean, standard deviation and count.

use riverflow_io::Observation;
use riverflow_stats as stats;
use tracing::debug;

use super::{StationOutput, flows};
use crate::table::{ResultRow, fields};

pub(super) fn avg_flow(station: &str, obs: &[&Observation]) -> StationOutput {
    let values = flows(obs);
    if values.is_empty() {
        debug!(station, "no flow values, skipping average");
        return StationOutput::default();
    }
    StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::AVERAGE_FLOW, stats::mean(&values)),
    )
}

/// Sample standard deviation; null for a single value.
pub(super) fn std_dev(station: &str, obs: &[&Observation]) -> StationOutput {
    let values = flows(obs);
    if values.is_empty() {
        debug!(station, "no flow values, skipping standard deviation");
        return StationOutput::default();
    }
    StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::STD_DEV, stats::sample_sd(&values)),
    )
}

/// Number of non-null flows, duplicates included.
pub(super) fn count(station: &str, obs: &[&Observation]) -> StationOutput {
    StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::COUNT, obs.iter().filter(|o| o.flow.is_some()).count()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::{daily, refs};
    use crate::value::Value;
    use approx::assert_relative_eq;

    fn float(out: &StationOutput, field: &str) -> f64 {
        out.rows[0].get(field).and_then(Value::as_f64).unwrap()
    }

    #[test]
    fn average_of_three() {
        let obs = daily("A", &[Some(10.0), Some(20.0), Some(30.0)]);
        assert_relative_eq!(float(&avg_flow("A", &refs(&obs)), fields::AVERAGE_FLOW), 20.0);
    }

    #[test]
    fn average_ignores_nulls() {
        let obs = daily("A", &[Some(1.0), None, Some(3.0)]);
        assert_relative_eq!(float(&avg_flow("A", &refs(&obs)), fields::AVERAGE_FLOW), 2.0);
    }

    #[test]
    fn std_dev_uses_n_minus_one() {
        let obs = daily("A", &[Some(10.0), Some(20.0), Some(30.0)]);
        assert_relative_eq!(float(&std_dev("A", &refs(&obs)), fields::STD_DEV), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn single_value() {
        let obs = daily("A", &[Some(7.0)]);
        assert_eq!(
            std_dev("A", &refs(&obs)).rows[0].get(fields::STD_DEV),
            Some(&Value::Null)
        );
        assert_relative_eq!(float(&avg_flow("A", &refs(&obs)), fields::AVERAGE_FLOW), 7.0);
    }

    #[test]
    fn count_skips_nulls_keeps_duplicates() {
        let mut obs = daily("A", &[Some(1.0), None, Some(1.0)]);
        obs.push(obs[0].clone());
        assert_eq!(
            count("A", &refs(&obs)).rows[0].get(fields::COUNT),
            Some(&Value::Integer(3))
        );
    }

    #[test]
    fn all_null_station() {
        let obs = daily("A", &[None, None]);
        assert!(avg_flow("A", &refs(&obs)).rows.is_empty());
        assert!(std_dev("A", &refs(&obs)).rows.is_empty());
        assert_eq!(
            count("A", &refs(&obs)).rows[0].get(fields::COUNT),
            Some(&Value::Integer(0))
        );
    }
}
