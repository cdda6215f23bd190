//! Flood frequency and dry-period detection.

use riverflow_io::Observation;
use riverflow_stats as stats;
use tracing::debug;

use super::{StationOutput, by_date, flows};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::table::{ResultRow, fields};

/// Days above the flood quantile, as a count and as a share of all the
/// station's observations.
pub(super) fn flood(
    station: &str,
    obs: &[&Observation],
    config: &AnalysisConfig,
) -> Result<StationOutput, AnalysisError> {
    let values = flows(obs);
    let Some(threshold) = stats::quantile(&values, config.flood_quantile()) else {
        debug!(station, "no flow values, skipping flood frequency");
        return Ok(StationOutput::default());
    };

    let flood_days = values.iter().filter(|&&f| f > threshold).count();
    let total_days = obs.len();
    let ratio = if total_days > 0 {
        flood_days as f64 / total_days as f64
    } else {
        0.0
    };

    Ok(StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::FLOOD_THRESHOLD, threshold)
            .with(fields::FLOOD_DAYS, flood_days)
            .with(fields::FLOOD_RATIO, ratio),
    ))
}

/// Runs of consecutive days below a fraction of the mean flow. Null flows
/// are never dry and break a run.
pub(super) fn dry(station: &str, obs: &[&Observation], config: &AnalysisConfig) -> StationOutput {
    let values = flows(obs);
    if values.is_empty() {
        debug!(station, "no flow values, skipping dry periods");
        return StationOutput::default();
    }
    let threshold = stats::mean(&values) * config.dry_fraction();

    let mask: Vec<bool> = by_date(obs)
        .iter()
        .map(|o| o.flow.is_some_and(|f| f < threshold))
        .collect();
    let (dry_runs, _) = stats::spell_lengths(&mask);

    let avg_duration = if dry_runs.is_empty() {
        0.0
    } else {
        dry_runs.iter().sum::<usize>() as f64 / dry_runs.len() as f64
    };

    StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::DRY_THRESHOLD, threshold)
            .with(fields::DRY_PERIODS, dry_runs.len())
            .with(fields::AVG_DURATION, avg_duration),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::{daily, refs};
    use crate::value::Value;
    use approx::assert_relative_eq;

    fn get(out: &StationOutput, field: &str) -> Value {
        out.rows[0].get(field).cloned().unwrap()
    }

    #[test]
    fn flood_ten_values() {
        let flows: Vec<Option<f64>> = (1..=10).map(|i| Some(f64::from(i))).collect();
        let obs = daily("A", &flows);
        let out = flood("A", &refs(&obs), &AnalysisConfig::default()).unwrap();

        // Type-7 90th percentile of 1..=10 is 9.1.
        assert_relative_eq!(get(&out, fields::FLOOD_THRESHOLD).as_f64().unwrap(), 9.1, epsilon = 1e-12);
        assert_eq!(get(&out, fields::FLOOD_DAYS), Value::Integer(1));
        assert_relative_eq!(get(&out, fields::FLOOD_RATIO).as_f64().unwrap(), 0.1);
    }

    #[test]
    fn flood_ratio_counts_null_days_in_total() {
        let obs = daily("A", &[Some(1.0), Some(2.0), None, Some(10.0)]);
        let out = flood("A", &refs(&obs), &AnalysisConfig::default()).unwrap();
        let days = get(&out, fields::FLOOD_DAYS).as_f64().unwrap();
        let ratio = get(&out, fields::FLOOD_RATIO).as_f64().unwrap();
        assert_relative_eq!(ratio, days / 4.0);
        assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn dry_runs_are_contiguous() {
        let obs = daily("A", &[Some(0.2), Some(0.2), Some(5.0), Some(0.2)]);
        let out = dry("A", &refs(&obs), &AnalysisConfig::default());
        assert_relative_eq!(get(&out, fields::DRY_THRESHOLD).as_f64().unwrap(), 0.28, epsilon = 1e-12);
        assert_eq!(get(&out, fields::DRY_PERIODS), Value::Integer(2));
        assert_relative_eq!(get(&out, fields::AVG_DURATION).as_f64().unwrap(), 1.5);
    }

    #[test]
    fn null_breaks_a_dry_run() {
        let obs = daily("A", &[Some(0.1), None, Some(0.1), Some(10.0)]);
        let out = dry("A", &refs(&obs), &AnalysisConfig::default());
        assert_eq!(get(&out, fields::DRY_PERIODS), Value::Integer(2));
        assert_relative_eq!(get(&out, fields::AVG_DURATION).as_f64().unwrap(), 1.0);
    }

    #[test]
    fn constant_flow_has_no_dry_period() {
        let obs = daily("A", &[Some(3.0); 5]);
        let out = dry("A", &refs(&obs), &AnalysisConfig::default());
        assert_eq!(get(&out, fields::DRY_PERIODS), Value::Integer(0));
        assert_eq!(get(&out, fields::AVG_DURATION), Value::Float(0.0));
    }
}
