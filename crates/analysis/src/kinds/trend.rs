//! Linear trend lines and the Mann–Kendall trend test.

use riverflow_calendar::date_to_num;
use riverflow_io::Observation;
use riverflow_stats::{self as stats, StatsError, TrendDirection};
use tracing::debug;

use super::{StationOutput, by_date};
use crate::chart::{ChartPoint, ChartSeries, TrendLine};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::table::{ResultRow, fields};
use crate::value::Value;

pub(crate) const INSUFFICIENT_DATA: &str = "Insufficient Data";

fn trend_label(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Increasing => "Increasing",
        TrendDirection::Decreasing => "Decreasing",
        TrendDirection::NoTrend => "No Trend",
    }
}

/// Raw and fitted series of flow against time. The fitted series and the
/// trend line are omitted when the regression is undefined.
pub(super) fn linear_trend(station: &str, obs: &[&Observation]) -> Result<StationOutput, AnalysisError> {
    let points: Vec<(&Observation, f64)> = by_date(obs)
        .into_iter()
        .filter_map(|o| o.flow.map(|f| (o, f)))
        .collect();
    if points.is_empty() {
        debug!(station, "no flow values, skipping trend");
        return Ok(StationOutput::default());
    }

    let x: Vec<f64> = points.iter().map(|(o, _)| date_to_num(o.timestamp)).collect();
    let y: Vec<f64> = points.iter().map(|&(_, f)| f).collect();

    let mut out = StationOutput::default();
    out.series.push(ChartSeries {
        name: format!("{station} - Flow"),
        points: points
            .iter()
            .map(|&(o, f)| ChartPoint {
                x: Value::Date(o.timestamp),
                y: f,
            })
            .collect(),
    });

    let fit = match stats::linear_regression(&x, &y) {
        Ok(fit) => fit,
        Err(e @ (StatsError::InsufficientData { .. } | StatsError::Degenerate { .. })) => {
            debug!(station, error = %e, "no trend line");
            return Ok(out);
        }
        Err(e) => return Err(e.into()),
    };

    out.series.push(ChartSeries {
        name: format!("{station} - Trend"),
        points: points
            .iter()
            .zip(&x)
            .map(|(&(o, _), &xi)| ChartPoint {
                x: Value::Date(o.timestamp),
                y: fit.predict(xi),
            })
            .collect(),
    });
    out.trend_line = Some(TrendLine {
        station: station.to_string(),
        slope: fit.slope,
        intercept: fit.intercept,
        r_value: fit.r_value,
    });
    Ok(out)
}

/// One Mann–Kendall row per station, including stations with too few
/// points, which get an `Insufficient Data` row with null statistics.
pub(super) fn mann_kendall(
    station: &str,
    obs: &[&Observation],
    config: &AnalysisConfig,
) -> Result<StationOutput, AnalysisError> {
    let series: Vec<f64> = by_date(obs).iter().filter_map(|o| o.flow).collect();

    if series.len() < config.mann_kendall_min_points() {
        debug!(station, points = series.len(), "too few points for Mann-Kendall");
        return Ok(StationOutput::row(
            ResultRow::new()
                .with(fields::STATION, station)
                .with(fields::TREND, INSUFFICIENT_DATA)
                .with(fields::P_VALUE, Value::Null)
                .with(fields::Z_SCORE, Value::Null)
                .with(fields::H0, Value::Null),
        ));
    }

    let result = stats::mann_kendall(&series, config.mann_kendall_alpha())?;
    Ok(StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::TREND, trend_label(result.trend))
            .with(fields::P_VALUE, result.p)
            .with(fields::Z_SCORE, result.z)
            .with(fields::H0, if result.h { "Rejected" } else { "Accepted" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::{daily, refs};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn three_points_is_insufficient() {
        let obs = daily("A", &[Some(1.0), Some(2.0), Some(3.0)]);
        let out = mann_kendall("A", &refs(&obs), &AnalysisConfig::default()).unwrap();
        let row = &out.rows[0];
        assert_eq!(row.get(fields::TREND), Some(&Value::from(INSUFFICIENT_DATA)));
        assert_eq!(row.get(fields::P_VALUE), Some(&Value::Null));
        assert_eq!(row.get(fields::H0), Some(&Value::Null));
    }

    #[test]
    fn nulls_do_not_count_towards_minimum() {
        let obs = daily("A", &[Some(1.0), None, Some(2.0), Some(3.0), None]);
        let out = mann_kendall("A", &refs(&obs), &AnalysisConfig::default()).unwrap();
        assert_eq!(out.rows[0].get(fields::TREND), Some(&Value::from(INSUFFICIENT_DATA)));
    }

    #[test]
    fn empty_station_still_gets_a_row() {
        let out = mann_kendall("A", &[], &AnalysisConfig::default()).unwrap();
        assert_eq!(out.rows.len(), 1);
    }

    #[test]
    fn rising_series_rejects_null_hypothesis() {
        let flows: Vec<Option<f64>> = (1..=12).map(|i| Some(f64::from(i))).collect();
        let obs = daily("A", &flows);
        let out = mann_kendall("A", &refs(&obs), &AnalysisConfig::default()).unwrap();
        let row = &out.rows[0];
        assert_eq!(row.get(fields::TREND), Some(&Value::from("Increasing")));
        assert_eq!(row.get(fields::H0), Some(&Value::from("Rejected")));
        assert!(row.get(fields::P_VALUE).and_then(Value::as_f64).unwrap() < 0.05);
    }

    #[test]
    fn sorted_by_date_before_testing() {
        // Load order is descending in flow, chronological order ascending.
        let d = |day| NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        let obs: Vec<Observation> = (1..=10)
            .rev()
            .map(|day| Observation::new("A", d(day), Some(f64::from(day))))
            .collect();
        let out = mann_kendall("A", &refs(&obs), &AnalysisConfig::default()).unwrap();
        assert_eq!(out.rows[0].get(fields::TREND), Some(&Value::from("Increasing")));
    }

    #[test]
    fn trend_line_through_linear_series() {
        let obs = daily("A", &[Some(1.0), Some(3.0), Some(5.0)]);
        let out = linear_trend("A", &refs(&obs)).unwrap();
        let line = out.trend_line.unwrap();
        assert_relative_eq!(line.slope, 2.0, epsilon = 1e-9);
        assert_eq!(out.series.len(), 2);
        assert_eq!(out.series[0].name, "A - Flow");
        assert_relative_eq!(out.series[1].points[2].y, 5.0, epsilon = 1e-6);
        assert!(out.rows.is_empty());
    }

    #[test]
    fn single_point_has_no_trend_line() {
        let obs = daily("A", &[Some(4.0)]);
        let out = linear_trend("A", &refs(&obs)).unwrap();
        assert!(out.trend_line.is_none());
        assert_eq!(out.series.len(), 1);
    }
}
