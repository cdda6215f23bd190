//! Calendar groupings: yearly totals and monthly means.

use std::collections::BTreeMap;

use chrono::Datelike;
use riverflow_calendar::month_name;
use riverflow_io::Observation;
use riverflow_stats as stats;

use super::StationOutput;
use crate::chart::{ChartPoint, ChartSeries};
use crate::error::AnalysisError;
use crate::table::{ResultRow, fields};
use crate::value::Value;

/// Sum of flows per calendar year, ascending. A year whose flows are all
/// null totals 0.
pub(super) fn yearly_totals(station: &str, obs: &[&Observation]) -> StationOutput {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for o in obs {
        *totals.entry(o.timestamp.year()).or_insert(0.0) += o.flow.unwrap_or(0.0);
    }

    let mut out = StationOutput::default();
    let mut points = Vec::with_capacity(totals.len());
    for (year, total) in totals {
        out.rows.push(
            ResultRow::new()
                .with(fields::STATION, station)
                .with(fields::YEAR, i64::from(year))
                .with(fields::TOTAL_FLOW, total),
        );
        points.push(ChartPoint {
            x: Value::Integer(i64::from(year)),
            y: total,
        });
    }
    out.series.push(ChartSeries {
        name: station.to_string(),
        points,
    });
    out
}

/// Mean flow for each of the twelve months; months without flows get 0.
pub(super) fn monthly_means(station: &str, obs: &[&Observation]) -> Result<StationOutput, AnalysisError> {
    let mut by_month: [Vec<f64>; 12] = Default::default();
    for o in obs {
        if let Some(flow) = o.flow {
            by_month[o.timestamp.month0() as usize].push(flow);
        }
    }

    let mut out = StationOutput::default();
    let mut points = Vec::with_capacity(12);
    for (month, values) in (1..=12).zip(&by_month) {
        let name = month_name(month)?;
        let avg = if values.is_empty() { 0.0 } else { stats::mean(values) };
        out.rows.push(
            ResultRow::new()
                .with(fields::STATION, station)
                .with(fields::MONTH, name)
                .with(fields::AVERAGE_FLOW, avg),
        );
        points.push(ChartPoint {
            x: Value::from(name),
            y: avg,
        });
    }
    out.series.push(ChartSeries {
        name: station.to_string(),
        points,
    });
    Ok(out)
}
