//! Per-station computations, one function per analysis kind.
//!
//! Each function receives one station's observations in load order and
//! returns the rows and chart material that station contributes.

mod extremes;
mod hydrology;
mod periodic;
mod summary;
mod trend;

use riverflow_io::Observation;

use crate::chart::{ChartSeries, TrendLine};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::kind::AnalysisKind;
use crate::table::ResultRow;

/// What one station contributes to an [`AnalysisOutput`](crate::AnalysisOutput).
#[derive(Debug, Clone, Default)]
pub(crate) struct StationOutput {
    pub(crate) rows: Vec<ResultRow>,
    pub(crate) series: Vec<ChartSeries>,
    pub(crate) trend_line: Option<TrendLine>,
}

impl StationOutput {
    fn row(row: ResultRow) -> Self {
        Self {
            rows: vec![row],
            ..Self::default()
        }
    }
}

pub(crate) fn station_output(
    kind: AnalysisKind,
    station: &str,
    obs: &[&Observation],
    config: &AnalysisConfig,
) -> Result<StationOutput, AnalysisError> {
    match kind {
        AnalysisKind::Trend => trend::linear_trend(station, obs),
        AnalysisKind::MaxFlow => Ok(extremes::max_flow(obs)),
        AnalysisKind::MinFlow => Ok(extremes::min_flow(obs)),
        AnalysisKind::Season => extremes::peak_season(station, obs),
        AnalysisKind::AvgFlow => Ok(summary::avg_flow(station, obs)),
        AnalysisKind::StdDev => Ok(summary::std_dev(station, obs)),
        AnalysisKind::Count => Ok(summary::count(station, obs)),
        AnalysisKind::SumFlow => Ok(periodic::yearly_totals(station, obs)),
        AnalysisKind::MonthlyAvg => periodic::monthly_means(station, obs),
        AnalysisKind::MannKendall => trend::mann_kendall(station, obs, config),
        AnalysisKind::Flood => hydrology::flood(station, obs, config),
        AnalysisKind::Dry => Ok(hydrology::dry(station, obs, config)),
    }
}

/// Non-null flows in input order.
fn flows(obs: &[&Observation]) -> Vec<f64> {
    obs.iter().filter_map(|o| o.flow).collect()
}

/// Stable sort by date.
fn by_date<'a>(obs: &[&'a Observation]) -> Vec<&'a Observation> {
    let mut sorted = obs.to_vec();
    sorted.sort_by_key(|o| o.timestamp);
    sorted
}
