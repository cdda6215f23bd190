//! Dispatch of one analysis kind over the selected stations.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use riverflow_io::Observation;
use tracing::{debug, info};

use crate::chart::Chart;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::kind::AnalysisKind;
use crate::kinds::{self, StationOutput};
use crate::progress::{NoProgress, Progress};
use crate::table::ResultTable;

/// Result of one analysis kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub kind: AnalysisKind,
    /// Rows in station selection order. Empty for `trend`.
    pub table: ResultTable,
    /// Plotting series, for `trend`, `sumflow` and `monthly_avg`.
    pub chart: Option<Chart>,
}

/// Run `kind` over `observations` for each of `stations`, in order.
///
/// See [`compute_with_progress`].
pub fn compute(
    kind: AnalysisKind,
    observations: &[Observation],
    stations: &[String],
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AnalysisError> {
    compute_with_progress(kind, observations, stations, config, &NoProgress)
}

/// Run `kind` over `observations` for each of `stations`, reporting to
/// `progress` after every station.
///
/// Repeated names in `stations` are run once, at their first position.
/// Observations of stations not in `stations` are ignored. A station with
/// no observations contributes nothing, except for `mann_kendall` which
/// reports it as having insufficient data.
///
/// # Errors
///
/// - [`AnalysisError::NoStationSelected`] if `stations` is empty.
/// - [`AnalysisError::InvalidConfig`] if `config` does not validate.
/// - Any per-station failure, such as [`AnalysisError::Statistics`].
#[tracing::instrument(skip_all, fields(kind = %kind, n_obs = observations.len(), n_stations = stations.len()))]
pub fn compute_with_progress(
    kind: AnalysisKind,
    observations: &[Observation],
    stations: &[String],
    config: &AnalysisConfig,
    progress: &dyn Progress,
) -> Result<AnalysisOutput, AnalysisError> {
    if stations.is_empty() {
        return Err(AnalysisError::NoStationSelected);
    }
    config.validate()?;

    let mut seen = HashSet::new();
    let stations: Vec<&String> = stations.iter().filter(|s| seen.insert(s.as_str())).collect();

    let mut groups: HashMap<&str, Vec<&Observation>> =
        stations.iter().map(|s| (s.as_str(), Vec::new())).collect();
    for o in observations {
        if let Some(group) = groups.get_mut(o.station.as_str()) {
            group.push(o);
        }
    }

    let total = stations.len();
    let done = AtomicUsize::new(0);
    let run_station = |station: &&String| -> Result<StationOutput, AnalysisError> {
        let obs = groups.get(station.as_str()).map_or(&[][..], Vec::as_slice);
        let out = if obs.is_empty() && kind != AnalysisKind::MannKendall {
            debug!(station = %station, "no observations in range, skipping");
            Ok(StationOutput::default())
        } else {
            kinds::station_output(kind, station, obs, config)
        };
        progress.advance(kind, done.fetch_add(1, Ordering::Relaxed) + 1, total);
        out
    };

    let per_station: Vec<StationOutput> = if config.parallel() {
        stations.par_iter().map(run_station).collect::<Result<_, _>>()?
    } else {
        stations.iter().map(run_station).collect::<Result<_, _>>()?
    };

    let mut table = ResultTable::new();
    let mut chart = Chart::new(kind);
    for out in per_station {
        for row in out.rows {
            table.push(row)?;
        }
        chart.series.extend(out.series);
        chart.trend_lines.extend(out.trend_line);
    }

    let chart = (kind.is_graphical() && !chart.series.is_empty()).then_some(chart);

    info!(rows = table.len(), has_chart = chart.is_some(), "analysis complete");
    Ok(AnalysisOutput { kind, table, chart })
}
