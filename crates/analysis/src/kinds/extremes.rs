//! Maximum, minimum and peak-season rows.

use std::cmp::Ordering;

use chrono::Datelike;
use riverflow_calendar::Season;
use riverflow_io::Observation;
use tracing::debug;

use super::StationOutput;
use crate::error::AnalysisError;
use crate::table::{ResultRow, fields};

/// First observation whose flow is strictly better than all before it
/// under `wanted`; nulls never win.
fn extreme<'a>(obs: &[&'a Observation], wanted: Ordering) -> Option<(&'a Observation, f64)> {
    let mut best: Option<(&Observation, f64)> = None;
    for &o in obs {
        let Some(flow) = o.flow else { continue };
        let better = match best {
            Some((_, b)) => flow.total_cmp(&b) == wanted,
            None => true,
        };
        if better {
            best = Some((o, flow));
        }
    }
    best
}

fn observation_row(o: &Observation, flow: f64) -> ResultRow {
    ResultRow::new()
        .with(fields::STATION, o.station.as_str())
        .with(fields::DATE, o.timestamp)
        .with(fields::FLOW, flow)
        .with(fields::LATITUDE, o.latitude)
        .with(fields::LONGITUDE, o.longitude)
}

pub(super) fn max_flow(obs: &[&Observation]) -> StationOutput {
    match extreme(obs, Ordering::Greater) {
        Some((o, flow)) => StationOutput::row(observation_row(o, flow)),
        None => StationOutput::default(),
    }
}

pub(super) fn min_flow(obs: &[&Observation]) -> StationOutput {
    match extreme(obs, Ordering::Less) {
        Some((o, flow)) => StationOutput::row(observation_row(o, flow)),
        None => StationOutput::default(),
    }
}

pub(super) fn peak_season(station: &str, obs: &[&Observation]) -> Result<StationOutput, AnalysisError> {
    let Some((o, flow)) = extreme(obs, Ordering::Greater) else {
        debug!(station, "no flow values, skipping peak season");
        return Ok(StationOutput::default());
    };
    let season = Season::from_month(o.timestamp.month())?;

    Ok(StationOutput::row(
        ResultRow::new()
            .with(fields::STATION, station)
            .with(fields::MAX_FLOW, flow)
            .with(fields::SEASON, season.label())
            .with(fields::DATE, o.timestamp),
    ))
}
