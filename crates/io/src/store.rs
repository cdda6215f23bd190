//! In-memory store of station observations gathered from one or more sources.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::IoError;
use crate::observation::{Observation, StationLocation, StationLocations};
use crate::reader::{ReaderConfig, read_source};

/// Counts reported after one source has been loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows appended to the store.
    pub accepted: usize,
    /// Rows dropped because the date cell did not parse.
    pub dropped_bad_date: usize,
    /// Rows dropped because the station cell was blank.
    pub dropped_missing_station: usize,
    /// Stations seen for the first time in this source.
    pub new_stations: usize,
}

/// All observations loaded so far, in load order.
///
/// Stations are listed in first-seen order. A station's location is taken
/// from its first row in a source, when that row carries both coordinates.
/// Once known, a location is never replaced.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesStore {
    observations: Vec<Observation>,
    stations: Vec<String>,
    known: HashSet<String>,
    locations: StationLocations,
}

impl TimeSeriesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every observation in load order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Station names in first-seen order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// First-known location per station.
    pub fn locations(&self) -> &StationLocations {
        &self.locations
    }

    /// Returns `true` when nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Parse one source and append its rows.
    ///
    /// The source is parsed in full before anything is appended, so a
    /// failing source leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] for missing columns or an invalid
    /// configuration, and [`IoError::Csv`] for malformed records.
    pub fn load_reader<R: Read>(
        &mut self,
        source: R,
        name: &str,
        config: &ReaderConfig,
    ) -> Result<LoadSummary, IoError> {
        let parsed = read_source(source, config)?;

        let mut summary = LoadSummary {
            accepted: parsed.observations.len(),
            dropped_bad_date: parsed.dropped_bad_date,
            dropped_missing_station: parsed.dropped_missing_station,
            new_stations: 0,
        };

        let mut first_in_source: HashSet<&str> = HashSet::new();
        for obs in &parsed.observations {
            if self.known.insert(obs.station.clone()) {
                self.stations.push(obs.station.clone());
                summary.new_stations += 1;
            }
            if first_in_source.insert(obs.station.as_str())
                && !self.locations.contains(&obs.station)
                && let (Some(latitude), Some(longitude)) = (obs.latitude, obs.longitude)
            {
                self.locations.insert_first(
                    &obs.station,
                    StationLocation {
                        latitude,
                        longitude,
                    },
                );
            }
        }
        self.observations.extend(parsed.observations);

        if summary.dropped_bad_date + summary.dropped_missing_station > 0 {
            debug!(
                source = name,
                bad_date = summary.dropped_bad_date,
                missing_station = summary.dropped_missing_station,
                "dropped rows"
            );
        }
        info!(
            source = name,
            rows = summary.accepted,
            new_stations = summary.new_stations,
            "loaded source"
        );

        Ok(summary)
    }

    /// Load one CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if `path` does not exist, plus any
    /// error from [`load_reader`](Self::load_reader).
    pub fn load_csv(&mut self, path: &Path, config: &ReaderConfig) -> Result<LoadSummary, IoError> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), &path.display().to_string(), config)
    }

    /// Load several files in order. A failing file is logged and reported
    /// without affecting the others.
    pub fn load_all<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        config: &ReaderConfig,
    ) -> Vec<(PathBuf, Result<LoadSummary, IoError>)> {
        paths
            .iter()
            .map(|p| {
                let path = p.as_ref();
                let result = self.load_csv(path, config);
                if let Err(e) = &result {
                    warn!(path = %path.display(), error = %e, "skipping source");
                }
                (path.to_path_buf(), result)
            })
            .collect()
    }
}
