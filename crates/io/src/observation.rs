//! Station observations and station locations.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One discharge record for one station on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Station identifier.
    pub station: String,
    /// Observation date.
    pub timestamp: NaiveDate,
    /// Discharge in m³/s; `None` when the cell was empty or not a number.
    pub flow: Option<f64>,
    /// Latitude in decimal degrees, when the source carries one.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, when the source carries one.
    pub longitude: Option<f64>,
}

impl Observation {
    /// Creates an observation without coordinates.
    pub fn new(station: impl Into<String>, timestamp: NaiveDate, flow: Option<f64>) -> Self {
        Self {
            station: station.into(),
            timestamp,
            flow,
            latitude: None,
            longitude: None,
        }
    }

    /// Attaches coordinates.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// Fixed position of a monitoring station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Station name → location, first location wins.
///
/// Once a station has a location, later inserts for it are ignored.
#[derive(Debug, Clone, Default)]
pub struct StationLocations {
    inner: BTreeMap<String, StationLocation>,
}

impl StationLocations {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `location` for `station` unless one is already known.
    /// Returns `true` if the location was stored.
    pub fn insert_first(&mut self, station: &str, location: StationLocation) -> bool {
        if self.inner.contains_key(station) {
            return false;
        }
        self.inner.insert(station.to_string(), location);
        true
    }

    /// Location of `station`, if known.
    pub fn get(&self, station: &str) -> Option<StationLocation> {
        self.inner.get(station).copied()
    }

    /// Returns `true` if `station` has a location.
    pub fn contains(&self, station: &str) -> bool {
        self.inner.contains_key(station)
    }

    /// Number of stations with a location.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no station has a location.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates `(station, location)` pairs in station-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StationLocation)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
