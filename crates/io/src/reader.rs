//! Delimited-text reader configuration and record parsing.

use std::collections::BTreeMap;
use std::io::Read;

use riverflow_calendar::parse_day_first;
use tracing::debug;

use crate::error::IoError;
use crate::observation::Observation;
use crate::validate;

/// Canonical column names after alias normalisation.
pub const STATION: &str = "Station";
pub const DATE: &str = "Date";
pub const FLOW: &str = "Flow";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";

const REQUIRED: [&str; 3] = [STATION, DATE, FLOW];
const CANONICAL: [&str; 5] = [STATION, DATE, FLOW, LATITUDE, LONGITUDE];

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading station records from delimited text.
///
/// Header cells are trimmed and then mapped through `aliases` onto the
/// canonical names `Station`, `Date`, `Flow`, `Latitude` and `Longitude`.
/// The [`Default`] implementation accepts the canonical names plus the
/// Turkish headers used by DSİ gauge exports.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter byte.
    delimiter: u8,
    /// Source header → canonical column name.
    aliases: BTreeMap<String, String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        let aliases = [
            ("İstasyon", STATION),
            ("Tarih", DATE),
            ("Akım (m³/s)", FLOW),
            ("Enlem", LATITUDE),
            ("Boylam", LONGITUDE),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            delimiter: b',',
            aliases,
        }
    }
}

impl ReaderConfig {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Add a header alias mapping `header` onto the canonical column `canonical`.
    pub fn with_alias(mut self, header: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(header.into(), canonical.into());
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Canonical name for a raw header cell.
    pub fn normalize_header(&self, raw: &str) -> String {
        let trimmed = raw.trim_start_matches('\u{feff}').trim();
        self.aliases
            .get(trimmed)
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is not an ASCII
    /// punctuation/whitespace byte or an alias targets a non-canonical column.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = validate::ValidationCollector::new();
        if !(self.delimiter.is_ascii_punctuation() || self.delimiter == b'\t' || self.delimiter == b' ') {
            c.push(format!("unsupported delimiter byte {:#04x}", self.delimiter));
        }
        for (header, target) in &self.aliases {
            if !CANONICAL.contains(&target.as_str()) {
                c.push(format!(
                    "alias '{header}' targets unknown column '{target}'"
                ));
            }
        }
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Rows parsed from one source, before they are merged into a store.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedSource {
    pub(crate) observations: Vec<Observation>,
    pub(crate) dropped_bad_date: usize,
    pub(crate) dropped_missing_station: usize,
}

/// Positions of the canonical columns in a source header.
struct ColumnIndex {
    station: usize,
    date: usize,
    flow: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self, IoError> {
        validate::validate_required_columns(headers, &REQUIRED).finish()?;
        validate::validate_unique_columns(headers, &CANONICAL).finish()?;

        let position = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| IoError::Validation {
                count: 1,
                details: format!("missing column '{name}'"),
            })
        };

        Ok(Self {
            station: required(STATION)?,
            date: required(DATE)?,
            flow: required(FLOW)?,
            latitude: position(LATITUDE),
            longitude: position(LONGITUDE),
        })
    }
}

/// Read every record of `source` into observations.
///
/// Rows whose date does not parse, or whose station cell is blank, are
/// dropped and counted. Numeric cells that are blank, missing from a short
/// row, or not finite numbers become `None`.
pub(crate) fn read_source<R: Read>(source: R, config: &ReaderConfig) -> Result<ParsedSource, IoError> {
    config.validate()?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| config.normalize_header(h))
        .collect();
    let cols = ColumnIndex::from_headers(&headers)?;

    let mut parsed = ParsedSource::default();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let station = cell(cols.station);
        if station.is_empty() {
            parsed.dropped_missing_station += 1;
            continue;
        }

        let timestamp = match parse_day_first(cell(cols.date)) {
            Ok(d) => d,
            Err(e) => {
                debug!(line = line + 2, error = %e, "dropping row with unparseable date");
                parsed.dropped_bad_date += 1;
                continue;
            }
        };

        parsed.observations.push(Observation {
            station: station.to_string(),
            timestamp,
            flow: parse_number(cell(cols.flow)),
            latitude: cols.latitude.and_then(|i| parse_number(cell(i))),
            longitude: cols.longitude.and_then(|i| parse_number(cell(i))),
        });
    }

    Ok(parsed)
}

/// Finite number or `None`.
fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
