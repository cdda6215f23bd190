//! Result rows and tables.

use std::fmt;

use riverflow_io::StationLocations;

use crate::error::AnalysisError;
use crate::value::Value;

/// Field names used by the analysis kinds.
pub mod fields {
    pub use riverflow_io::{DATE, FLOW, LATITUDE, LONGITUDE, STATION};

    pub const AVERAGE_FLOW: &str = "Average Flow";
    pub const STD_DEV: &str = "Std Dev";
    pub const COUNT: &str = "Count";
    pub const YEAR: &str = "Year";
    pub const TOTAL_FLOW: &str = "Total Flow";
    pub const MAX_FLOW: &str = "MaxFlow";
    pub const SEASON: &str = "Season";
    pub const MONTH: &str = "Month";
    pub const TREND: &str = "Trend";
    pub const P_VALUE: &str = "P-value";
    pub const Z_SCORE: &str = "Z-score";
    pub const H0: &str = "H0";
    pub const FLOOD_THRESHOLD: &str = "Flood_Threshold";
    pub const FLOOD_DAYS: &str = "Flood_Days";
    pub const FLOOD_RATIO: &str = "Flood_Ratio";
    pub const DRY_THRESHOLD: &str = "Dry_Threshold";
    pub const DRY_PERIODS: &str = "Dry_Periods";
    pub const AVG_DURATION: &str = "Avg_Duration";
}

// ---------------------------------------------------------------------------
// ResultRow
// ---------------------------------------------------------------------------

/// Ordered field name → value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    cells: Vec<(String, Value)>,
}

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.push((name.into(), value.into()));
        self
    }

    /// Value of the named field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cells.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ResultTable
// ---------------------------------------------------------------------------

/// Rows sharing one field layout, in station processing order.
///
/// The layout is fixed by the first pushed row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    fields: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InconsistentRow`] if the row's field names
    /// differ from those of the first row.
    pub fn push(&mut self, row: ResultRow) -> Result<(), AnalysisError> {
        if self.rows.is_empty() {
            self.fields = row.field_names().map(str::to_string).collect();
        } else if !row.field_names().eq(self.fields.iter().map(String::as_str)) {
            return Err(AnalysisError::InconsistentRow {
                expected: self.fields.join(", "),
                got: row.field_names().collect::<Vec<_>>().join(", "),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Field names in first-row order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ResultRow> {
        self.rows.get(index)
    }

    /// `(latitude, longitude)` of each row's station, looked up by the
    /// `Station` field.
    pub fn locations(&self, locations: &StationLocations) -> Vec<Option<(f64, f64)>> {
        self.rows
            .iter()
            .map(|row| {
                row.get(fields::STATION)
                    .and_then(Value::as_text)
                    .and_then(|s| locations.get(s))
                    .map(|l| (l.latitude, l.longitude))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Right-aligned text grid, one line per row under a header line.
impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.values().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let write_line = |f: &mut fmt::Formatter<'_>, line: &[&str]| -> fmt::Result {
            for (i, (cell, width)) in line.iter().zip(&widths).enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                let pad = width.saturating_sub(cell.chars().count());
                write!(f, "{}{cell}", " ".repeat(pad))?;
            }
            Ok(())
        };

        let header: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        write_line(f, &header)?;
        for row in &cells {
            f.write_str("\n")?;
            let line: Vec<&str> = row.iter().map(String::as_str).collect();
            write_line(f, &line)?;
        }
        Ok(())
    }
}
