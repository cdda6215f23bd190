//! CSV export of result tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use riverflow_analysis::{ResultTable, Value};
use tracing::info;

use crate::error::ExportError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options for [`write_csv`].
#[derive(Debug, Clone)]
pub struct CsvOptions {
    bom: bool,
    delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            bom: true,
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    /// Prefix the file with a UTF-8 byte-order mark so spreadsheet tools
    /// detect the encoding.
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn bom(&self) -> bool {
        self.bom
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

/// CSV cell text: empty for null, ISO dates, shortest round-trip floats.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Float(v) if !v.is_finite() => String::new(),
        Value::Float(v) => v.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Text(s) => s.clone(),
        Value::Date(d) => d.format("%Y-%m-%d").to_string(),
    }
}

/// Write `table` to `path`: a header of field names, then one record per row.
///
/// # Errors
///
/// - [`ExportError::EmptyTable`] if `table` has no rows; no file is created.
/// - [`ExportError::Io`] if `path` cannot be created or written.
/// - [`ExportError::Csv`] on a writer failure.
pub fn write_csv(path: &Path, table: &ResultTable, options: &CsvOptions) -> Result<(), ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    if options.bom {
        out.write_all(UTF8_BOM).map_err(|e| ExportError::io(path, e))?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(out);
    wtr.write_record(table.fields())?;
    for row in table {
        wtr.write_record(row.values().map(cell))?;
    }
    wtr.flush().map_err(|e| ExportError::io(path, e))?;

    info!(path = %path.display(), rows = table.len(), "wrote csv");
    Ok(())
}
