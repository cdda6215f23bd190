//! Chart series as JSON.

use std::fs;
use std::path::Path;

use riverflow_analysis::Chart;
use tracing::info;

use crate::error::ExportError;

/// Write `chart` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// [`ExportError::Json`] if serialisation fails, [`ExportError::Io`] if
/// the file cannot be written.
pub fn write_chart_json(path: &Path, chart: &Chart) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(chart)?;
    fs::write(path, json).map_err(|e| ExportError::io(path, e))?;
    info!(path = %path.display(), series = chart.series.len(), "wrote chart");
    Ok(())
}
