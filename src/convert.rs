//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use riverflow_analysis::AnalysisConfig;
use riverflow_export::{CsvOptions, ExportFormat};
use riverflow_io::ReaderConfig;

/// Parses a single-byte delimiter string.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => bail!("delimiter must be a single byte, got {s:?}"),
    }
}

/// Parses an export setting; `none` disables export.
pub fn parse_export(s: &str) -> Result<Option<ExportFormat>> {
    if s.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match s.parse::<ExportFormat>() {
        Ok(f) => Ok(Some(f)),
        Err(e) => bail!(e),
    }
}

/// Builds a [`ReaderConfig`] from the TOML input configuration.
pub fn build_reader_config(input: &InputToml) -> Result<ReaderConfig> {
    let mut cfg = ReaderConfig::default().with_delimiter(parse_delimiter(&input.delimiter)?);
    for (header, canonical) in &input.aliases {
        cfg = cfg.with_alias(header, canonical);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds an [`AnalysisConfig`] from the TOML analysis configuration.
pub fn build_analysis_config(analysis: &AnalysisToml) -> Result<AnalysisConfig> {
    let cfg = AnalysisConfig::default()
        .with_flood_quantile(analysis.flood_quantile)
        .with_dry_fraction(analysis.dry_fraction)
        .with_mann_kendall_alpha(analysis.mann_kendall_alpha)
        .with_mann_kendall_min_points(analysis.mann_kendall_min_points)
        .with_parallel(analysis.parallel);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds [`CsvOptions`] from the TOML output configuration.
pub fn build_csv_options(output: &OutputToml) -> CsvOptions {
    CsvOptions::default().with_bom(output.csv_bom)
}

/// Buffer around a single selected station for GeoJSON views, or `None`
/// when zooming is switched off.
pub fn zoom_buffer(output: &OutputToml) -> Result<Option<f64>> {
    if !(output.zoom_buffer_deg >= 0.0 && output.zoom_buffer_deg.is_finite()) {
        bail!(
            "zoom_buffer_deg must be a non-negative number, got {}",
            output.zoom_buffer_deg
        );
    }
    Ok(output.zoom_to_station.then_some(output.zoom_buffer_deg))
}
