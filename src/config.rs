use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "riverflow.toml";

/// Top-level riverflow configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RiverflowConfig {
    /// Input files and header handling.
    #[serde(default)]
    pub input: InputToml,

    /// Stations and date window to analyse.
    #[serde(default)]
    pub selection: SelectionToml,

    /// Analysis parameters.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Result presentation and export.
    #[serde(default)]
    pub output: OutputToml,
}

impl RiverflowConfig {
    /// Read `path`, or fall back to defaults when no path was given and
    /// `riverflow.toml` is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Extra header aliases, source header → canonical column.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            delimiter: default_delimiter(),
            aliases: BTreeMap::new(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SelectionToml {
    #[serde(default)]
    pub stations: Vec<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_flood_quantile")]
    pub flood_quantile: f64,
    #[serde(default = "default_dry_fraction")]
    pub dry_fraction: f64,
    #[serde(default = "default_mann_kendall_alpha")]
    pub mann_kendall_alpha: f64,
    #[serde(default = "default_mann_kendall_min_points")]
    pub mann_kendall_min_points: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            flood_quantile: default_flood_quantile(),
            dry_fraction: default_dry_fraction(),
            mann_kendall_alpha: default_mann_kendall_alpha(),
            mann_kendall_min_points: default_mann_kendall_min_points(),
            parallel: false,
        }
    }
}

fn default_flood_quantile() -> f64 {
    0.9
}
fn default_dry_fraction() -> f64 {
    0.2
}
fn default_mann_kendall_alpha() -> f64 {
    0.05
}
fn default_mann_kendall_min_points() -> usize {
    4
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// `none`, `csv` or `geojson`.
    #[serde(default = "default_export")]
    pub export: String,
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_true")]
    pub show_tables: bool,
    #[serde(default)]
    pub charts: bool,
    #[serde(default = "default_true")]
    pub zoom_to_station: bool,
    #[serde(default = "default_zoom_buffer_deg")]
    pub zoom_buffer_deg: f64,
    #[serde(default = "default_true")]
    pub csv_bom: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            export: default_export(),
            directory: default_directory(),
            show_tables: true,
            charts: false,
            zoom_to_station: true,
            zoom_buffer_deg: default_zoom_buffer_deg(),
            csv_bom: true,
        }
    }
}

fn default_export() -> String {
    "none".to_string()
}
fn default_directory() -> PathBuf {
    PathBuf::from(".")
}
fn default_true() -> bool {
    true
}
fn default_zoom_buffer_deg() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: RiverflowConfig = toml::from_str("").unwrap();
        assert!(cfg.input.files.is_empty());
        assert_eq!(cfg.input.delimiter, ",");
        assert_eq!(cfg.analysis.flood_quantile, 0.9);
        assert_eq!(cfg.analysis.mann_kendall_min_points, 4);
        assert_eq!(cfg.output.export, "none");
        assert!(cfg.output.show_tables);
        assert!(cfg.output.csv_bom);
    }

    #[test]
    fn full_document() {
        let cfg: RiverflowConfig = toml::from_str(
            r#"
            [input]
            files = ["a.csv", "b.csv"]
            delimiter = ";"
            [input.aliases]
            "Station Name" = "Station"

            [selection]
            stations = ["A", "B"]
            start = "2000-01-01"
            end = "2020-12-31"

            [analysis]
            flood_quantile = 0.95
            parallel = true

            [output]
            export = "geojson"
            directory = "out"
            charts = true
            "#,
        )
        .unwrap();

        assert_eq!(cfg.input.files.len(), 2);
        assert_eq!(cfg.input.aliases["Station Name"], "Station");
        assert_eq!(cfg.selection.start, NaiveDate::from_ymd_opt(2000, 1, 1));
        assert_eq!(cfg.analysis.flood_quantile, 0.95);
        assert_eq!(cfg.analysis.dry_fraction, 0.2);
        assert!(cfg.analysis.parallel);
        assert_eq!(cfg.output.directory, PathBuf::from("out"));
        assert!(cfg.output.charts);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<RiverflowConfig, _> = toml::from_str("[analysis]\nflood_q = 0.9\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(RiverflowConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riverflow.toml");
        std::fs::write(&path, "[selection]\nstations = [\"X\"]\n").unwrap();
        let cfg = RiverflowConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.selection.stations, ["X"]);
    }
}
