//! Output file names.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use riverflow_analysis::AnalysisKind;

/// File format of a tabular export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    GeoJson,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::GeoJson => "geojson",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "geojson" | "json" => Ok(ExportFormat::GeoJson),
            other => Err(format!("unknown export format '{other}' (expected csv or geojson)")),
        }
    }
}

fn stem(kind: AnalysisKind, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "river_flow_{}_{}_{}",
        kind.as_str(),
        start.format("%Y%m%d"),
        end.format("%Y%m%d")
    )
}

/// `river_flow_{kind}_{YYYYMMDD}_{YYYYMMDD}.{ext}`
pub fn export_file_name(kind: AnalysisKind, start: NaiveDate, end: NaiveDate, format: ExportFormat) -> String {
    format!("{}.{}", stem(kind, start, end), format.extension())
}

/// `river_flow_{kind}_{YYYYMMDD}_{YYYYMMDD}.chart.json`
pub fn chart_file_name(kind: AnalysisKind, start: NaiveDate, end: NaiveDate) -> String {
    format!("{}.chart.json", stem(kind, start, end))
}
