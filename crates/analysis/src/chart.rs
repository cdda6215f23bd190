//! Plotting series for the graphical analysis kinds.

use serde::Serialize;

use crate::kind::AnalysisKind;
use crate::value::Value;

/// Everything needed to draw one analysis chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: AnalysisKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trend_lines: Vec<TrendLine>,
}

impl Chart {
    pub(crate) fn new(kind: AnalysisKind) -> Self {
        let (x_label, y_label) = match kind {
            AnalysisKind::SumFlow => ("Year", "Total Flow (m³/s)"),
            AnalysisKind::MonthlyAvg => ("Month", "Average Flow (m³/s)"),
            _ => ("Date", "Flow (m³/s)"),
        };
        Self {
            kind,
            title: kind.title().to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
            trend_lines: Vec::new(),
        }
    }
}

/// One named line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// `x` is a date, a year or a month name depending on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: Value,
    pub y: f64,
}

/// Least-squares line of flow against days since 1970-01-01.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub station: String,
    pub slope: f64,
    pub intercept: f64,
    pub r_value: f64,
}
