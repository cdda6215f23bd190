//! The analysis catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::AnalysisError;

/// One entry of the analysis catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalysisKind {
    /// Linear trend of flow against time (chart only).
    Trend,
    MaxFlow,
    AvgFlow,
    StdDev,
    MinFlow,
    Count,
    /// Yearly totals.
    SumFlow,
    /// Season of the peak flow.
    Season,
    MonthlyAvg,
    MannKendall,
    Flood,
    Dry,
}

impl AnalysisKind {
    /// Every kind, in batch execution order.
    pub const ALL: [AnalysisKind; 12] = [
        AnalysisKind::Trend,
        AnalysisKind::MaxFlow,
        AnalysisKind::AvgFlow,
        AnalysisKind::StdDev,
        AnalysisKind::MinFlow,
        AnalysisKind::Count,
        AnalysisKind::SumFlow,
        AnalysisKind::Season,
        AnalysisKind::MonthlyAvg,
        AnalysisKind::MannKendall,
        AnalysisKind::Flood,
        AnalysisKind::Dry,
    ];

    /// Short tag used on the command line and in export file names.
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::Trend => "trend",
            AnalysisKind::MaxFlow => "maxflow",
            AnalysisKind::AvgFlow => "avgflow",
            AnalysisKind::StdDev => "stddev",
            AnalysisKind::MinFlow => "minflow",
            AnalysisKind::Count => "count",
            AnalysisKind::SumFlow => "sumflow",
            AnalysisKind::Season => "season",
            AnalysisKind::MonthlyAvg => "monthly_avg",
            AnalysisKind::MannKendall => "mann_kendall",
            AnalysisKind::Flood => "flood",
            AnalysisKind::Dry => "dry",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Trend => "Trend Analysis",
            AnalysisKind::MaxFlow => "Maximum Flow",
            AnalysisKind::AvgFlow => "Average Flow",
            AnalysisKind::StdDev => "Flow Standard Deviation",
            AnalysisKind::MinFlow => "Minimum Flow",
            AnalysisKind::Count => "Observation Count",
            AnalysisKind::SumFlow => "Annual Total Flow",
            AnalysisKind::Season => "Peak Flow Season",
            AnalysisKind::MonthlyAvg => "Monthly Average Flow",
            AnalysisKind::MannKendall => "Mann-Kendall Trend Test",
            AnalysisKind::Flood => "Flood Frequency",
            AnalysisKind::Dry => "Dry Periods",
        }
    }

    /// Kinds whose primary output is a chart. Their tables are not shown
    /// as text.
    pub fn is_graphical(self) -> bool {
        matches!(
            self,
            AnalysisKind::Trend | AnalysisKind::SumFlow | AnalysisKind::MonthlyAvg
        )
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AnalysisKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| AnalysisError::UnknownKind {
                name: s.to_string(),
            })
    }
}

impl Serialize for AnalysisKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
