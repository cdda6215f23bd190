//! # riverflow-analysis
//!
//! Per-station discharge analyses over a filtered set of observations.
//!
//! Every analysis is identified by an [`AnalysisKind`] and produces an
//! [`AnalysisOutput`]: a [`ResultTable`] of uniformly shaped rows plus, for
//! the graphical kinds, a [`Chart`] of plotting series.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use riverflow_analysis::{AnalysisConfig, AnalysisKind, Selection, compute, filter};
//! use riverflow_io::Observation;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
//! let observations = vec![
//!     Observation::new("A", day(1), Some(10.0)),
//!     Observation::new("A", day(2), Some(20.0)),
//!     Observation::new("A", day(3), Some(30.0)),
//! ];
//! let selection = Selection::new(["A"], day(1), day(31));
//! let filtered = filter::apply(&observations, &selection).unwrap();
//!
//! let out = compute(AnalysisKind::AvgFlow, &filtered, &selection.stations, &AnalysisConfig::default()).unwrap();
//! assert_eq!(out.table.len(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `filter` | Station and date-range selection |
//! | `engine` | Dispatch of one analysis kind over the selected stations |
//! | `kinds` | Per-station computations for each kind |
//! | `runner` | Whole-catalog batch run |
//! | `table` | Result rows and tables |
//! | `chart` | Plotting series for graphical kinds |

mod chart;
mod config;
mod engine;
mod error;
pub mod filter;
mod kind;
mod kinds;
mod progress;
pub mod runner;
mod table;
mod value;

pub use chart::{Chart, ChartPoint, ChartSeries, TrendLine};
pub use config::AnalysisConfig;
pub use engine::{AnalysisOutput, compute, compute_with_progress};
pub use error::AnalysisError;
pub use filter::Selection;
pub use kind::AnalysisKind;
pub use progress::{NoProgress, Progress};
pub use runner::{BatchOutcome, run_all};
pub use table::{ResultRow, ResultTable, fields};
pub use value::Value;
