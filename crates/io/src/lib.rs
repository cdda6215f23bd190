//! # riverflow-io
//!
//! Load daily river discharge records from delimited text into an in-memory
//! [`TimeSeriesStore`]. Headers are normalised through configurable aliases,
//! dates are parsed day-first, and each station's location is captured from
//! the first row that introduces it.

mod error;
mod observation;
mod reader;
mod store;
mod validate;

pub use error::IoError;
pub use observation::{Observation, StationLocation, StationLocations};
pub use reader::{DATE, FLOW, LATITUDE, LONGITUDE, ReaderConfig, STATION};
pub use store::{LoadSummary, TimeSeriesStore};
