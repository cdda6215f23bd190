//! # riverflow-export
//!
//! Write analysis results to disk: CSV tables, GeoJSON point features
//! located at each result row's station, and chart series as JSON.
//!
//! Every writer produces exactly one file and never touches files written
//! earlier, so a failed export leaves previous outputs intact.

mod chart;
mod error;
mod field_type;
mod geo;
mod naming;
mod table;

pub use chart::write_chart_json;
pub use error::ExportError;
pub use field_type::{FieldType, sample_field_types};
pub use geo::{
    BoundingBox, DEFAULT_ZOOM_BUFFER_DEG, Feature, FeatureCollection, build_features,
    station_extent, write_geojson,
};
pub use naming::{ExportFormat, chart_file_name, export_file_name};
pub use table::{CsvOptions, write_csv};
