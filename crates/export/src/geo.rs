//! GeoJSON point features located at each result row's station.

use std::fs;
use std::path::Path;

use riverflow_analysis::{ResultTable, Value, fields};
use riverflow_io::{StationLocation, StationLocations};
use serde_json::{Map, Value as Json, json};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::field_type::{FieldType, sample_field_types};

/// Buffer, in degrees, around a single station when zooming to it.
pub const DEFAULT_ZOOM_BUFFER_DEG: f64 = 0.1;

const CRS_NAME: &str = "urn:ogc:def:crs:EPSG::4326";

/// Axis-aligned box in longitude/latitude degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// `[min_lon, min_lat, max_lon, max_lat]`, the GeoJSON `bbox` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

/// Square box of `buffer_deg` around one station.
pub fn station_extent(location: StationLocation, buffer_deg: f64) -> BoundingBox {
    BoundingBox {
        min_lon: location.longitude - buffer_deg,
        min_lat: location.latitude - buffer_deg,
        max_lon: location.longitude + buffer_deg,
        max_lat: location.latitude + buffer_deg,
    }
}

/// One result row placed at its station.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub latitude: f64,
    pub longitude: f64,
    /// Row fields without `Latitude` and `Longitude`.
    pub attributes: Vec<(String, Value)>,
}

/// Point features with a shared attribute schema, always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    schema: Vec<(String, FieldType)>,
}

impl FeatureCollection {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Attribute names and types, sampled from the table's first row.
    pub fn schema(&self) -> &[(String, FieldType)] {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Smallest box holding every feature.
    pub fn extent(&self) -> BoundingBox {
        self.features.iter().fold(
            BoundingBox {
                min_lon: f64::INFINITY,
                min_lat: f64::INFINITY,
                max_lon: f64::NEG_INFINITY,
                max_lat: f64::NEG_INFINITY,
            },
            |b, f| BoundingBox {
                min_lon: b.min_lon.min(f.longitude),
                min_lat: b.min_lat.min(f.latitude),
                max_lon: b.max_lon.max(f.longitude),
                max_lat: b.max_lat.max(f.latitude),
            },
        )
    }

    /// RFC 7946 document with a named CRS member and the given view box.
    ///
    /// Every property is coerced to its schema type, and the schema itself is
    /// written as the `fields` member.
    pub fn to_geojson(&self, name: &str, bbox: BoundingBox) -> Json {
        let features: Vec<Json> = self
            .features
            .iter()
            .map(|f| {
                let properties: Map<String, Json> = f
                    .attributes
                    .iter()
                    .zip(&self.schema)
                    .map(|((k, v), (_, ty))| (k.clone(), attribute(&ty.coerce(v))))
                    .collect();
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [f.longitude, f.latitude],
                    },
                    "properties": properties,
                })
            })
            .collect();
        let fields: Map<String, Json> = self
            .schema
            .iter()
            .map(|(name, ty)| (name.clone(), json!(ty.as_str())))
            .collect();

        json!({
            "type": "FeatureCollection",
            "name": name,
            "crs": {
                "type": "name",
                "properties": { "name": CRS_NAME },
            },
            "bbox": bbox.to_array(),
            "fields": fields,
            "features": features,
        })
    }
}

fn is_coordinate(name: &str) -> bool {
    name == fields::LATITUDE || name == fields::LONGITUDE
}

fn attribute(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(i) => json!(i),
        // serde_json turns non-finite floats into null.
        Value::Float(f) => json!(f),
        Value::Text(s) => json!(s),
        Value::Date(d) => json!(d.format("%Y-%m-%d").to_string()),
    }
}

/// Place every row of `table` at its station's location.
///
/// Rows whose station has no known location are skipped.
///
/// # Errors
///
/// - [`ExportError::EmptyTable`] if `table` has no rows.
/// - [`ExportError::MissingGeometry`] if no row resolves to a location.
pub fn build_features(table: &ResultTable, locations: &StationLocations) -> Result<FeatureCollection, ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyTable);
    }

    let mut features = Vec::with_capacity(table.len());
    for (row, location) in table.iter().zip(table.locations(locations)) {
        let Some((latitude, longitude)) = location else {
            debug!(station = ?row.get(fields::STATION), "no location, skipping row");
            continue;
        };
        features.push(Feature {
            latitude,
            longitude,
            attributes: row
                .iter()
                .filter(|(name, _)| !is_coordinate(name))
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        });
    }

    if features.is_empty() {
        return Err(ExportError::MissingGeometry);
    }

    let schema = sample_field_types(table)
        .into_iter()
        .filter(|(name, _)| !is_coordinate(name))
        .collect();

    Ok(FeatureCollection { features, schema })
}

/// Write `collection` as GeoJSON. The `bbox` member is `view` when given,
/// otherwise the collection's extent.
///
/// # Errors
///
/// [`ExportError::Json`] on serialisation failure, [`ExportError::Io`] if
/// the file cannot be written.
pub fn write_geojson(
    path: &Path,
    collection: &FeatureCollection,
    view: Option<BoundingBox>,
) -> Result<(), ExportError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("river_flow");
    let doc = collection.to_geojson(name, view.unwrap_or_else(|| collection.extent()));
    let text = serde_json::to_string_pretty(&doc)?;
    fs::write(path, text).map_err(|e| ExportError::io(path, e))?;

    info!(path = %path.display(), features = collection.len(), "wrote geojson");
    Ok(())
}
