//! Attribute typing for vector export.

use chrono::NaiveDate;
use riverflow_analysis::{ResultTable, Value};
use serde::Serialize;

/// Storage type of one exported attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Float,
    Date,
    Text,
}

impl FieldType {
    /// Type of a sampled value. A null sample is treated as a float.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Integer(_) => FieldType::Integer,
            Value::Float(_) | Value::Null => FieldType::Float,
            Value::Date(_) => FieldType::Date,
            Value::Text(_) => FieldType::Text,
        }
    }

    /// Name written into the exported schema.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Date => "date",
            FieldType::Text => "text",
        }
    }

    /// Convert `value` to this type. Values that cannot be represented
    /// become [`Value::Null`].
    pub fn coerce(self, value: &Value) -> Value {
        match (self, value) {
            (_, Value::Null) => Value::Null,
            (FieldType::Integer, Value::Integer(i)) => Value::Integer(*i),
            (FieldType::Integer, Value::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
                Value::Integer(*f as i64)
            }
            (FieldType::Integer, Value::Text(s)) => s.trim().parse().map_or(Value::Null, Value::Integer),
            (FieldType::Float, Value::Integer(_) | Value::Float(_)) => value
                .as_f64()
                .filter(|f| f.is_finite())
                .map_or(Value::Null, Value::Float),
            (FieldType::Float, Value::Text(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map_or(Value::Null, Value::Float),
            (FieldType::Date, Value::Date(d)) => Value::Date(*d),
            (FieldType::Date, Value::Text(s)) => {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_or(Value::Null, Value::Date)
            }
            (FieldType::Text, Value::Text(s)) => Value::Text(s.clone()),
            (FieldType::Text, other) => Value::Text(other.to_string()),
            _ => Value::Null,
        }
    }
}

/// Each field's type, decided by the first row's value.
pub fn sample_field_types(table: &ResultTable) -> Vec<(String, FieldType)> {
    let Some(first) = table.get(0) else {
        return Vec::new();
    };
    first
        .iter()
        .map(|(name, value)| (name.to_string(), FieldType::of(value)))
        .collect()
}
