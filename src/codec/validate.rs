use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ExternalCategory;
use crate::grading::Dimension;

const DEFAULT_OVERALL_SCORE: u8 = 75;

/// Untrusted field value read back from storage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RawValue {
    /// The field was absent from the stored row.
    #[default]
    Missing,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(flag) => RawValue::Bool(flag),
            Value::Number(number) => number.as_f64().map_or(RawValue::Null, RawValue::Number),
            Value::String(text) => RawValue::Text(text),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<RawValue> for Value {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Missing | RawValue::Null => Value::Null,
            RawValue::Bool(flag) => Value::Bool(flag),
            RawValue::Number(number) => serde_json::Number::from_f64(number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RawValue::Text(text) => Value::String(text),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u8> for RawValue {
    fn from(value: u8) -> Self {
        RawValue::Number(f64::from(value))
    }
}

/// Recognizes a stored value only when it is exactly one of the dimension's labels.
pub fn parse_category(dimension: Dimension, raw: &RawValue) -> Option<ExternalCategory> {
    raw.as_text()
        .and_then(|label| ExternalCategory::from_label(dimension, label))
}

/// Always returns a valid category, falling back to the dimension's neutral rung.
pub fn validate_category(dimension: Dimension, raw: &RawValue) -> ExternalCategory {
    parse_category(dimension, raw).unwrap_or_else(|| ExternalCategory::neutral(dimension))
}

/// Numbers and numeric strings are rounded half up and clamped to `[0, 100]`; anything else
/// yields 75.
pub fn validate_overall_score(raw: &RawValue) -> u8 {
    let numeric = match raw {
        RawValue::Number(number) => Some(*number),
        RawValue::Text(text) => text.trim().parse::<f64>().ok(),
        RawValue::Missing | RawValue::Null | RawValue::Bool(_) => None,
    };

    match numeric.filter(|number| number.is_finite()) {
        Some(number) => number.round().clamp(0.0, 100.0) as u8,
        None => DEFAULT_OVERALL_SCORE,
    }
}
