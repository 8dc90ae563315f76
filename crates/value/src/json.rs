//! Conversion between [`Value`] and `serde_json::Value`.

use serde_json::{Map, Number, Value as JsonValue};

use crate::{Array, Object, Value};

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl Value {
    /// Converts to JSON the way a JSON serializer sees the value.
    ///
    /// `Undefined` and functions have no JSON form: they yield `None` at the
    /// top level, are skipped as object members and become `null` in
    /// arrays. Non-finite numbers and invalid dates become `null`, valid
    /// dates their ISO string, regular expressions `{}`.
    ///
    /// Does not guard against cycles.
    pub fn to_json(&self) -> Option<JsonValue> {
        Some(match self {
            Value::Undefined | Value::Function(_) => return None,
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Date(d) => d.to_iso_string().map_or(JsonValue::Null, JsonValue::String),
            Value::RegExp(_) => JsonValue::Object(Map::new()),
            Value::Array(a) => JsonValue::Array(
                a.items()
                    .iter()
                    .map(|item| item.to_json().unwrap_or(JsonValue::Null))
                    .collect(),
            ),
            Value::Object(o) => JsonValue::Object(
                o.props()
                    .iter()
                    .filter_map(|(k, v)| v.to_json().map(|json| (k.clone(), json)))
                    .collect(),
            ),
        })
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return JsonValue::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}
