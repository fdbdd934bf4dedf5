//! JSON interop for runtime values.
//!
//! Batch evaluation stringifies every result, and arrays/objects render in
//! their compact JSON textual form. Context mappings typically arrive as
//! parsed JSON documents, so the conversion runs both ways.
//!
//! # Examples
//!
//! ```
//! use argot::{output, Value};
//!
//! let value = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
//! assert_eq!(output::to_json_string(&value), "[1,2]");
//! ```

use crate::value::Value;
use serde_json::{Map, Number, Value as Json};

/// Convert a JSON document into a runtime value.
///
/// All JSON numbers collapse into the language's single double-precision
/// numeric type.
pub fn from_json(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Boolean(b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
        Json::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

/// Convert a runtime value to JSON.
///
/// NaN and the infinities have no JSON form and become `null`. Object keys
/// come out sorted, so the textual form is deterministic.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Boolean(b) => Json::Bool(*b),
        Value::Number(n) => json_number(*n),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                out.insert(key.clone(), to_json(value));
            }
            Json::Object(out)
        }
    }
}

/// Whole numbers serialize as JSON integers so that container text matches
/// the scalar form (`14`, not `14.0`).
fn json_number(n: f64) -> Json {
    if n.fract() == 0.0 && n.is_finite() && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Json::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
    }
}

/// Compact JSON text form of a runtime value.
pub fn to_json_string(value: &Value) -> String {
    to_json(value).to_string()
}

impl Value {
    /// Convert to a JSON document; see [`to_json`].
    pub fn to_json(&self) -> Json {
        to_json(self)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        from_json(json)
    }
}
