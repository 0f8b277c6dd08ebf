use serde_json::Value;
use uuid::Uuid;

use crate::error::AppResult;

pub mod cart;
pub mod favorites;
pub mod params;
pub mod products;
pub mod users;

/// Whether a submitted value counts as missing: null, zero, false or empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Drop absent and blank strings.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Ids arrive as strings; a malformed one is an unexpected failure, not a validation error.
pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Ok(Uuid::parse_str(raw.trim())?)
}
