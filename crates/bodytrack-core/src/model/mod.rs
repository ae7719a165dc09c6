//! Domain records held by the store.
//!
//! Client payloads arrive as loose JSON objects. The `*Draft` / `from_json`
//! constructors pull out the typed fields the engine depends on and keep every
//! other client field verbatim. The typed metric fields are stored as `f64`,
//! so an integer `70` is echoed back as `70.0`.

pub mod entry;
pub mod photo;
pub mod targets;

pub use entry::{Entry, EntryDraft};
pub use photo::{Photo, PhotoDraft};
pub use targets::Targets;

use serde_json::{Map, Value};

use crate::error::{Result, TrackerError};

/// JSON key for the body-fat percentage field.
pub const BODY_FAT_KEY: &str = "bodyFat";
/// JSON key for the weight field.
pub const WEIGHT_KEY: &str = "weight";
/// JSON key for the server-assigned timestamp.
pub const DATE_KEY: &str = "date";

fn into_object(value: Value, what: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(TrackerError::BadRequest(format!(
            "{what} must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Remove `key` and require it to be a JSON number.
fn take_required_number(fields: &mut Map<String, Value>, key: &str) -> Result<f64> {
    match fields.remove(key) {
        None | Some(Value::Null) => Err(TrackerError::malformed(key, "is required")),
        Some(v) => as_number(key, &v),
    }
}

/// Remove `key`; absent or null reads as zero.
fn take_number_or_zero(fields: &mut Map<String, Value>, key: &str) -> Result<f64> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => as_number(key, &v),
    }
}

fn as_number(key: &str, v: &Value) -> Result<f64> {
    v.as_f64().ok_or_else(|| {
        TrackerError::malformed(key, format!("must be a number, got {}", json_kind(v)))
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
