//! Payload Extraction
//!
//! List endpoints answer `{"<field>": [...], "count": n}`. Anything other
//! than an array under the field (missing, `null`, an object) is an empty
//! list, and entries that don't match the model are dropped one by one.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Deserialize the array stored under `field`, tolerating malformed payloads
pub fn list_field<T: DeserializeOwned>(payload: &Value, field: &str) -> Vec<T> {
    let Some(entries) = payload.get(field).and_then(Value::as_array) else {
        match payload.get(field) {
            None | Some(Value::Null) => log::debug!("Payload has no '{}' list", field),
            Some(other) => log::warn!("Expected '{}' to be an array, got {}", field, kind(other)),
        }
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match T::deserialize(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping malformed '{}' entry: {}", field, e);
                None
            }
        })
        .collect()
}

/// Human-readable message from an error body.
///
/// Handles both `{"detail": "text"}` and validation errors shaped like
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn error_detail(payload: &Value) -> Option<String> {
    match payload.get("detail")? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
