//! Key-tolerant reads from upstream JSON objects.
//!
//! People endpoints name the same attribute differently across forms and API
//! versions. Each reader takes an ordered list of candidate keys; the first
//! key holding a usable value wins.

use serde_json::{Map, Value};

/// First candidate holding a string or number, as a string.
pub(crate) fn first_str(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First candidate holding a boolean-like value.
///
/// Accepts booleans, `"true"`/`"false"` strings and numbers (non-zero is true).
pub(crate) fn first_bool(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// First candidate holding a non-negative integer.
pub(crate) fn first_u32(obj: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// First candidate that is present at all, including `null`.
pub(crate) fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}
