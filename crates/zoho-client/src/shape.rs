//! Normalization of heterogeneous response bodies.
//!
//! Zoho endpoints wrap list payloads differently: some under
//! `response.result`, some under a bare `result`, some return the array
//! itself. Each payload family gets an ordered list of [`ExtractStrategy`]
//! values here; the first strategy that yields an array wins and anything
//! else falls back to an empty list. Upstream shape drift is fixed in this
//! module only.

use serde_json::Value;

/// One way of locating an array inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStrategy {
    /// Follow a chain of object keys.
    Path(&'static [&'static str]),
    /// The body itself.
    Root,
}

impl ExtractStrategy {
    /// Return the array this strategy points at, if it exists.
    pub fn locate<'a>(&self, body: &'a mut Value) -> Option<&'a mut Vec<Value>> {
        let target = match self {
            ExtractStrategy::Root => body,
            ExtractStrategy::Path(keys) => {
                let mut current = body;
                for key in keys.iter() {
                    current = current.as_object_mut()?.get_mut(*key)?;
                }
                current
            }
        };
        target.as_array_mut()
    }
}

/// Record lists from search and listing endpoints.
pub const RECORDS: &[ExtractStrategy] = &[
    ExtractStrategy::Path(&["response", "result"]),
    ExtractStrategy::Path(&["result"]),
    ExtractStrategy::Root,
];

/// Module (form) lists.
pub const MODULES: &[ExtractStrategy] = &[
    ExtractStrategy::Path(&["response", "result"]),
    ExtractStrategy::Path(&["result"]),
    ExtractStrategy::Path(&["forms"]),
    ExtractStrategy::Root,
];

/// Field (component) lists.
pub const FIELDS: &[ExtractStrategy] = &[
    ExtractStrategy::Path(&["response", "result"]),
    ExtractStrategy::Path(&["result"]),
    ExtractStrategy::Path(&["fields"]),
    ExtractStrategy::Root,
];

/// Timeline entries.
pub const TIMELINE: &[ExtractStrategy] = &[
    ExtractStrategy::Path(&["timeline"]),
    ExtractStrategy::Path(&["response", "result"]),
    ExtractStrategy::Path(&["result"]),
    ExtractStrategy::Root,
];

/// Take the first array found by `strategies`, or an empty list.
pub fn extract_array(mut body: Value, strategies: &[ExtractStrategy]) -> Vec<Value> {
    for strategy in strategies {
        if let Some(array) = strategy.locate(&mut body) {
            return std::mem::take(array);
        }
    }
    Vec::new()
}
