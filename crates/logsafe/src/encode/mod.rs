//! Fail-safe conversion of arbitrary value graphs into JSON text.
//!
//! Every exit path is a successful textual result: cycles, excessive depth,
//! and unrepresentable values all collapse to in-band sentinel strings
//! rather than errors.

pub(crate) mod order;
mod walk;

use crate::options::Options;
use crate::value::Value;

/// Sentinel emitted in place of a container that contains itself.
pub const CIRCULAR_SENTINEL: &str = "CircularReference Detected";

/// Sentinel emitted in place of a container nested at or beyond `max_depth`.
pub const MAX_DEPTH_SENTINEL: &str = "MaxDepthExceeded";

/// Sentinel emitted for a value with no usable text form.
pub const UNSERIALIZABLE_SENTINEL: &str = "Unserializable Object";

pub fn value_to_json(value: &Value, options: &Options) -> serde_json::Value {
    walk::Walk::new(options.max_depth).build(value, 0)
}

pub fn value_to_string(value: &Value, options: &Options) -> String {
    let node = value_to_json(value, options);
    serde_json::to_string(&node).unwrap_or_else(|_| format!("\"{}\"", UNSERIALIZABLE_SENTINEL))
}
