#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod opaque;
pub mod encode;
pub mod sanitize;

mod number;

pub use crate::error::{Error, Result};
pub use crate::options::{DEFAULT_MAX_DEPTH, Options};
pub use crate::value::{Key, List, Map, Number, Value};
pub use crate::opaque::OpaqueValue;
pub use crate::encode::{CIRCULAR_SENTINEL, MAX_DEPTH_SENTINEL, UNSERIALIZABLE_SENTINEL};
pub use crate::sanitize::sanitize;

/// Serialize `value` to JSON text with default [`Options`]. Never fails:
/// cycles, depth overruns, and unrepresentable values degrade to sentinel
/// strings inside otherwise valid JSON.
pub fn dump(value: &Value) -> String {
    dump_with(value, &Options::default())
}

/// Serialize `value` to JSON text with explicit [`Options`].
pub fn dump_with(value: &Value, options: &Options) -> String {
    crate::encode::value_to_string(value, options)
}

/// Build the JSON-compatible output node without rendering it to text.
/// Useful when the result is spliced into a larger document.
pub fn to_json_value(value: &Value, options: &Options) -> serde_json::Value {
    crate::encode::value_to_json(value, options)
}
