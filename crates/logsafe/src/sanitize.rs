//! Copy-safe filtering of metadata mappings.
//!
//! The filter feeds structures that are retained on logging records and
//! duplicated many times later, so it keeps only entries whose value can be
//! duplicated without failing. Unsafe entries are dropped outright — no
//! sentinel, no error — and nested mappings are filtered one level deeper.

use crate::value::{Map, Value};

/// Produce a copy of `metadata` containing only copy-safe entries, in input
/// order. Absent input stays absent.
///
/// Per entry: primitives are kept; sequence-shaped values (arrays, tuples,
/// sets) are kept as-is without judging their elements; nested mappings are
/// recursed; opaque handles are kept only when duplication succeeds, and the
/// duplicate is what the copy retains.
pub fn sanitize(metadata: Option<&Map>) -> Option<Map> {
    metadata.map(|map| sanitize_map(map, &mut Vec::new()))
}

fn sanitize_map(map: &Map, chain: &mut Vec<usize>) -> Map {
    let out = Map::new();
    chain.push(map.identity());
    for (key, value) in map.entries() {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                out.insert(key, value);
            }
            Value::Array(_) | Value::Tuple(_) | Value::Set(_) => {
                out.insert(key, value);
            }
            Value::Object(inner) => {
                // A mapping that is its own ancestor has no independent copy.
                if chain.contains(&inner.identity()) {
                    continue;
                }
                out.insert(key, Value::Object(sanitize_map(&inner, chain)));
            }
            Value::Opaque(handle) => {
                if let Ok(duplicate) = handle.try_clone() {
                    out.insert(key, Value::Opaque(duplicate));
                }
            }
        }
    }
    chain.pop();
    out
}
