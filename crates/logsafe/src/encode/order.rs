//! Deterministic ordering for set elements.
//!
//! Sets carry no intrinsic order, so the serialized form imposes one:
//! numbers sort numerically, booleans and strings by natural order, and
//! anything else by kind rank and then canonical JSON text. Two equal sets
//! always serialize to the same array regardless of insertion order.

use std::cmp::Ordering;

use serde_json::Value as Json;

pub(crate) fn compare_nodes(a: &Json, b: &Json) -> Ordering {
    match (a, b) {
        (Json::Number(x), Json::Number(y)) => numeric(x).total_cmp(&numeric(y)),
        (Json::Bool(x), Json::Bool(y)) => x.cmp(y),
        (Json::String(x), Json::String(y)) => x.cmp(y),
        _ => rank(a)
            .cmp(&rank(b))
            .then_with(|| text_form(a).cmp(&text_form(b))),
    }
}

fn rank(node: &Json) -> u8 {
    match node {
        Json::Null => 0,
        Json::Bool(_) => 1,
        Json::Number(_) => 2,
        Json::String(_) => 3,
        Json::Array(_) => 4,
        Json::Object(_) => 5,
    }
}

fn numeric(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

fn text_form(node: &Json) -> String {
    serde_json::to_string(node).unwrap_or_default()
}
