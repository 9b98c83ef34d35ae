use serde_json::{Map as JsonMap, Value as Json};

use crate::encode::{CIRCULAR_SENTINEL, MAX_DEPTH_SENTINEL, UNSERIALIZABLE_SENTINEL, order};
use crate::number::nonfinite_name;
use crate::value::{Number, Value};

/// One top-level serialization pass. `chain` holds the identities of the
/// containers on the active path from the root; it is unwound on the way
/// back out, so a value shared by two independent paths is serialized twice
/// rather than reported as a cycle.
pub(super) struct Walk {
    chain: Vec<usize>,
    max_depth: usize,
}

impl Walk {
    pub(super) fn new(max_depth: usize) -> Self {
        Self {
            chain: Vec::new(),
            max_depth,
        }
    }

    pub(super) fn build(&mut self, value: &Value, depth: usize) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_node(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(list) => self.container(list.identity(), depth, |walk| {
                Json::Array(
                    list.items()
                        .into_iter()
                        .map(|child| walk.build(&child, depth + 1))
                        .collect(),
                )
            }),
            Value::Tuple(items) => self.container(items.as_ptr() as usize, depth, |walk| {
                Json::Array(
                    items
                        .iter()
                        .map(|child| walk.build(child, depth + 1))
                        .collect(),
                )
            }),
            Value::Set(list) => self.container(list.identity(), depth, |walk| {
                let mut nodes: Vec<Json> = list
                    .items()
                    .into_iter()
                    .map(|child| walk.build(&child, depth + 1))
                    .collect();
                nodes.sort_by(order::compare_nodes);
                Json::Array(nodes)
            }),
            Value::Object(map) => self.container(map.identity(), depth, |walk| {
                let mut out = JsonMap::new();
                for (key, child) in map.entries() {
                    out.insert(key.to_string(), walk.build(&child, depth + 1));
                }
                Json::Object(out)
            }),
            Value::Opaque(handle) => match handle.repr() {
                Ok(text) => Json::String(text),
                Err(_) => Json::String(UNSERIALIZABLE_SENTINEL.to_string()),
            },
        }
    }

    /// Guards shared by every container arm. Ancestor-chain membership is
    /// checked first, then the depth bound; only then is the subtree
    /// entered. The chain must shrink back after the subtree returns.
    fn container(
        &mut self,
        identity: usize,
        depth: usize,
        emit: impl FnOnce(&mut Self) -> Json,
    ) -> Json {
        if self.chain.contains(&identity) {
            return Json::String(CIRCULAR_SENTINEL.to_string());
        }
        if depth >= self.max_depth {
            return Json::String(MAX_DEPTH_SENTINEL.to_string());
        }
        self.chain.push(identity);
        let node = emit(self);
        self.chain.pop();
        node
    }
}

fn number_node(n: Number) -> Json {
    match n {
        Number::I64(i) => Json::from(i),
        Number::U64(u) => Json::from(u),
        Number::F64(x) => match serde_json::Number::from_f64(x) {
            Some(num) => Json::Number(num),
            None => Json::String(nonfinite_name(x).to_string()),
        },
    }
}
