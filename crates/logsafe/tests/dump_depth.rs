use logsafe::{MAX_DEPTH_SENTINEL, Map, Options, Value, dump, dump_with};

fn deep_map(levels: usize) -> Map {
    let root = Map::new();
    let mut cur = root.clone();
    for _ in 0..levels {
        let next = Map::new();
        cur.insert("deeper", Value::Object(next.clone()));
        cur = next;
    }
    root
}

#[test]
fn explicit_depth_bound() {
    let out = dump_with(&Value::Object(deep_map(15)), &Options { max_depth: 5 });
    assert!(out.contains(MAX_DEPTH_SENTINEL));
    serde_json::from_str::<serde_json::Value>(&out).unwrap();
}

#[test]
fn default_depth_bounds_very_deep_input() {
    let out = dump(&Value::Object(deep_map(1000)));
    assert!(out.contains(MAX_DEPTH_SENTINEL));
    serde_json::from_str::<serde_json::Value>(&out).unwrap();
}

#[test]
fn truncation_replaces_the_container_at_the_limit() {
    let out = dump_with(&Value::Object(deep_map(5)), &Options { max_depth: 2 });
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["deeper"]["deeper"], MAX_DEPTH_SENTINEL);
}

#[test]
fn shallow_input_is_untouched_by_the_default_bound() {
    let out = dump(&Value::Object(deep_map(3)));
    assert!(!out.contains(MAX_DEPTH_SENTINEL));
}

#[test]
fn zero_depth_truncates_the_root_container() {
    let out = dump_with(&Value::Object(deep_map(3)), &Options { max_depth: 0 });
    assert_eq!(out, format!("\"{}\"", MAX_DEPTH_SENTINEL));
}
