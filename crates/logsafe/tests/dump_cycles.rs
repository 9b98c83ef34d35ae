use logsafe::{CIRCULAR_SENTINEL, List, Map, Value, dump};
use serde_json::json;

#[test]
fn self_referential_map() {
    let d = Map::new();
    d.insert("self", Value::Object(d.clone()));
    let parsed: serde_json::Value = serde_json::from_str(&dump(&Value::Object(d))).unwrap();
    assert_eq!(parsed["self"], CIRCULAR_SENTINEL);
}

#[test]
fn list_containing_itself() {
    let l = List::new();
    l.push(Value::Array(l.clone()));
    l.push(Value::from(1));
    let parsed: serde_json::Value = serde_json::from_str(&dump(&Value::Array(l))).unwrap();
    assert_eq!(parsed, json!([CIRCULAR_SENTINEL, 1]));
}

#[test]
fn mutual_cycle_between_maps() {
    let a = Map::new();
    let b = Map::new();
    a.insert("b", Value::Object(b.clone()));
    b.insert("a", Value::Object(a.clone()));
    let parsed: serde_json::Value = serde_json::from_str(&dump(&Value::Object(a))).unwrap();
    assert_eq!(parsed["b"]["a"], CIRCULAR_SENTINEL);
}

#[test]
fn shared_value_on_two_paths_is_not_a_cycle() {
    let shared = List::from_iter([Value::from(1), Value::from(2)]);
    let v = Value::object([
        ("x", Value::Array(shared.clone())),
        ("y", Value::Array(shared)),
    ]);
    let parsed: serde_json::Value = serde_json::from_str(&dump(&v)).unwrap();
    assert_eq!(parsed["x"], json!([1, 2]));
    assert_eq!(parsed["y"], json!([1, 2]));
}

#[test]
fn distinct_equal_containers_are_not_a_cycle() {
    let inner = || Value::array([Value::from(7)]);
    let v = Value::array([inner(), inner()]);
    let parsed: serde_json::Value = serde_json::from_str(&dump(&v)).unwrap();
    assert_eq!(parsed, json!([[7], [7]]));
}

#[test]
fn mixed_type_tangle_still_parses() {
    let list = List::new();
    let map = Map::new();
    let set = List::new();
    list.push(Value::Object(map.clone()));
    map.insert("set", Value::Set(set.clone()));
    set.push(Value::Array(list.clone()));
    set.push(Value::from("leaf"));

    let out = dump(&Value::Array(list));
    serde_json::from_str::<serde_json::Value>(&out).unwrap();
    assert!(out.contains(CIRCULAR_SENTINEL));
}
