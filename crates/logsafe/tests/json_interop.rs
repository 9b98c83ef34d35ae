use logsafe::{Key, Map, Options, Value, dump, to_json_value};
use serde_json::json;

#[test]
fn from_json_value_dumps_to_the_same_document() {
    let source = json!({"a": 1, "b": [true, "x", 2.5], "c": {"d": null}});
    let value = Value::from(source.clone());
    let parsed: serde_json::Value = serde_json::from_str(&dump(&value)).unwrap();
    assert_eq!(parsed, source);
}

#[test]
fn serialize_impl_matches_dump() {
    let value = Value::object([
        ("name", Value::from("test")),
        ("set", Value::set([2, 1].map(Value::from))),
    ]);
    assert_eq!(serde_json::to_string(&value).unwrap(), dump(&value));
}

#[test]
fn to_json_value_builds_the_output_node() {
    let value = Value::array([Value::from(1), Value::Null]);
    let node = to_json_value(&value, &Options::default());
    assert_eq!(node, json!([1, null]));
}

#[test]
fn primitive_keys_are_stringified() {
    let m = Map::new();
    m.insert(Key::Bool(true), Value::from(1));
    m.insert(Key::Int(42), Value::from(2));
    m.insert("name", Value::from(3));
    let parsed: serde_json::Value =
        serde_json::from_str(&dump(&Value::Object(m))).unwrap();
    assert_eq!(parsed, json!({"true": 1, "42": 2, "name": 3}));
}

#[test]
fn duplicate_map_keys_replace_in_place() {
    let m = Map::new();
    m.insert("k", Value::from(1));
    m.insert("other", Value::from(2));
    m.insert("k", Value::from(3));
    assert_eq!(dump(&Value::Object(m)), r#"{"k":3,"other":2}"#);
}
