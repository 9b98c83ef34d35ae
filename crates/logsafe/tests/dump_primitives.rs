use logsafe::{Value, dump};
use serde_json::json;

#[test]
fn primitive_fidelity() {
    assert_eq!(dump(&Value::from("test")), "\"test\"");
    assert_eq!(dump(&Value::from(123)), "123");
    assert_eq!(dump(&Value::from(3.14)), "3.14");
    assert_eq!(dump(&Value::from(true)), "true");
    assert_eq!(dump(&Value::Null), "null");
}

#[test]
fn nested_structures() {
    let v = Value::object([
        ("name", Value::from("test")),
        ("numbers", Value::array([1, 2, 3].map(Value::from))),
        (
            "nested",
            Value::object([("a", Value::from(1)), ("b", Value::from(2))]),
        ),
    ]);
    let parsed: serde_json::Value = serde_json::from_str(&dump(&v)).unwrap();
    assert_eq!(parsed["name"], "test");
    assert_eq!(parsed["numbers"], json!([1, 2, 3]));
    assert_eq!(parsed["nested"], json!({"a": 1, "b": 2}));
}

#[test]
fn object_keys_keep_insertion_order() {
    let v = Value::object([
        ("z", Value::from(1)),
        ("a", Value::from(2)),
        ("m", Value::from(3)),
    ]);
    assert_eq!(dump(&v), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn non_finite_floats_dump_as_strings() {
    let v = Value::object([
        ("a", Value::from(f64::NAN)),
        ("b", Value::from(f64::INFINITY)),
        ("c", Value::from(f64::NEG_INFINITY)),
    ]);
    let out = dump(&v);
    assert!(out.contains("\"a\":\"NaN\""));
    assert!(out.contains("\"b\":\"Infinity\""));
    assert!(out.contains("\"c\":\"-Infinity\""));
    serde_json::from_str::<serde_json::Value>(&out).unwrap();
}

#[test]
fn large_u64_survives() {
    let v = Value::from(u64::MAX);
    assert_eq!(dump(&v), u64::MAX.to_string());
}
