use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::{Error, MAX_DEPTH, PropValue};

fn nested(levels: usize) -> Value {
    let mut value = json!("leaf");
    for _ in 0..levels {
        value = json!({ "inner": value });
    }
    value
}

#[test]
fn scalars() {
    assert_eq!(
        PropValue::from_json(&json!("hello")).unwrap(),
        PropValue::String("hello".into())
    );
    assert_eq!(PropValue::from_json(&json!(5)).unwrap(), PropValue::Number);
    assert_eq!(PropValue::from_json(&json!(5.5)).unwrap(), PropValue::Number);
    assert_eq!(PropValue::from_json(&json!(-3)).unwrap(), PropValue::Number);
    assert_eq!(PropValue::from_json(&json!(true)).unwrap(), PropValue::Boolean);
}

#[test]
fn null_and_arrays_are_unknown() {
    assert_eq!(PropValue::from_json(&Value::Null).unwrap(), PropValue::Unknown);
    assert_eq!(PropValue::from_json(&json!([1, 2])).unwrap(), PropValue::Unknown);
    assert_eq!(PropValue::from_json(&json!([])).unwrap(), PropValue::Unknown);
}

#[test]
fn objects_become_sorted_fields() {
    let value = PropValue::from_json(&json!({ "b": 1, "a": { "c": false } })).unwrap();

    let PropValue::Object(fields) = value else {
        panic!("expected object");
    };
    let keys: Vec<_> = fields.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);

    let mut inner = BTreeMap::new();
    inner.insert("c".to_string(), PropValue::Boolean);
    assert_eq!(fields["a"], PropValue::Object(inner));
}

#[test]
fn depth_at_limit_is_accepted() {
    assert!(PropValue::from_json(&nested(MAX_DEPTH)).is_ok());
}

#[test]
fn depth_past_limit_is_rejected() {
    let result = PropValue::from_json(&nested(MAX_DEPTH + 1));

    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn arrays_are_not_descended() {
    let deep_in_array = json!([nested(MAX_DEPTH + 10)]);

    assert_eq!(PropValue::from_json(&deep_in_array).unwrap(), PropValue::Unknown);
}

#[test]
fn fields_from_json_converts_entries() {
    let object = json!({ "x": "s", "y": null });
    let Value::Object(map) = &object else {
        unreachable!()
    };

    let fields = PropValue::fields_from_json(map).unwrap();

    assert_eq!(fields["x"], PropValue::String("s".into()));
    assert_eq!(fields["y"], PropValue::Unknown);
}

#[test]
fn literal_constructor() {
    assert_eq!(
        PropValue::literal("cloudflare.Queue"),
        PropValue::Literal("cloudflare.Queue".into())
    );
}
