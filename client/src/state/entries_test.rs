use super::*;
use serde_json::json;

#[test]
fn from_json_keeps_server_key_order() {
    let body = json!({ "zeta": "last-alpha", "alpha": 1, "mid": true });
    let entries = KeyValues::from_json(body).unwrap();
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn from_json_accepts_scalar_sequences() {
    let body = json!({ "groups": ["admins", "ops"], "email": "ada@example.com" });
    let entries = KeyValues::from_json(body).unwrap();
    assert_eq!(
        entries.get("groups"),
        Some(&FieldValue::List(vec![
            Scalar::Text("admins".to_owned()),
            Scalar::Text("ops".to_owned())
        ]))
    );
    assert_eq!(entries.len(), 2);
}

#[test]
fn from_json_rejects_non_object_bodies() {
    let err = KeyValues::from_json(json!(["a", "b"])).unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON object, got an array");
}

#[test]
fn from_json_rejects_nested_objects() {
    let err = KeyValues::from_json(json!({ "address": { "city": "Oslo" } })).unwrap_err();
    assert_eq!(err.to_string(), "unsupported value for field \"address\"");
}

#[test]
fn display_renders_scalars_textually() {
    assert_eq!(FieldValue::Scalar(Scalar::Text("ada".to_owned())).display(), "ada");
    assert_eq!(FieldValue::Scalar(Scalar::Bool(true)).display(), "true");
    assert_eq!(FieldValue::Scalar(Scalar::Number(42.into())).display(), "42");
    assert_eq!(FieldValue::Scalar(Scalar::Null).display(), "null");
}

#[test]
fn display_drops_fraction_of_integral_floats() {
    let number = |raw: &str| FieldValue::Scalar(serde_json::from_str::<Scalar>(raw).unwrap()).display();
    assert_eq!(number("1.0"), "1");
    assert_eq!(number("-3.0"), "-3");
    assert_eq!(number("-0.0"), "0");
    assert_eq!(number("1.5"), "1.5");
    assert_eq!(number("12"), "12");
}

#[test]
fn display_joins_sequences_with_comma() {
    let value = FieldValue::List(vec![
        Scalar::Text("a".to_owned()),
        Scalar::Null,
        Scalar::Number(3.into()),
    ]);
    assert_eq!(value.display(), "a, , 3");
    assert_eq!(FieldValue::List(Vec::new()).display(), "");
}

#[test]
fn deserialize_from_text_preserves_order() {
    let entries: KeyValues = serde_json::from_str(r#"{"b":"1","a":["x"]}"#).unwrap();
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["b", "a"]);
}
