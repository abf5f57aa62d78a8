//! Cross-checks the parser against `serde_json` on documents where both
//! are expected to agree.
#![expect(missing_docs)]

mod common;

use rstest::rstest;
use saxjson::{Map, Value};

fn from_serde(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().expect("finite number")),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect::<Map>(),
        ),
    }
}

/// `serde_json` reads every literal with a fraction or exponent as a float
/// too, so trees compare equal once converted.
fn agree(input: &str) {
    let ours = saxjson::parse(input).expect("saxjson rejected a valid document");
    let theirs: serde_json::Value =
        serde_json::from_str(input).expect("serde_json rejected a valid document");
    assert_eq!(ours, from_serde(theirs), "input: {input}");
}

#[test]
fn document_matches_serde_json() {
    agree(common::DOCUMENT);
}

#[rstest]
#[case("null")]
#[case("[]")]
#[case("{}")]
#[case(r#"{"a": {"b": {"c": [1, 2, {"d": null}]}}}"#)]
#[case(r#"{"dup": 1, "other": 2, "dup": 3}"#)]
#[case(r#"["\"\\\/\b\f\n\r\t", "\u0000", "𝄞"]"#)]
#[case("[9223372036854775807, -9223372036854775808]")]
#[case("[1.0, 1e10, 2.5E-3, 0.1, 5e-324]")]
fn scalars_and_containers_match_serde_json(#[case] input: &str) {
    agree(input);
}

#[test]
fn rejections_match_serde_json() {
    for (label, input) in common::INVALID {
        assert!(saxjson::parse(input).is_err(), "saxjson accepted {label}");
        assert!(
            serde_json::from_str::<serde_json::Value>(input).is_err(),
            "serde_json accepted {label}"
        );
    }
}

#[test]
fn canonical_output_is_read_back_by_serde_json() {
    let ours = saxjson::parse(common::DOCUMENT).unwrap();
    let text = ours.to_string();
    let theirs: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(ours, from_serde(theirs));
}

#[cfg(feature = "serde")]
#[test]
fn serde_impls_agree_with_the_parser() {
    let ours = saxjson::parse(r#"{"b": [true, null, "x"], "a": {"n": 3}}"#).unwrap();
    let json = serde_json::to_string(&ours).unwrap();
    assert_eq!(json, r#"{"b":[true,null,"x"],"a":{"n":3}}"#);
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ours);
}
