use alloc::{string::ToString, vec, vec::Vec};

use rstest::rstest;

use super::{parse_ok, strict_parser};
use crate::{
    DomBuilder, ErrorKind, EventRecorder, IntegerOverflow, Map, ParseEvent, Parser, ParserOptions,
    Value,
};

#[rstest]
#[case(" null ", Value::Null)]
#[case(" true ", Value::Boolean(true))]
#[case(" false ", Value::Boolean(false))]
#[case(" 1 ", Value::Integer(1))]
#[case("1234567890", Value::Integer(1_234_567_890))]
#[case("-0", Value::Integer(0))]
#[case("-1", Value::Integer(-1))]
#[case("0e+1", Value::Float(0.0))]
#[case("1.234", Value::Float(1.234))]
#[case("-2.5E-3", Value::Float(-0.0025))]
#[case("\t\r\n\"hello\"\n", Value::from("hello"))]
fn scalars(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse_ok(input), expected);
}

#[rstest]
#[case(r#""\n""#, "\n")]
#[case(r#""\u0041""#, "A")]
#[case("\"\u{1D11E}\"", "\u{1D11E}")]
#[case(r#""\uD834\uDD1E""#, "\u{1D11E}")]
#[case(r#""\u00e9\u00E9""#, "\u{e9}\u{e9}")]
#[case(r#""a\/b""#, "a/b")]
#[case(r#""\u0009""#, "\t")]
#[case(r#""\u002F""#, "/")]
#[case(r#""\u214B\u30A1""#, "\u{214B}\u{30A1}")]
fn strings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_ok(input), Value::from(expected));
}

#[test]
fn empty_containers() {
    assert_eq!(parse_ok(" [ ] "), Value::Array(vec![]));
    assert_eq!(parse_ok("{}"), Value::Object(Map::new()));
    assert_eq!(parse_ok("[{}, []]").to_string(), "[{}, []]");
}

#[test]
fn array_elements_keep_their_types() {
    let v = parse_ok(r#"[ 1 , "hello" ]"#);
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0].as_i64(), Some(1));
    assert_eq!(arr[1].as_str(), Some("hello"));

    assert_eq!(parse_ok("[1.234]").get_index(0), Some(&Value::Float(1.234)));
    assert_eq!(parse_ok("[-0]").get_index(0), Some(&Value::Integer(0)));
    assert_eq!(parse_ok("[0e+1]").get_index(0), Some(&Value::Float(0.0)));
}

#[test]
fn objects() {
    let v = parse_ok(r#"{"a":1}"#);
    assert_eq!(v.get("a"), Some(&Value::Integer(1)));

    let v = parse_ok(r#"{"a": [1,2]}"#);
    assert_eq!(
        v.get("a"),
        Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
    );

    let v = parse_ok(r#" { "a" : 1 , "b" : true } "#);
    assert_eq!(v.to_string(), r#"{"a": 1, "b": true}"#);
}

#[test]
fn duplicate_keys_keep_last_value_in_first_position() {
    let v = parse_ok(r#"{"k": 1, "j": 2, "k": 3}"#);
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["k", "j"]);
    assert_eq!(obj.get("k"), Some(&Value::Integer(3)));
}

#[test]
fn nested_document() {
    let v = parse_ok(
        r#"{
            "users": [
                {"id": 1, "name": "Ada", "tags": ["x", "y"]},
                {"id": 2, "name": "Grace", "tags": []}
            ],
            "meta": {"count": 2, "ratio": 0.5, "next": null}
        }"#,
    );
    assert_eq!(
        v.get("users")
            .and_then(|u| u.get_index(1))
            .and_then(|u| u.get("name"))
            .and_then(Value::as_str),
        Some("Grace")
    );
    assert_eq!(
        v.get("meta").and_then(|m| m.get("ratio")),
        Some(&Value::Float(0.5))
    );
    assert!(v.get("meta").and_then(|m| m.get("next")).unwrap().is_null());
}

#[test]
fn every_event_is_delivered_in_order() {
    let mut parser = Parser::new(EventRecorder::new());
    let events = parser
        .parse(r#"{"a": [1, 2.5, "s", true, null], "b": {}}"#)
        .unwrap();
    assert_eq!(
        events,
        vec![
            ParseEvent::BeginObject,
            ParseEvent::String { value: "a".into() },
            ParseEvent::BeginArray,
            ParseEvent::Integer { value: 1 },
            ParseEvent::Float { value: 2.5 },
            ParseEvent::String { value: "s".into() },
            ParseEvent::Boolean { value: true },
            ParseEvent::Null,
            ParseEvent::EndArray,
            ParseEvent::String { value: "b".into() },
            ParseEvent::BeginObject,
            ParseEvent::EndObject,
            ParseEvent::EndObject,
        ]
    );
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let options = ParserOptions {
        max_depth: 3,
        panic_on_error: true,
        ..Default::default()
    };
    let mut parser = Parser::with_options(DomBuilder::new(), options);
    assert!(parser.parse(r#"[{"a": []}]"#).is_some());
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 10_000;
    let input = "[".repeat(depth) + &"]".repeat(depth);
    let options = ParserOptions {
        max_depth: depth,
        ..Default::default()
    };
    let mut parser = Parser::with_options(EventRecorder::new(), options);
    let events = parser.parse(&input).unwrap();
    assert_eq!(events.len(), 2 * depth);
}

#[test]
fn huge_integers_can_widen_to_floats() {
    let options = ParserOptions {
        integer_overflow: IntegerOverflow::Float,
        panic_on_error: true,
        ..Default::default()
    };
    let mut parser = Parser::with_options(DomBuilder::new(), options);
    assert_eq!(
        parser.parse("[-9223372036854775809, 9223372036854775807]"),
        Some(Value::Array(vec![
            Value::Float(-9_223_372_036_854_775_809.0),
            Value::Integer(i64::MAX),
        ]))
    );
}

#[test]
fn parser_is_reusable_after_an_error() {
    let mut parser = Parser::new(DomBuilder::new());
    assert_eq!(parser.parse("[1, 2"), None);
    assert_eq!(parser.error_kind(), Some(ErrorKind::ExpectedArrayMember));

    assert_eq!(parser.parse("[3]"), Some(Value::Array(vec![Value::Integer(3)])));
    assert_eq!(parser.error_kind(), None);
    assert!(parser.last_error().is_none());
}

#[test]
fn parse_is_idempotent() {
    let input = r#"{"a": [1, {"b": "c\n"}], "d": -0.5e1}"#;
    let mut parser = strict_parser();
    let first = parser.parse(input);
    let second = parser.parse(input);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn canonical_output_reparses_to_the_same_tree() {
    let input = r#"{"s": "q\"b\\ \u0001  ", "f": [1.0, 1e300, -0.0], "i": -7}"#;
    let v = parse_ok(input);
    assert_eq!(parse_ok(&v.to_string()), v);
}

#[test]
fn from_str_parses_values() {
    let v: Value = "[true]".parse().unwrap();
    assert_eq!(v, Value::Array(vec![Value::Boolean(true)]));
    let err = "[true".parse::<Value>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedArrayMember);
}

#[test]
fn byte_input_is_accepted() {
    assert_eq!(
        crate::parse(b"[\"\xc3\xa9\"]".as_slice()),
        Ok(Value::Array(vec![Value::from("\u{e9}")]))
    );
}
