#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use saxjson::{ErrorKind, Map, Parser, ParserOptions, Value};
use serde_json::Value as JsonValue;

#[derive(Debug)]
struct ArbitraryValue(JsonValue);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(22)?;
        let value = match node_type {
            0 => JsonValue::Null,
            1 => JsonValue::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                JsonValue::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => JsonValue::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => JsonValue::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                JsonValue::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                JsonValue::Object(m.into_iter().map(|(k, v)| (k, v.0)).collect())
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn from_serde(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().expect("finite number")),
        },
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(from_serde).collect()),
        JsonValue::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect::<Map>(),
        ),
    }
}

fn roundtrip(value: ArbitraryValue) {
    let text = serde_json::to_string(&value.0).expect("serializing a serde_json::Value");
    let options = ParserOptions {
        max_depth: 4096,
        ..Default::default()
    };
    match Parser::with_options(saxjson::DomBuilder::new(), options).try_parse(&text) {
        Ok(parsed) => assert_eq!(parsed, from_serde(value.0), "input: {text}"),
        Err(err) if err.kind == ErrorKind::NestingTooDeep => {}
        Err(err) => panic!("rejected serde_json output {text}: {err}"),
    }
}

fuzz_target!(|value: ArbitraryValue| roundtrip(value));
