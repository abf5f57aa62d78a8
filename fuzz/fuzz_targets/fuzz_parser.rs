#![no_main]
use libfuzzer_sys::fuzz_target;
use saxjson::{DomBuilder, EventRecorder, IntegerOverflow, Parser, ParserOptions};

/// The first input byte picks the options; the rest is the document.
fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        max_depth: 1 + usize::from(flags & 0x3F),
        integer_overflow: if flags & 0x40 != 0 {
            IntegerOverflow::Float
        } else {
            IntegerOverflow::Error
        },
        panic_on_error: false,
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, input)) = data.split_first() else {
        return;
    };
    let options = options(flags);

    let value = Parser::with_options(DomBuilder::new(), options).try_parse(input);
    let events = Parser::with_options(EventRecorder::new(), options).try_parse(input);

    // The verdict does not depend on the consumer.
    assert_eq!(value.as_ref().err(), events.as_ref().err());

    let Ok(value) = value else {
        return;
    };

    let text = value.to_string();
    let reparsed = Parser::with_options(DomBuilder::new(), options)
        .try_parse(&text)
        .expect("canonical output should parse");
    assert_eq!(reparsed, value, "canonical output: {text}");

    assert!(
        serde_json::from_slice::<serde_json::Value>(input).is_ok(),
        "serde_json rejected a document saxjson accepted: {:?}",
        String::from_utf8_lossy(input)
    );
}

fuzz_target!(|data: &[u8]| parser(data));
