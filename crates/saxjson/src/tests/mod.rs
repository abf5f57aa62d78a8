mod parse_good;

use crate::{DomBuilder, Parser, ParserOptions, Value};

/// A DOM parser that panics at the error site, for inputs that must parse.
pub(crate) fn strict_parser() -> Parser<DomBuilder> {
    Parser::with_options(
        DomBuilder::new(),
        ParserOptions {
            panic_on_error: true,
            ..Default::default()
        },
    )
}

pub(crate) fn parse_ok(input: &str) -> Value {
    strict_parser()
        .parse(input)
        .expect("panic_on_error reports failures itself")
}
