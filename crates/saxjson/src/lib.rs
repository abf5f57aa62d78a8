//! A strict RFC 8259 JSON parser with a push (SAX-style) event interface.
//!
//! The [`Parser`] drives any [`EventConsumer`] with a flat sequence of
//! semantic events. [`DomBuilder`] is the bundled consumer that reassembles
//! those events into a [`Value`] tree.
//!
//! ```rust
//! use saxjson::{DomBuilder, ErrorKind, Parser, Value};
//!
//! let mut parser = Parser::new(DomBuilder::new());
//! let value = parser.parse(r#"{"a": [1, 2.5, "x"]}"#).unwrap();
//! assert_eq!(value.get("a").and_then(|a| a.get_index(1)), Some(&Value::Float(2.5)));
//!
//! assert!(parser.parse("[1,").is_none());
//! assert_eq!(parser.error_kind(), Some(ErrorKind::ExpectedArrayMember));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod consumer;
mod dom;
mod error;
mod event;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use consumer::EventConsumer;
pub use dom::DomBuilder;
pub use error::{ErrorKind, ParserError};
pub use event::{EventRecorder, ParseEvent};
pub use options::{IntegerOverflow, ParserOptions};
pub use parser::Parser;
pub use value::{Array, Map, Value, ValueKind};

/// Parses `input` into a [`Value`] tree using default options.
///
/// # Errors
///
/// Returns the first grammar, encoding or range violation found in `input`.
///
/// # Examples
///
/// ```rust
/// let value = saxjson::parse("[true, null]").unwrap();
/// assert_eq!(value.to_string(), "[true, null]");
/// ```
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    parse_with(input, DomBuilder::new())
}

/// Parses `input`, driving `consumer` with the resulting events, and returns
/// the consumer's result.
///
/// # Errors
///
/// Returns the first grammar, encoding or range violation found in `input`.
/// Events emitted before the error have already been delivered to
/// `consumer`.
pub fn parse_with<C: EventConsumer>(
    input: impl AsRef<[u8]>,
    consumer: C,
) -> Result<C::Output, ParserError> {
    Parser::new(consumer).try_parse(input)
}
