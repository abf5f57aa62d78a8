//! Strict single-document JSON parser with push-style events.
//!
//! Overview
//! - The parser walks the whole input once, left to right, and calls the
//!   [`EventConsumer`] as soon as each value is recognized. It never builds a
//!   tree itself; [`DomBuilder`](crate::DomBuilder) does that on top of the
//!   events.
//! - Grammar is tracked by an explicit [`ParseState`] plus a stack of open
//!   containers, so nesting depth costs heap, not call stack, and the
//!   configured [`ParserOptions::max_depth`] is the only limit.
//! - Lexing is delegated to [`Scanner`]. The parser peeks one significant byte,
//!   decides from its state whether that byte may start what comes next, and
//!   only then asks the scanner for the token. That keeps error kinds tied to
//!   the grammatical position rather than to the offending byte alone.
//!
//! Strings
//! - A string without escapes reaches the consumer as a slice of the input.
//! - A string with escapes is decoded into a scratch `String` owned by the
//!   parser and reused across strings and parses.
//!
//! Errors
//! - The first violation stops the parse. Events delivered before it stay
//!   delivered; the consumer's `result` is not called. The error is kept on
//!   the parser until the next parse starts.

mod escape_buffer;
mod literal_buffer;
mod number;
mod scanner;

use alloc::{string::String, vec::Vec};

use scanner::{Scalar, Scanner};

use crate::{
    consumer::EventConsumer,
    dom::DomBuilder,
    error::{ErrorKind, ParserError},
    options::ParserOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// The top-level value.
    Start,
    /// After `[`: a value or `]`.
    BeforeArrayValue,
    /// After `,` in an array: a value.
    ArrayValue,
    /// After an array element: `,` or `]`.
    AfterArrayValue,
    /// After `{`: a key or `}`.
    BeforePropertyName,
    /// After `,` in an object: a key.
    PropertyName,
    /// After a key: `:`.
    AfterPropertyName,
    /// After `:`: a value.
    BeforePropertyValue,
    /// After a member value: `,` or `}`.
    AfterPropertyValue,
    /// The top-level value is complete; only whitespace may follow.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Array,
    Object,
}

/// Parses JSON text and drives an [`EventConsumer`].
///
/// A parser can be reused for any number of documents. Each call to
/// [`parse`](Self::parse) or [`try_parse`](Self::try_parse) starts from a
/// clean slate and resets the consumer first.
///
/// # Examples
///
/// ```rust
/// use saxjson::{DomBuilder, ErrorKind, Parser, Value};
///
/// let mut parser = Parser::new(DomBuilder::new());
/// assert_eq!(parser.parse("[1]"), Some(Value::Array(vec![Value::Integer(1)])));
/// assert_eq!(parser.error_kind(), None);
///
/// assert_eq!(parser.parse("[1] x"), None);
/// let err = parser.last_error().unwrap();
/// assert_eq!(err.kind, ErrorKind::UnexpectedExtraInput);
/// assert_eq!((err.line, err.column), (1, 5));
/// ```
#[derive(Debug)]
pub struct Parser<C> {
    consumer: C,
    options: ParserOptions,
    error: Option<ParserError>,

    parse_state: ParseState,
    frames: Vec<Frame>,
    /// Decoded text of the most recent string that contained escapes.
    scratch: String,
}

impl Default for Parser<DomBuilder> {
    fn default() -> Self {
        Self::new(DomBuilder::new())
    }
}

impl<C: EventConsumer> Parser<C> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(consumer: C) -> Self {
        Self::with_options(consumer, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(consumer: C, options: ParserOptions) -> Self {
        Self {
            consumer,
            options,
            error: None,
            parse_state: ParseState::Start,
            frames: Vec::new(),
            scratch: String::new(),
        }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses one complete document.
    ///
    /// Returns the consumer's result on success. On failure returns `None`;
    /// the reason is available from [`last_error`](Self::last_error).
    pub fn parse(&mut self, input: impl AsRef<[u8]>) -> Option<C::Output> {
        self.try_parse(input).ok()
    }

    /// Parses one complete document, returning the error on failure.
    ///
    /// The error is also kept and reported by
    /// [`last_error`](Self::last_error) until the next parse.
    ///
    /// # Errors
    ///
    /// Returns the first grammar, encoding, range or depth violation in
    /// `input`.
    pub fn try_parse(&mut self, input: impl AsRef<[u8]>) -> Result<C::Output, ParserError> {
        let input = input.as_ref();
        self.error = None;
        self.parse_state = ParseState::Start;
        self.frames.clear();
        self.consumer.reset();

        let mut scanner = Scanner::new(input);
        match self.run(&mut scanner) {
            Ok(()) => {
                log::debug!("parsed {} bytes", input.len());
                Ok(self.consumer.result())
            }
            Err(err) => {
                log::debug!("parse failed: {err}");
                #[cfg(any(test, feature = "fuzzing"))]
                assert!(
                    !self.options.panic_on_error,
                    "Syntax error at {}:{}: {err}",
                    err.line, err.column
                );
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// The error from the most recent parse, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&ParserError> {
        self.error.as_ref()
    }

    /// The kind of the error from the most recent parse, or `None` if it
    /// succeeded or no parse has run yet.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|err| err.kind)
    }

    /// The consumer.
    #[must_use]
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// The consumer, mutably.
    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    /// Consumes the parser, returning the consumer.
    pub fn into_consumer(self) -> C {
        self.consumer
    }

    fn run(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ParserError> {
        loop {
            scanner.skip_whitespace();
            if self.parse_state == ParseState::End {
                return match scanner.peek() {
                    None => Ok(()),
                    Some(_) => Err(scanner.error(ErrorKind::UnexpectedExtraInput)),
                };
            }
            self.dispatch_parse_state(scanner)?;
        }
    }

    fn dispatch_parse_state(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ParserError> {
        use ParseState::*;

        let next = scanner.peek();
        log::trace!(
            "{:?} at {}: {:?}",
            self.parse_state,
            scanner.pos(),
            next.map(char::from)
        );

        match self.parse_state {
            // Outside any container a token that starts no value counts as a
            // missing one.
            Start => match next {
                None => Err(scanner.error(ErrorKind::ExpectedToken)),
                Some(_) => self.value(scanner).map_err(|mut err| {
                    if err.kind == ErrorKind::UnrecognizedToken {
                        err.kind = ErrorKind::ExpectedToken;
                    }
                    err
                }),
            },

            BeforeArrayValue => match next {
                None => Err(scanner.error(ErrorKind::ExpectedArrayMember)),
                Some(b']') => self.pop(scanner),
                Some(_) => self.value(scanner),
            },

            ArrayValue => match next {
                None => Err(scanner.error(ErrorKind::ExpectedArrayMember)),
                Some(_) => self.value(scanner),
            },

            AfterArrayValue => match next {
                Some(b',') => {
                    scanner.bump();
                    self.parse_state = ArrayValue;
                    Ok(())
                }
                Some(b']') => self.pop(scanner),
                _ => Err(scanner.error(ErrorKind::ExpectedArrayMember)),
            },

            BeforePropertyName => match next {
                None => Err(scanner.error(ErrorKind::ExpectedObjectMember)),
                Some(b'}') => self.pop(scanner),
                Some(_) => self.property_name(scanner),
            },

            PropertyName => match next {
                None => Err(scanner.error(ErrorKind::ExpectedObjectMember)),
                Some(_) => self.property_name(scanner),
            },

            AfterPropertyName => match next {
                Some(b':') => {
                    scanner.bump();
                    self.parse_state = BeforePropertyValue;
                    Ok(())
                }
                _ => Err(scanner.error(ErrorKind::ExpectedObjectMember)),
            },

            BeforePropertyValue => match next {
                None => Err(scanner.error(ErrorKind::ExpectedObjectMember)),
                Some(_) => self.value(scanner),
            },

            AfterPropertyValue => match next {
                Some(b',') => {
                    scanner.bump();
                    self.parse_state = PropertyName;
                    Ok(())
                }
                Some(b'}') => self.pop(scanner),
                _ => Err(scanner.error(ErrorKind::ExpectedObjectMember)),
            },

            End => match next {
                None => Ok(()),
                Some(_) => Err(scanner.error(ErrorKind::UnexpectedExtraInput)),
            },
        }
    }

    fn property_name(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ParserError> {
        match scanner.peek() {
            Some(b'"') => {
                let text = scanner.scan_string(&mut self.scratch)?;
                self.consumer.string_value(text.resolve(&self.scratch));
                self.parse_state = ParseState::AfterPropertyName;
                Ok(())
            }
            Some(b',' | b'}') => Err(scanner.error(ErrorKind::ExpectedToken)),
            _ => Err(scanner.error(ErrorKind::ExpectedString)),
        }
    }

    fn value(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ParserError> {
        match scanner.peek() {
            Some(b'[') => return self.push(scanner, Frame::Array),
            Some(b'{') => return self.push(scanner, Frame::Object),
            _ => {}
        }

        match scanner.scan_scalar(&mut self.scratch, self.options.integer_overflow)? {
            Scalar::String(text) => self.consumer.string_value(text.resolve(&self.scratch)),
            Scalar::Integer(n) => self.consumer.integer_value(n),
            Scalar::Float(f) => self.consumer.float_value(f),
            Scalar::Boolean(b) => self.consumer.boolean_value(b),
            Scalar::Null => self.consumer.null_value(),
        }
        self.after_value();
        Ok(())
    }

    /// Opens a container at the current `[` or `{`.
    fn push(&mut self, scanner: &mut Scanner<'_>, frame: Frame) -> Result<(), ParserError> {
        if self.frames.len() >= self.options.max_depth {
            return Err(scanner.error(ErrorKind::NestingTooDeep));
        }
        scanner.bump();
        self.frames.push(frame);
        match frame {
            Frame::Array => {
                self.consumer.begin_array();
                self.parse_state = ParseState::BeforeArrayValue;
            }
            Frame::Object => {
                self.consumer.begin_object();
                self.parse_state = ParseState::BeforePropertyName;
            }
        }
        Ok(())
    }

    /// Closes the innermost container at the current `]` or `}`.
    fn pop(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ParserError> {
        scanner.bump();
        match self.frames.pop() {
            Some(Frame::Array) => self.consumer.end_array(),
            Some(Frame::Object) => self.consumer.end_object(),
            None => return Err(scanner.error(ErrorKind::UnexpectedExtraInput)),
        }
        self.after_value();
        Ok(())
    }

    fn after_value(&mut self) {
        self.parse_state = match self.frames.last() {
            None => ParseState::End,
            Some(Frame::Array) => ParseState::AfterArrayValue,
            Some(Frame::Object) => ParseState::AfterPropertyValue,
        };
    }
}
