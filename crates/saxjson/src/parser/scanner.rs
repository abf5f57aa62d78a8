//! Byte cursor and scalar lexing.
//!
//! The scanner never decides what is allowed where; the parser peeks the next
//! significant byte, picks a path based on its state, and only then asks the
//! scanner to lex a string, number or keyword.
use alloc::string::String;

use bstr::ByteSlice;

use super::{
    escape_buffer::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate, is_low_surrogate},
    literal_buffer::{ExpectedLiteralBuffer, ExpectedLiteralValue, Step},
    number::{Number, NumberLexeme},
};
use crate::{
    error::{ErrorKind, ParserError},
    options::IntegerOverflow,
};

/// Bytes that end a run of plain string content.
const STRING_STOP: &[u8] = b"\"\\\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c\x0d\x0e\x0f\
\x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1a\x1b\x1c\x1d\x1e\x1f";

/// Where the decoded text of a string lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Text<'src> {
    /// No escapes: the text is a slice of the input.
    Borrowed(&'src str),
    /// Escapes were decoded into the caller's scratch buffer.
    Scratch,
}

impl<'src> Text<'src> {
    pub fn resolve<'a>(self, scratch: &'a str) -> &'a str
    where
        'src: 'a,
    {
        match self {
            Text::Borrowed(s) => s,
            Text::Scratch => scratch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar<'src> {
    String(Text<'src>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(input: &'src [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        self.pos += 1;
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// An error located at the current byte.
    pub fn error(&self, kind: ErrorKind) -> ParserError {
        self.error_at(kind, self.pos)
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParserError {
        ParserError::at(kind, self.input, offset)
    }

    /// Lexes a string, number or keyword starting at the current byte.
    pub fn scan_scalar(
        &mut self,
        scratch: &mut String,
        overflow: IntegerOverflow,
    ) -> Result<Scalar<'src>, ParserError> {
        match self.peek() {
            Some(b'"') => self.scan_string(scratch).map(Scalar::String),
            Some(b'-' | b'0'..=b'9') => self.scan_number(overflow),
            Some(first @ (b't' | b'f' | b'n')) => self.scan_literal(first),
            Some(b',' | b':' | b'[' | b']' | b'{' | b'}') | None => {
                Err(self.error(ErrorKind::ExpectedToken))
            }
            Some(_) => Err(self.error(ErrorKind::UnrecognizedToken)),
        }
    }

    fn scan_literal(&mut self, first: u8) -> Result<Scalar<'src>, ParserError> {
        let mut literal = ExpectedLiteralBuffer::new(first);
        self.bump();
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error(ErrorKind::ExpectedToken));
            };
            match literal.step(b) {
                Step::NeedMore => self.bump(),
                Step::Done(value) => {
                    self.bump();
                    return Ok(match value {
                        ExpectedLiteralValue::Null => Scalar::Null,
                        ExpectedLiteralValue::True => Scalar::Boolean(true),
                        ExpectedLiteralValue::False => Scalar::Boolean(false),
                    });
                }
                Step::Reject => return Err(self.error(ErrorKind::UnrecognizedToken)),
            }
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn expect_digits(&mut self) -> Result<(), ParserError> {
        if self.skip_digits() == 0 {
            return Err(self.error(ErrorKind::ExpectedDigits));
        }
        Ok(())
    }

    /// Lexes `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
    ///
    /// A leading zero ends the integer part, so `01` lexes as `0` and leaves
    /// `1` for the caller to reject.
    fn scan_number(&mut self, overflow: IntegerOverflow) -> Result<Scalar<'src>, ParserError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(self.error(ErrorKind::ExpectedDigits)),
        }

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            self.bump();
            self.expect_digits()?;
            is_float = true;
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.bump();
            if let Some(b'+' | b'-') = self.peek() {
                self.bump();
            }
            self.expect_digits()?;
            is_float = true;
        }

        let input: &'src [u8] = self.input;
        let text = input[start..self.pos]
            .to_str()
            .map_err(|_| self.error_at(ErrorKind::ExpectedDigits, start))?;
        let lexeme = if is_float {
            NumberLexeme::Float(text)
        } else {
            NumberLexeme::Integer(text)
        };
        log::trace!("number lexeme {lexeme:?}");
        match lexeme.decode(overflow) {
            Ok(Number::Integer(n)) => Ok(Scalar::Integer(n)),
            Ok(Number::Float(f)) => Ok(Scalar::Float(f)),
            Err(kind) => Err(self.error_at(kind, start)),
        }
    }

    /// Validates `input[from..to]` as UTF-8.
    fn run(&self, from: usize, to: usize) -> Result<&'src str, ParserError> {
        let input: &'src [u8] = self.input;
        input[from..to]
            .to_str()
            .map_err(|e| self.error_at(ErrorKind::BadUnicodeCodePoint, from + e.valid_up_to()))
    }

    /// Lexes a string starting at its opening quote.
    ///
    /// Text without escapes is borrowed from the input. Once an escape is
    /// seen, `scratch` is cleared and the decoded text accumulates there.
    pub fn scan_string(&mut self, scratch: &mut String) -> Result<Text<'src>, ParserError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.bump();
        let mut buffered = false;
        let mut run_start = self.pos;

        loop {
            let Some(skip) = self.input[self.pos..].find_byteset(STRING_STOP) else {
                self.run(run_start, self.input.len())?;
                self.pos = self.input.len();
                return Err(self.error(ErrorKind::ExpectedCloseQuote));
            };
            self.pos += skip;
            let run = self.run(run_start, self.pos)?;

            match self.input[self.pos] {
                b'"' => {
                    self.bump();
                    if !buffered {
                        return Ok(Text::Borrowed(run));
                    }
                    scratch.push_str(run);
                    return Ok(Text::Scratch);
                }
                b'\\' => {
                    if !buffered {
                        scratch.clear();
                        buffered = true;
                    }
                    scratch.push_str(run);
                    self.scan_escape(scratch)?;
                    run_start = self.pos;
                }
                _ => return Err(self.error(ErrorKind::BadUnicodeCodePoint)),
            }
        }
    }

    fn scan_escape(&mut self, scratch: &mut String) -> Result<(), ParserError> {
        self.bump();
        let Some(b) = self.peek() else {
            return Err(self.error(ErrorKind::InvalidEscapeChar));
        };
        let decoded = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.bump();
                let c = self.scan_unicode_escape()?;
                scratch.push(c);
                return Ok(());
            }
            _ => return Err(self.error(ErrorKind::InvalidEscapeChar)),
        };
        self.bump();
        scratch.push(decoded);
        Ok(())
    }

    fn read_code_unit(&mut self) -> Result<u16, ParserError> {
        let mut buffer = UnicodeEscapeBuffer::new();
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error(ErrorKind::InvalidEscapeChar));
            };
            match buffer.feed(b) {
                Ok(None) => self.bump(),
                Ok(Some(unit)) => {
                    self.bump();
                    return Ok(unit);
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    /// Decodes the digits after `\u`, pairing a high surrogate with the
    /// `\uXXXX` low surrogate that must follow it.
    fn scan_unicode_escape(&mut self) -> Result<char, ParserError> {
        let escape_start = self.pos - 2;
        let unit = self.read_code_unit()?;

        if is_low_surrogate(unit) {
            return Err(self.error_at(ErrorKind::BadUnicodeCodePoint, escape_start));
        }
        if !is_high_surrogate(unit) {
            return char::from_u32(u32::from(unit))
                .ok_or_else(|| self.error_at(ErrorKind::BadUnicodeCodePoint, escape_start));
        }

        if self.peek() != Some(b'\\') {
            return Err(self.error_at(ErrorKind::BadUnicodeCodePoint, escape_start));
        }
        self.bump();
        match self.peek() {
            Some(b'u') => self.bump(),
            Some(_) => return Err(self.error_at(ErrorKind::BadUnicodeCodePoint, escape_start)),
            None => return Err(self.error(ErrorKind::InvalidEscapeChar)),
        }
        let low = self.read_code_unit()?;
        combine_surrogates(unit, low)
            .ok_or_else(|| self.error_at(ErrorKind::BadUnicodeCodePoint, escape_start))
    }
}
