use thiserror::Error;

/// The closed set of reasons a parse can fail.
///
/// A successful parse has no error kind at all; see
/// [`Parser::error_kind`](crate::Parser::error_kind).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No token was found where a value or structural character was required.
    #[error("expected a token")]
    ExpectedToken,
    /// A number is missing the digits after a sign, decimal point or
    /// exponent marker.
    #[error("expected digits")]
    ExpectedDigits,
    /// Non-whitespace input follows the top-level value.
    #[error("unexpected extra input")]
    UnexpectedExtraInput,
    /// The input ended inside a string.
    #[error("expected a closing quote")]
    ExpectedCloseQuote,
    /// An unknown escape, or a malformed or truncated `\u` escape.
    #[error("invalid escape character")]
    InvalidEscapeChar,
    /// A raw control character, an unpaired surrogate or malformed UTF-8.
    #[error("bad unicode code point")]
    BadUnicodeCodePoint,
    /// A number cannot be represented without overflow or underflow.
    #[error("number out of range")]
    NumberOutOfRange,
    /// An array element, `,` or `]` was expected.
    #[error("expected an array member")]
    ExpectedArrayMember,
    /// An object member, `:`, `,` or `}` was expected.
    #[error("expected an object member")]
    ExpectedObjectMember,
    /// A value inside an array or object does not spell any JSON token.
    #[error("unrecognized token")]
    UnrecognizedToken,
    /// An object key is not a string.
    #[error("expected a string")]
    ExpectedString,
    /// Containers are nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A parse failure, with the location at which it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset into the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl ParserError {
    /// Builds an error for `kind` detected at byte `offset` of `input`.
    pub(crate) fn at(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        // Continuation bytes do not start a character.
        let column = 1 + consumed[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count();
        Self {
            kind,
            offset,
            line,
            column,
        }
    }
}
