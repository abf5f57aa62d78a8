/// How an integer literal that does not fit in an `i64` is handled.
///
/// Only literals without a fraction or exponent are affected. Literals with
/// either are always parsed as floats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum IntegerOverflow {
    /// Fail with [`ErrorKind::NumberOutOfRange`](crate::ErrorKind::NumberOutOfRange).
    #[default]
    Error,
    /// Emit the literal as a float instead.
    Float,
}

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use saxjson::{DomBuilder, IntegerOverflow, Parser, ParserOptions, Value};
///
/// let options = ParserOptions {
///     integer_overflow: IntegerOverflow::Float,
///     ..Default::default()
/// };
/// let mut parser = Parser::with_options(DomBuilder::new(), options);
/// assert_eq!(
///     parser.parse("18446744073709551616"),
///     Some(Value::Float(18_446_744_073_709_551_616.0))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// The deepest nesting of arrays and objects accepted before the parser
    /// fails with [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep).
    ///
    /// A top-level array has depth 1.
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,

    /// What to do with integer literals outside the `i64` range.
    ///
    /// # Default
    ///
    /// [`IntegerOverflow::Error`]
    pub integer_overflow: IntegerOverflow,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}

impl ParserOptions {
    /// The default value of [`ParserOptions::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            integer_overflow: IntegerOverflow::default(),
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
