/// The set of callbacks a [`Parser`](crate::Parser) drives.
///
/// Events carry only their own payload. Nesting is conveyed by ordering
/// alone: every `begin_*` is balanced by the matching `end_*`, and inside an
/// object each key arrives as a [`string_value`](Self::string_value)
/// immediately before the events of its value.
///
/// The parser never reports errors to the consumer. After a failed parse the
/// events already delivered stay delivered, and [`result`](Self::result) is
/// not called.
///
/// # Examples
///
/// A consumer that sums every integer in a document without building a tree:
///
/// ```rust
/// use saxjson::{EventConsumer, Parser};
///
/// #[derive(Default)]
/// struct Sum(i64);
///
/// impl EventConsumer for Sum {
///     type Output = i64;
///
///     fn string_value(&mut self, _: &str) {}
///     fn integer_value(&mut self, value: i64) {
///         self.0 += value;
///     }
///     fn float_value(&mut self, _: f64) {}
///     fn boolean_value(&mut self, _: bool) {}
///     fn null_value(&mut self) {}
///     fn begin_array(&mut self) {}
///     fn end_array(&mut self) {}
///     fn begin_object(&mut self) {}
///     fn end_object(&mut self) {}
///
///     fn result(&mut self) -> i64 {
///         core::mem::take(&mut self.0)
///     }
///
///     fn reset(&mut self) {
///         self.0 = 0;
///     }
/// }
///
/// let mut parser = Parser::new(Sum::default());
/// assert_eq!(parser.parse(r#"{"a": 1, "b": [2, 3.5, 4]}"#), Some(7));
/// ```
pub trait EventConsumer {
    /// What a successful parse produces.
    type Output;

    /// A string value, or an object key.
    fn string_value(&mut self, value: &str);
    /// A number literal without fraction or exponent.
    fn integer_value(&mut self, value: i64);
    /// A number literal with a fraction or exponent.
    fn float_value(&mut self, value: f64);
    /// `true` or `false`.
    fn boolean_value(&mut self, value: bool);
    /// `null`.
    fn null_value(&mut self);
    /// `[`
    fn begin_array(&mut self);
    /// `]`
    fn end_array(&mut self);
    /// `{`
    fn begin_object(&mut self);
    /// `}`
    fn end_object(&mut self);

    /// Called once after the top-level value has been delivered completely.
    fn result(&mut self) -> Self::Output;

    /// Called before every parse so that a consumer reused across parses
    /// can drop state left over from an earlier failure.
    fn reset(&mut self) {}
}

impl<C: EventConsumer + ?Sized> EventConsumer for &mut C {
    type Output = C::Output;

    fn string_value(&mut self, value: &str) {
        (**self).string_value(value);
    }

    fn integer_value(&mut self, value: i64) {
        (**self).integer_value(value);
    }

    fn float_value(&mut self, value: f64) {
        (**self).float_value(value);
    }

    fn boolean_value(&mut self, value: bool) {
        (**self).boolean_value(value);
    }

    fn null_value(&mut self) {
        (**self).null_value();
    }

    fn begin_array(&mut self) {
        (**self).begin_array();
    }

    fn end_array(&mut self) {
        (**self).end_array();
    }

    fn begin_object(&mut self) {
        (**self).begin_object();
    }

    fn end_object(&mut self) {
        (**self).end_object();
    }

    fn result(&mut self) -> Self::Output {
        (**self).result()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
