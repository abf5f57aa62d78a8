use crate::{error::ErrorKind, options::IntegerOverflow};

/// Lexical hint so integers and floats are decoded differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    /// No `.` and no exponent.
    Integer(&'a str),
    /// Has a `.` or an exponent.
    Float(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Float(f64),
}

impl NumberLexeme<'_> {
    /// Converts a grammatically valid literal to its value.
    pub fn decode(self, overflow: IntegerOverflow) -> Result<Number, ErrorKind> {
        match self {
            // `-0` parses as plain `0`.
            Self::Integer(text) => match text.parse::<i64>() {
                Ok(n) => Ok(Number::Integer(n)),
                Err(_) => match overflow {
                    IntegerOverflow::Error => Err(ErrorKind::NumberOutOfRange),
                    IntegerOverflow::Float => decode_float(text).map(Number::Float),
                },
            },
            Self::Float(text) => decode_float(text).map(Number::Float),
        }
    }
}

fn decode_float(text: &str) -> Result<f64, ErrorKind> {
    let value: f64 = text.parse().map_err(|_| ErrorKind::NumberOutOfRange)?;
    if !value.is_finite() {
        return Err(ErrorKind::NumberOutOfRange);
    }
    // A non-zero significand that rounds to zero has underflowed.
    if value == 0.0 && has_nonzero_significand(text) {
        return Err(ErrorKind::NumberOutOfRange);
    }
    Ok(value)
}

fn has_nonzero_significand(text: &str) -> bool {
    text.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", Number::Integer(0))]
    #[case("-0", Number::Integer(0))]
    #[case("1234567890", Number::Integer(1_234_567_890))]
    #[case("-9223372036854775808", Number::Integer(i64::MIN))]
    #[case("9223372036854775807", Number::Integer(i64::MAX))]
    fn integers(#[case] text: &str, #[case] expected: Number) {
        assert_eq!(
            NumberLexeme::Integer(text).decode(IntegerOverflow::Error),
            Ok(expected)
        );
    }

    #[rstest]
    #[case("1.234", 1.234)]
    #[case("0e+1", 0.0)]
    #[case("-0.0", -0.0)]
    #[case("1E2", 100.0)]
    #[case("0.000e-999999", 0.0)]
    #[case("5e-324", 5e-324)]
    fn floats(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(
            NumberLexeme::Float(text).decode(IntegerOverflow::Error),
            Ok(Number::Float(expected))
        );
    }

    #[rstest]
    #[case("123e-10000000")]
    #[case("1e400")]
    #[case("-1e400")]
    #[case("1e-400")]
    fn floats_out_of_range(#[case] text: &str) {
        assert_eq!(
            NumberLexeme::Float(text).decode(IntegerOverflow::Error),
            Err(ErrorKind::NumberOutOfRange)
        );
    }

    #[test]
    fn integer_overflow_policy() {
        let text = "9223372036854775808";
        assert_eq!(
            NumberLexeme::Integer(text).decode(IntegerOverflow::Error),
            Err(ErrorKind::NumberOutOfRange)
        );
        assert_eq!(
            NumberLexeme::Integer(text).decode(IntegerOverflow::Float),
            Ok(Number::Float(9_223_372_036_854_775_808.0))
        );
    }
}
