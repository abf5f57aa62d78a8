//! Decoding of four-digit `\uXXXX` escapes into UTF-16 code units.
//!
//! The [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a `u16` as they arrive. Turning code
//! units into `char`s is left to the caller, because a high surrogate is only
//! meaningful together with the low surrogate that must follow it.

use crate::error::ErrorKind;

#[derive(Debug, Default)]
/// Accumulates up to four hexadecimal digits into a UTF-16 code unit.
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some(u16::from(b - b'0')),
            b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
            b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
            _ => None,
        }
    }

    /// Feeds one byte of the escape.
    ///
    /// - Returns `Ok(None)` while fewer than four digits have been provided.
    /// - Returns `Ok(Some(unit))` on the fourth digit and resets the buffer.
    /// - Returns [`ErrorKind::InvalidEscapeChar`] if `b` is not a hex digit.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, ErrorKind> {
        let d = Self::hex_val(b).ok_or(ErrorKind::InvalidEscapeChar)?;
        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::default();
        Ok(Some(unit))
    }
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a high and a low surrogate into the scalar value they encode.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}
