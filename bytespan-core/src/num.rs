//! Decimal Integer Codec
//!
//! ## Overview
//!
//! Conversion between byte views and integers, in both directions:
//!
//! - parsing ([`Span::parse_u32`], [`Span::parse_u64`]) accepts exactly an
//!   unbroken run of ASCII digits: no sign, no whitespace, no separators.
//!   A non-digit reports `UnexpectedCharacter` with its offset; digits that
//!   describe a value wider than the target report `Overflow`.
//! - formatting ([`SpanMut::write_u32`], [`SpanMut::write_u64`],
//!   [`SpanMut::write_i32`], [`SpanMut::write_i64`]) emits minimal decimal
//!   text: no leading zeros, no `+`, a single `-` for negatives, `0` as
//!   `"0"`. Formatters follow the remainder convention of
//!   [`crate::span_mut`] and check the full size (digits plus sign) before
//!   writing anything.
//!
//! The 32- and 64-bit paths are kept separate so 32-bit targets without
//! hardware 64-bit division do not pay for it on the common path.
//!
//! There is deliberately no signed parser: the protocol fields these
//! parsers exist for (content lengths, status codes, packet identifiers)
//! are never negative, and accepting `-` here would let malformed input
//! slip through as a plausible value.
//!
//! ```rust
//! use bytespan_core::{Span, SpanMut};
//!
//! let mut buf = [0u8; 8];
//! SpanMut::new(&mut buf).write_u32(1024).unwrap();
//! assert_eq!(Span::new(&buf[..4]).parse_u32().unwrap(), 1024);
//! ```

use crate::errors::{SpanError, SpanResult};
use crate::span::Span;
use crate::span_mut::SpanMut;

fn decimal_digits_u32(value: u32) -> usize {
    let mut digits = 1;
    let mut rest = value;
    while rest >= 10 {
        digits += 1;
        rest /= 10;
    }
    digits
}

fn decimal_digits_u64(value: u64) -> usize {
    let mut digits = 1;
    let mut rest = value;
    while rest >= 10 {
        digits += 1;
        rest /= 10;
    }
    digits
}

impl Span<'_> {
    /// Parses the live bytes as a `u32`
    ///
    /// The whole span must be a digit run; empty input reports
    /// `UnexpectedCharacter` at offset 0.
    pub fn parse_u32(&self) -> SpanResult<u32> {
        let digits = self.as_bytes();
        if digits.is_empty() {
            return Err(SpanError::UnexpectedCharacter { offset: 0 });
        }
        let mut value: u32 = 0;
        for (offset, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(SpanError::UnexpectedCharacter { offset });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((byte - b'0') as u32))
                .ok_or(SpanError::Overflow)?;
        }
        Ok(value)
    }

    /// Parses the live bytes as a `u64`
    ///
    /// Same contract as [`Span::parse_u32`] with a 64-bit accumulator.
    pub fn parse_u64(&self) -> SpanResult<u64> {
        let digits = self.as_bytes();
        if digits.is_empty() {
            return Err(SpanError::UnexpectedCharacter { offset: 0 });
        }
        let mut value: u64 = 0;
        for (offset, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(SpanError::UnexpectedCharacter { offset });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((byte - b'0') as u64))
                .ok_or(SpanError::Overflow)?;
        }
        Ok(value)
    }
}

impl<'a> SpanMut<'a> {
    /// Writes `value` as decimal text, returning the remainder window
    pub fn write_u32(self, value: u32) -> SpanResult<SpanMut<'a>> {
        let digits = decimal_digits_u32(value);
        if digits > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed: digits,
                available: self.data.len(),
            });
        }
        let (head, rest) = self.data.split_at_mut(digits);
        let mut rem = value;
        for slot in head.iter_mut().rev() {
            *slot = b'0' + (rem % 10) as u8;
            rem /= 10;
        }
        Ok(SpanMut { data: rest })
    }

    /// Writes `value` as decimal text, returning the remainder window
    pub fn write_u64(self, value: u64) -> SpanResult<SpanMut<'a>> {
        let digits = decimal_digits_u64(value);
        if digits > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed: digits,
                available: self.data.len(),
            });
        }
        let (head, rest) = self.data.split_at_mut(digits);
        let mut rem = value;
        for slot in head.iter_mut().rev() {
            *slot = b'0' + (rem % 10) as u8;
            rem /= 10;
        }
        Ok(SpanMut { data: rest })
    }

    /// Writes `value` as decimal text with a leading `-` for negatives
    ///
    /// The full size including the sign is checked up front, so a failure
    /// writes nothing.
    pub fn write_i32(self, value: i32) -> SpanResult<SpanMut<'a>> {
        let magnitude = value.unsigned_abs();
        let mut needed = decimal_digits_u32(magnitude);
        if value < 0 {
            needed += 1;
        }
        if needed > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed,
                available: self.data.len(),
            });
        }
        let rest = if value < 0 { self.copy_u8(b'-')? } else { self };
        rest.write_u32(magnitude)
    }

    /// Writes `value` as decimal text with a leading `-` for negatives
    ///
    /// Same contract as [`SpanMut::write_i32`] for the 64-bit range.
    pub fn write_i64(self, value: i64) -> SpanResult<SpanMut<'a>> {
        let magnitude = value.unsigned_abs();
        let mut needed = decimal_digits_u64(magnitude);
        if value < 0 {
            needed += 1;
        }
        if needed > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed,
                available: self.data.len(),
            });
        }
        let rest = if value < 0 { self.copy_u8(b'-')? } else { self };
        rest.write_u64(magnitude)
    }
}
