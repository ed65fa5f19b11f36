//! Incremental Construction over a Fixed Buffer
//!
//! ## Overview
//!
//! [`SpanBuilder`] wraps a caller buffer and tracks how many bytes have
//! been written so far, turning the remainder-chaining primitives of
//! [`crate::span_mut`] into a stateful build: append content, edit a range
//! that is already written, keep appending after the edit. Message
//! formatters (topic strings, request lines, header blocks) that assemble
//! output in several passes use this instead of threading remainder
//! windows through their call graph.
//!
//! Failed operations never advance the written length, so a builder can
//! probe for space by just trying the append.
//!
//! ## Usage Example
//!
//! ```rust
//! use bytespan_core::{Span, SpanBuilder};
//!
//! let mut buf = [0u8; 32];
//! let mut topic = SpanBuilder::new(&mut buf);
//! topic.append(Span::from("devices/")).unwrap();
//! topic.append_u32(42).unwrap();
//! topic.append(Span::from("/messages")).unwrap();
//! assert_eq!(topic.as_span(), "devices/42/messages");
//!
//! // Patch the device id in place; later content shifts to fit
//! topic.replace(8, 10, Span::from("1138")).unwrap();
//! assert_eq!(topic.as_span(), "devices/1138/messages");
//! ```

use core::fmt;

use crate::errors::SpanResult;
use crate::span::Span;
use crate::span_mut::SpanMut;

/// Incremental writer over a caller-owned buffer
///
/// Keeps the invariant `len <= buf.len()`: `len` bytes of content have
/// been written, the rest is spare capacity.
pub struct SpanBuilder<'a> {
    /// Backing storage for the whole construction
    buf: &'a mut [u8],

    /// Bytes written so far
    len: usize,
}

impl<'a> SpanBuilder<'a> {
    /// Creates an empty builder over `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total size of the backing buffer
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Spare bytes still available for appends
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Check if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written content as a slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The written content as a read view
    ///
    /// Length is the written count; capacity is the whole buffer, so the
    /// view follows the usual algebra (slices of it keep spare capacity).
    pub fn as_span(&self) -> Span<'_> {
        Span::with_len_unchecked(&self.buf[..], self.len)
    }

    /// Appends the live bytes of `source` after the written content
    ///
    /// Fails with `InsufficientCapacity` when the spare capacity cannot
    /// hold them; the written length only advances on success.
    pub fn append(&mut self, source: Span<'_>) -> SpanResult<()> {
        self.append_with(|window| window.copy(source))
    }

    /// Appends a single byte
    pub fn append_byte(&mut self, byte: u8) -> SpanResult<()> {
        self.append_with(|window| window.copy_u8(byte))
    }

    /// Appends `value` as decimal text
    pub fn append_u32(&mut self, value: u32) -> SpanResult<()> {
        self.append_with(|window| window.write_u32(value))
    }

    /// Appends `value` as decimal text
    pub fn append_u64(&mut self, value: u64) -> SpanResult<()> {
        self.append_with(|window| window.write_u64(value))
    }

    /// Appends `value` as decimal text with a leading `-` for negatives
    pub fn append_i32(&mut self, value: i32) -> SpanResult<()> {
        self.append_with(|window| window.write_i32(value))
    }

    /// Appends `value` as decimal text with a leading `-` for negatives
    pub fn append_i64(&mut self, value: i64) -> SpanResult<()> {
        self.append_with(|window| window.write_i64(value))
    }

    /// Replaces `[start, end)` of the written content with `replacement`
    ///
    /// Delegates to [`SpanMut::replace`] with the builder's own length as
    /// the live region; on success the length moves to the edited size and
    /// later appends continue after the shifted content.
    pub fn replace(&mut self, start: usize, end: usize, replacement: Span<'_>) -> SpanResult<()> {
        self.len = SpanMut::new(self.buf).replace(self.len, start, end, replacement)?;
        Ok(())
    }

    /// Zeroes the backing buffer and forgets the written content
    pub fn reset(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    /// Runs a remainder-convention write over the spare capacity and
    /// advances `len` by however much it consumed
    fn append_with<F>(&mut self, write: F) -> SpanResult<()>
    where
        F: for<'b> FnOnce(SpanMut<'b>) -> SpanResult<SpanMut<'b>>,
    {
        let spare = self.buf.len() - self.len;
        let rest = write(SpanMut::new(&mut self.buf[self.len..]))?;
        self.len += spare - rest.capacity();
        Ok(())
    }
}

impl fmt::Debug for SpanBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanBuilder")
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SpanError;

    #[test]
    fn appends_accumulate() {
        let mut buf = [0u8; 24];
        let mut builder = SpanBuilder::new(&mut buf);
        assert!(builder.is_empty());

        builder.append(Span::from("status=")).unwrap();
        builder.append_u32(200).unwrap();
        builder.append_byte(b';').unwrap();
        builder.append_i32(-40).unwrap();

        assert_eq!(builder.as_span(), "status=200;-40");
        assert_eq!(builder.len(), 14);
        assert_eq!(builder.remaining(), 10);
    }

    #[test]
    fn failed_append_keeps_length() {
        let mut buf = [0u8; 4];
        let mut builder = SpanBuilder::new(&mut buf);
        builder.append(Span::from("abc")).unwrap();

        assert_eq!(
            builder.append(Span::from("de")),
            Err(SpanError::InsufficientCapacity { needed: 2, available: 1 })
        );
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.as_bytes(), b"abc");
    }

    #[test]
    fn replace_then_append_continues_after_edit() {
        let mut buf = [0u8; 32];
        let mut builder = SpanBuilder::new(&mut buf);
        builder.append(Span::from("12345678")).unwrap();

        builder.replace(1, 6, Span::from("X")).unwrap();
        assert_eq!(builder.as_span(), "1X78");

        builder.append(Span::from("!")).unwrap();
        assert_eq!(builder.as_span(), "1X78!");
    }

    #[test]
    fn replace_on_empty_builder() {
        let mut buf = [0u8; 8];
        let mut builder = SpanBuilder::new(&mut buf);

        builder.replace(0, 0, Span::from("ab")).unwrap();
        assert_eq!(builder.as_span(), "ab");

        let mut other = [0u8; 8];
        let mut fresh = SpanBuilder::new(&mut other);
        assert_eq!(
            fresh.replace(1, 1, Span::from("x")),
            Err(SpanError::InvalidRange { start: 1, end: 1, len: 0 })
        );
    }

    #[test]
    fn reset_zeroes_storage() {
        let mut buf = [0u8; 8];
        let mut builder = SpanBuilder::new(&mut buf);
        builder.append(Span::from("secret")).unwrap();
        builder.reset();
        assert!(builder.is_empty());
        assert_eq!(builder.as_bytes(), b"");
        drop(builder);
        assert_eq!(buf, [0u8; 8]);
    }

    #[test]
    fn numeric_appends_render_minimal_text() {
        let mut buf = [0u8; 48];
        let mut builder = SpanBuilder::new(&mut buf);
        builder.append_u64(u64::MAX).unwrap();
        builder.append_byte(b'/').unwrap();
        builder.append_i64(i64::MIN).unwrap();
        assert_eq!(builder.as_span(), "18446744073709551615/-9223372036854775808");
    }
}
