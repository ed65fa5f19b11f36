//! Exclusive Write Windows and In-Place Editing
//!
//! ## Overview
//!
//! [`SpanMut`] is the mutable counterpart of [`Span`]: an exclusively
//! borrowed window of writable capacity. Every mutation in the crate flows
//! through it - plain copies, percent-encoded copies, decimal formatting
//! (in [`crate::num`]), and the shift-based [`SpanMut::replace`] that makes
//! a fixed buffer behave like a bounded growable one.
//!
//! ## The Remainder Convention
//!
//! Write operations consume the window and return a window over whatever
//! capacity is left, so writes chain without any cursor bookkeeping:
//!
//! ```text
//! Building "devices/42" into a 16-byte buffer:
//!
//! window:       [................]   capacity 16
//! .copy(..)     [devices/........]   returns remainder, capacity 8
//! .write_u32()  [devices/42......]   returns remainder, capacity 6
//! ```
//!
//! Consuming `self` is what makes the convention sound: after a write the
//! old window no longer exists, so stale aliases into the written region
//! cannot survive. The price is that a failed write discards the window
//! too - callers that want to retry hold on to the buffer (as
//! [`crate::builder::SpanBuilder`] does) or split off a scratch window with
//! [`SpanMut::reborrow`] first.
//!
//! ## Usage Example
//!
//! ```rust
//! use bytespan_core::{Span, SpanMut};
//!
//! # fn main() -> bytespan_core::SpanResult<()> {
//! let mut buf = [0u8; 32];
//! let window = SpanMut::new(&mut buf);
//! let rest = window
//!     .copy(Span::from("devices/"))?
//!     .write_u32(42)?;
//! let written = 32 - rest.capacity();
//! assert_eq!(&buf[..written], b"devices/42");
//! # Ok(())
//! # }
//! ```

use core::fmt;

use crate::errors::{SpanError, SpanResult};
use crate::span::Span;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// The RFC 3986 unreserved set; everything else is percent-encoded
const fn is_url_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Exclusive write window over a caller-owned byte buffer
///
/// The window is pure capacity: it does not track a live prefix of its own.
/// Incremental builds either chain remainders (see the module docs) or let
/// [`crate::builder::SpanBuilder`] track the written length.
#[derive(PartialEq)]
pub struct SpanMut<'a> {
    /// Writable capacity region borrowed from the caller
    pub(crate) data: &'a mut [u8],
}

impl<'a> SpanMut<'a> {
    /// Creates a write window over a whole buffer
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data }
    }

    /// Window size in bytes
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Window size in bytes; a pure window is all capacity, so this equals
    /// [`SpanMut::capacity`]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window has no capacity left
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The window's bytes, read-only
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// The window's bytes, writable
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// A read view of the whole window, fully live
    pub fn as_span(&self) -> Span<'_> {
        Span::new(self.data)
    }

    /// Consumes the window into a read view for its full lifetime
    pub fn into_span(self) -> Span<'a> {
        Span::new(self.data)
    }

    /// A shorter-lived window over the same bytes
    ///
    /// Lets a caller run a consuming write without giving up the original
    /// window:
    ///
    /// ```rust
    /// use bytespan_core::{Span, SpanMut};
    ///
    /// let mut buf = [0u8; 4];
    /// let mut window = SpanMut::new(&mut buf);
    /// // The attempt consumes only the reborrow
    /// assert!(window.reborrow().copy(Span::from("too large")).is_err());
    /// assert_eq!(window.capacity(), 4);
    /// ```
    pub fn reborrow(&mut self) -> SpanMut<'_> {
        SpanMut { data: self.data }
    }

    /// The first `n` bytes of the window, saturating
    pub fn take(self, n: usize) -> SpanMut<'a> {
        let n = n.min(self.data.len());
        SpanMut { data: &mut self.data[..n] }
    }

    /// Everything after the first `n` bytes of the window, saturating
    pub fn drop(self, n: usize) -> SpanMut<'a> {
        let n = n.min(self.data.len());
        SpanMut { data: &mut self.data[n..] }
    }

    /// Overwrites every byte of the window with `byte`
    pub fn fill(&mut self, byte: u8) {
        self.data.fill(byte);
    }

    /// Copies `source` to the start of the window, returning the remainder
    ///
    /// This is the append primitive: chain the returned remainder to keep
    /// writing. Fails with `InsufficientCapacity` when `source`'s live
    /// bytes do not fit, and with `PreconditionViolation` when `source` is
    /// structurally invalid. The exclusive borrow rules out any aliasing
    /// between `source` and the window.
    pub fn copy(self, source: Span<'_>) -> SpanResult<SpanMut<'a>> {
        source.check()?;
        let src = source.as_bytes();
        if src.len() > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed: src.len(),
                available: self.data.len(),
            });
        }
        let (head, rest) = self.data.split_at_mut(src.len());
        head.copy_from_slice(src);
        Ok(SpanMut { data: rest })
    }

    /// Copies one byte to the start of the window, returning the remainder
    ///
    /// A full window reports `InsufficientCapacity` rather than silently
    /// dropping the byte.
    pub fn copy_u8(self, byte: u8) -> SpanResult<SpanMut<'a>> {
        if self.data.is_empty() {
            return Err(SpanError::InsufficientCapacity { needed: 1, available: 0 });
        }
        self.data[0] = byte;
        Ok(SpanMut { data: &mut self.data[1..] })
    }

    /// Copies `source` percent-encoded, returning the remainder
    ///
    /// Bytes outside the RFC 3986 unreserved set (`A`-`Z`, `a`-`z`,
    /// `0`-`9`, `-`, `_`, `.`, `~`) are written as `%XX` with uppercase
    /// hex. The required size is computed first, so on
    /// `InsufficientCapacity` nothing has been written.
    ///
    /// ```rust
    /// use bytespan_core::{Span, SpanMut};
    ///
    /// let mut buf = [0u8; 32];
    /// let rest = SpanMut::new(&mut buf)
    ///     .copy_url_encoded(Span::from("a/b c"))
    ///     .unwrap();
    /// let written = 32 - rest.capacity();
    /// assert_eq!(&buf[..written], b"a%2Fb%20c");
    /// ```
    pub fn copy_url_encoded(self, source: Span<'_>) -> SpanResult<SpanMut<'a>> {
        source.check()?;
        let src = source.as_bytes();
        let needed = src.iter().fold(0usize, |acc, &byte| {
            acc.saturating_add(if is_url_unreserved(byte) { 1 } else { 3 })
        });
        if needed > self.data.len() {
            return Err(SpanError::InsufficientCapacity {
                needed,
                available: self.data.len(),
            });
        }
        let mut at = 0;
        for &byte in src {
            if is_url_unreserved(byte) {
                self.data[at] = byte;
                at += 1;
            } else {
                self.data[at] = b'%';
                self.data[at + 1] = UPPER_HEX[(byte >> 4) as usize];
                self.data[at + 2] = UPPER_HEX[(byte & 0x0F) as usize];
                at += 3;
            }
        }
        let (_, rest) = self.data.split_at_mut(at);
        Ok(SpanMut { data: rest })
    }

    /// Replaces `[start, end)` of the first `used_len` live bytes with
    /// `replacement`, shifting the tail in place
    ///
    /// The window acts as a bounded growable buffer: `used_len` says how
    /// many of its bytes currently hold content, and the live length after
    /// the edit is returned. The tail `[end, used_len)` is shifted left or
    /// right as the replacement is shorter or longer than the removed
    /// range; equal lengths are a pure overwrite, `start == end` a pure
    /// insert, and `start == end == used_len` a pure append.
    ///
    /// Fails with `InvalidRange` when `start > end`, `end > used_len`, or
    /// `used_len` exceeds the window; fails with `InsufficientCapacity`
    /// when the edited content would not fit. On any failure the window's
    /// bytes are untouched - the size check happens before the first move.
    ///
    /// ```rust
    /// use bytespan_core::{Span, SpanMut};
    ///
    /// let mut buf = [0u8; 16];
    /// buf[..8].copy_from_slice(b"12345678");
    /// let mut window = SpanMut::new(&mut buf);
    /// let len = window.replace(8, 1, 6, Span::from("X")).unwrap();
    /// assert_eq!(len, 4);
    /// assert_eq!(&buf[..4], b"1X78");
    /// ```
    pub fn replace(
        &mut self,
        used_len: usize,
        start: usize,
        end: usize,
        replacement: Span<'_>,
    ) -> SpanResult<usize> {
        replacement.check()?;
        let capacity = self.data.len();
        if used_len > capacity {
            return Err(SpanError::InvalidRange { start: 0, end: used_len, len: capacity });
        }
        if start > end || end > used_len {
            return Err(SpanError::InvalidRange { start, end, len: used_len });
        }
        let insert = replacement.as_bytes();
        let removed = end - start;
        let new_len = used_len - removed + insert.len();
        if new_len > capacity {
            return Err(SpanError::InsufficientCapacity { needed: new_len, available: capacity });
        }
        // Shift the tail before writing the replacement. copy_within is
        // overlap-safe in both directions, so one call covers the left and
        // right shifts.
        let tail_dest = start + insert.len();
        if tail_dest != end {
            self.data.copy_within(end..used_len, tail_dest);
        }
        self.data[start..tail_dest].copy_from_slice(insert);
        Ok(new_len)
    }
}

impl fmt::Debug for SpanMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanMut")
            .field("capacity", &self.data.len())
            .finish()
    }
}
