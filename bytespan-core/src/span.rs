//! Non-Owning Byte Views over Caller-Supplied Buffers
//!
//! ## Overview
//!
//! This module provides [`Span`], the read-only view type every other part of
//! the crate is built on: a borrowed window into a byte buffer described by a
//! pointer, a live length, and a total capacity. Protocol parsers slice and
//! compare spans; message builders write through the mutable counterpart in
//! [`crate::span_mut`] and track the live prefix as it grows.
//!
//! ## Design Rationale
//!
//! ### Why Pointer + Length + Capacity?
//!
//! A plain slice conflates "bytes that exist" with "bytes that mean
//! something". Incremental building needs both at once:
//! - `length` is the prefix that currently holds meaningful content
//! - `capacity` is how far that prefix may still grow in place
//!
//! Keeping the pair in one value lets a parser hand out sub-views and a
//! builder keep appending into the same allocation, with every operation
//! bounds-checked against the right limit.
//!
//! ### Why Two-Phase Validity?
//!
//! Construction never validates; a separate [`Span::is_valid`] predicate is
//! consumed by guards at the API boundaries that need it. Hot paths that
//! mint thousands of sub-views per message would otherwise pay for checks
//! they can prove unnecessary. Unlike a raw-pointer implementation, a span
//! built through [`Span::with_len_unchecked`] can still never touch memory
//! out of bounds - read accessors clamp to the real capacity and fallible
//! operations reject it with
//! [`SpanError::PreconditionViolation`](crate::SpanError::PreconditionViolation).
//!
//! ### Why a Lifetime Parameter?
//!
//! The classic failure mode of pointer-based views is outliving the buffer.
//! `Span<'a>` borrows its buffer, so the compiler rejects any use after the
//! backing storage is gone; no runtime ownership tracking is needed.
//!
//! ### Memory Layout
//!
//! ```text
//! Span over a 16-byte buffer holding 10 live bytes:
//!
//! ┌──────────────────────────────┬──────────────┐
//! │ h  t  t  p  :  /  /  e  x  m │    spare     │
//! └──────────────────────────────┴──────────────┘
//!  ↑ live bytes (len = 10)        ↑ capacity - len = 6
//!
//! Span itself = {data: &[u8; capacity], len: usize} = 3 machine words
//! ```
//!
//! Lengths and capacities are bounded by [`Span::MAX_LEN`] (the signed
//! 32-bit limit) so offsets stay exchangeable with protocol layers that
//! store them in 32-bit fields.
//!
//! ## Usage Example
//!
//! ```rust
//! use bytespan_core::Span;
//!
//! let packet = Span::from("GET /telemetry HTTP/1.1");
//!
//! // Derive sub-views without copying
//! let method = packet.slice(0, 3).unwrap();
//! assert_eq!(method, "GET");
//!
//! // Saturating algebra never fails
//! let tail = packet.drop(4);
//! assert_eq!(tail.take(10), "/telemetry");
//! ```

use core::fmt;

use crate::errors::{SpanError, SpanResult};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Read-only view over a caller-owned byte buffer
///
/// A `Span` never owns memory: it borrows a capacity region from the caller
/// and remembers how much of it is live. Copying a `Span` copies the window,
/// not the bytes.
///
/// ## Internal Invariants
///
/// For a valid span (everything except values minted through
/// [`Span::with_len_unchecked`]):
/// - `len <= data.len()` (live prefix within capacity)
/// - `data.len() <= MAX_LEN` (capacity within the signed 32-bit limit)
/// - the region does not wrap the end of the address space
///
/// ## Thread Safety
///
/// `Span` is `Copy` over a shared borrow, so it is freely shareable across
/// threads for the borrow's duration; all mutation lives on the exclusive
/// types instead.
#[derive(Clone, Copy)]
pub struct Span<'a> {
    /// Full capacity region borrowed from the caller
    pub(crate) data: &'a [u8],

    /// Length of the live prefix
    /// At most `data.len()` for every span built through a checked path
    pub(crate) len: usize,
}

impl<'a> Span<'a> {
    /// Largest length or capacity a span may describe
    ///
    /// Offsets cross into protocol layers that keep them in signed 32-bit
    /// fields, so the limit is `i32::MAX` rather than the platform word.
    pub const MAX_LEN: usize = i32::MAX as usize;

    /// The canonical empty span: no buffer, zero length, zero capacity
    ///
    /// `const`, so it can seed statics and default fields:
    /// ```rust
    /// use bytespan_core::Span;
    /// static NOTHING: Span<'static> = Span::empty();
    /// assert!(NOTHING.is_empty());
    /// ```
    pub const fn empty() -> Self {
        Self { data: &[], len: 0 }
    }

    /// Creates a span over a whole slice, fully live
    ///
    /// Length and capacity both equal `data.len()`. This is the common
    /// constructor for parsing existing content.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, len: data.len() }
    }

    /// Creates a span with a caller-asserted live length, without validation
    ///
    /// The contract (`len <= data.len()`, capacity within
    /// [`Span::MAX_LEN`]) is not checked here; [`Span::is_valid`] checks it,
    /// and fallible operations reject spans that fail it. Reads through an
    /// over-declared span clamp to the real capacity, so no access can go
    /// out of bounds.
    pub const fn with_len_unchecked(data: &'a [u8], len: usize) -> Self {
        Self { data, len }
    }

    /// Creates a span with a validated live length
    ///
    /// Fails with `InvalidRange` when `len` exceeds the buffer, or
    /// `PreconditionViolation` when the buffer itself is larger than
    /// [`Span::MAX_LEN`].
    pub fn with_len(data: &'a [u8], len: usize) -> SpanResult<Self> {
        if data.len() > Self::MAX_LEN {
            return Err(SpanError::PreconditionViolation);
        }
        if len > data.len() {
            return Err(SpanError::InvalidRange { start: 0, end: len, len: data.len() });
        }
        Ok(Self { data, len })
    }

    /// Declared live length
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Total usable bytes from the start of the view
    pub const fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Check if no bytes are live
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live bytes as a slice, borrowing for the span's full lifetime
    ///
    /// For spans from the unchecked constructor whose declared length
    /// exceeds capacity, the result is clamped to the capacity.
    pub fn as_bytes(&self) -> &'a [u8] {
        let live = self.len.min(self.data.len());
        &self.data[..live]
    }

    /// Bounds-checked single-byte access into the live region
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Checks the structural and content invariants of this span
    ///
    /// Structural validity requires the live prefix to fit the capacity,
    /// the capacity to fit the [`Span::MAX_LEN`] limit, and the region not
    /// to wrap the end of the address space (the headroom comparison is
    /// subtraction-first, so the check itself cannot wrap).
    ///
    /// On top of that:
    /// - a zero-capacity span is valid only when `allow_empty` is set
    /// - `expected_len`, when given, pins the exact live length
    pub fn is_valid(&self, expected_len: Option<usize>, allow_empty: bool) -> bool {
        let cap = self.data.len();
        let base = self.data.as_ptr() as usize;
        if self.len > cap || cap > Self::MAX_LEN || cap > usize::MAX - base {
            return false;
        }
        if cap == 0 {
            return allow_empty;
        }
        match expected_len {
            Some(n) => self.len == n,
            None => true,
        }
    }

    /// Whether two spans' live byte ranges share at least one address
    ///
    /// Equal base pointers always overlap, even for zero-length spans; a
    /// zero-length span overlaps a range only when its base address falls
    /// strictly inside that range's live bytes. Adjacency is not overlap.
    pub fn overlaps(&self, other: &Span<'_>) -> bool {
        let a = self.data.as_ptr() as usize;
        let b = other.data.as_ptr() as usize;
        if a == b {
            return true;
        }
        if a < b {
            b - a < self.len
        } else {
            a - b < other.len
        }
    }

    /// Returns the sub-view `[low, high)` of the live bytes
    ///
    /// No bytes are copied. The result keeps the parent's remaining
    /// capacity past `low`, so a slice can keep growing into the same
    /// allocation:
    ///
    /// ```rust
    /// use bytespan_core::Span;
    ///
    /// let buf = [0u8; 32];
    /// let span = Span::with_len_unchecked(&buf, 8);
    /// let tail = span.slice(6, 8).unwrap();
    /// assert_eq!(tail.len(), 2);
    /// assert_eq!(tail.capacity(), 26); // 32 - 6
    /// ```
    ///
    /// Fails with `InvalidRange` when `low > high` or `high` passes the
    /// live length, and with `PreconditionViolation` on a structurally
    /// invalid span.
    pub fn slice(&self, low: usize, high: usize) -> SpanResult<Span<'a>> {
        self.check()?;
        if low > high || high > self.len {
            return Err(SpanError::InvalidRange { start: low, end: high, len: self.len });
        }
        Ok(Span { data: &self.data[low..], len: high - low })
    }

    /// Shorthand for slicing from `low` to the end of the live bytes
    pub fn slice_to_end(&self, low: usize) -> SpanResult<Span<'a>> {
        self.slice(low, self.len)
    }

    /// The first `n` bytes of capacity, saturating
    ///
    /// Asking for more than the capacity returns the whole view. The live
    /// length shrinks to `min(len, n)`.
    pub fn take(&self, n: usize) -> Span<'a> {
        let n = n.min(self.data.len());
        Span { data: &self.data[..n], len: self.len.min(n) }
    }

    /// Everything after the first `n` bytes of capacity, saturating
    ///
    /// Dropping the whole capacity (or more) returns an empty view; the
    /// live length shrinks by `n` without underflow.
    pub fn drop(&self, n: usize) -> Span<'a> {
        let n = n.min(self.data.len());
        Span { data: &self.data[n..], len: self.len.saturating_sub(n) }
    }

    /// Guard used by operations that require a structurally valid source
    pub(crate) fn check(&self) -> SpanResult<()> {
        if self.is_valid(None, true) {
            Ok(())
        } else {
            log_warn!(
                "rejecting invalid span: len {} exceeds capacity {}",
                self.len,
                self.data.len()
            );
            Err(SpanError::PreconditionViolation)
        }
    }
}

impl Default for Span<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Span<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl fmt::Debug for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Span<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de: 'a, 'a> serde::Deserialize<'de> for Span<'a> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: &'de [u8] = serde::Deserialize::deserialize(deserializer)?;
        Ok(Span::new(bytes))
    }
}
