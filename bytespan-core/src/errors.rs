//! Error Types for Buffer-Safety Violations
//!
//! ## Design Philosophy
//!
//! Bytespan's error system follows the constraints of the embedded targets
//! the crate is built for:
//!
//! 1. **Small Size**: Every variant carries at most three machine words, so
//!    errors stay cheap to return from hot parsing and formatting paths.
//!
//! 2. **No Heap Allocation**: All context is inline integers. No `String`,
//!    no boxing, fully usable under `no_std`.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned,
//!    stored, and re-matched without move gymnastics.
//!
//! 4. **Actionable Information**: Each variant tells the caller what bound
//!    was broken and by how much, without further queries.
//!
//! ## Error Categories
//!
//! ### Bounds Violations
//! - `InvalidRange`: a slice or replace range escapes the live bytes
//! - `InsufficientCapacity`: a write does not fit the destination window
//!
//! ### Text/Numeric Violations
//! - `UnexpectedCharacter`: numeric parsing hit a non-digit (or empty input)
//! - `Overflow`: the digits describe a value wider than the target integer
//!
//! ### Contract Violations
//! - `PreconditionViolation`: a structurally invalid span reached an API
//!   that requires validity
//!
//! ## Error Handling Strategy
//!
//! The two numeric kinds deserve different reactions: a bad digit means the
//! input is malformed, while an overflow means the input is well formed but
//! needs a wider type.
//!
//! ```rust
//! use bytespan_core::{Span, SpanError};
//!
//! fn handle_content_length(field: Span<'_>) {
//!     match field.parse_u64() {
//!         Ok(_len) => {
//!             // Header is well formed - proceed with the body read
//!         }
//!         Err(SpanError::UnexpectedCharacter { .. }) => {
//!             // Malformed header - reject the message
//!         }
//!         Err(SpanError::Overflow) => {
//!             // Too large for u64 - treat as a protocol violation
//!         }
//!         Err(_) => {
//!             // Remaining kinds indicate a bug in the caller
//!         }
//!     }
//! }
//! ```
//!
//! ## Memory Layout
//!
//! The largest variant determines the enum size:
//! ```text
//! SpanError size on a 64-bit host = 32 bytes
//! ├── Discriminant: 8 bytes (word-aligned)
//! └── Largest variant (InvalidRange): 24 bytes
//!
//! On 32-bit embedded targets the same layout is 16 bytes.
//! ```

use thiserror_no_std::Error;

/// Result type for span operations
pub type SpanResult<T> = Result<T, SpanError>;

/// Span operation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// Slice or replace bounds escape the live region
    #[error("Range {start}..{end} out of bounds for length {len}")]
    InvalidRange {
        /// Inclusive start offset the caller asked for
        start: usize,
        /// Exclusive end offset the caller asked for
        end: usize,
        /// Live length the range was checked against
        len: usize,
    },

    /// Destination window cannot hold the bytes being written
    #[error("Insufficient capacity: need {needed} bytes, have {available}")]
    InsufficientCapacity {
        /// Bytes the operation had to write
        needed: usize,
        /// Bytes actually available in the destination
        available: usize,
    },

    /// Numeric parsing hit a byte outside `0`-`9` (or empty input)
    #[error("Unexpected character at offset {offset}")]
    UnexpectedCharacter {
        /// Offset of the offending byte within the parsed span
        offset: usize,
    },

    /// Parsed digits exceed the target integer width
    #[error("Parsed value overflows the target integer type")]
    Overflow,

    /// A structurally invalid span reached an API that requires validity
    #[error("Span precondition violated")]
    PreconditionViolation,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SpanError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidRange { start, end, len } =>
                defmt::write!(fmt, "Range {}..{} out of bounds for length {}", start, end, len),
            Self::InsufficientCapacity { needed, available } =>
                defmt::write!(fmt, "Need {} bytes, have {}", needed, available),
            Self::UnexpectedCharacter { offset } =>
                defmt::write!(fmt, "Unexpected character at {}", offset),
            Self::Overflow =>
                defmt::write!(fmt, "Integer overflow"),
            Self::PreconditionViolation =>
                defmt::write!(fmt, "Precondition violated"),
        }
    }
}
