//! Core buffer layer for Bytespan
//!
//! Bounds-checked, non-owning views over caller-supplied byte buffers,
//! plus the low-level algorithms protocol layers build on: slicing,
//! searching, trimming, in-place range replacement, and decimal integer
//! conversion. Designed for client SDKs on edge devices.
//!
//! Key constraints:
//! - No heap allocation anywhere; every operation borrows caller memory
//! - No `unsafe`; aliasing and lifetime rules are enforced by the compiler
//! - Lengths capped at `i32::MAX` to stay exchangeable with 32-bit
//!   protocol fields
//!
//! ```rust
//! use bytespan_core::{Span, SpanBuilder};
//!
//! // Parse a header field without copying
//! let line = Span::from("Content-Length: 42\r\n");
//! let value = line.trim_whitespace().split_once(": ").map(|(_, v)| v);
//! assert_eq!(value.unwrap().parse_u32().unwrap(), 42);
//!
//! // Build a topic string into a stack buffer
//! let mut storage = [0u8; 32];
//! let mut topic = SpanBuilder::new(&mut storage);
//! topic.append(Span::from("devices/")).unwrap();
//! topic.append_u32(42).unwrap();
//! assert_eq!(topic.as_span(), "devices/42");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod content;
pub mod errors;
pub mod num;
pub mod span;
pub mod span_mut;

// Public API
pub use builder::SpanBuilder;
pub use errors::{SpanError, SpanResult};
pub use span::Span;
pub use span_mut::SpanMut;

/// Crate version, from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
