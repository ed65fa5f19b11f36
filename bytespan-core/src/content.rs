//! Content Inspection over Byte Views
//!
//! ## Overview
//!
//! Read-only operations on the live bytes of a [`Span`]:
//!
//! - equality is content equality: `==` compares live bytes, never pointers
//! - [`Span::eq_ignore_ascii_case`] folds only ASCII `A`-`Z` (protocol
//!   keywords, header names); non-ASCII bytes compare exactly
//! - [`Span::find`] locates a byte sequence with raw-bytes semantics, so
//!   embedded zero bytes are ordinary content
//! - the trim family strips exactly the four protocol whitespace bytes
//!   (space, tab, CR, LF) - Unicode whitespace is out of scope
//! - [`Span::split_once`] and [`Span::strip_prefix`] are the two helpers
//!   topic and header parsers lean on
//!
//! All of these observe the live prefix only; spare capacity is invisible
//! to content inspection.
//!
//! ## Usage Example
//!
//! ```rust
//! use bytespan_core::Span;
//!
//! let header = Span::from("  Content-Length: 42\r\n");
//! let line = header.trim_whitespace();
//! let (name, value) = line.split_once(": ").unwrap();
//! assert!(name.eq_ignore_ascii_case("content-length"));
//! assert_eq!(value.parse_u32().unwrap(), 42);
//! ```

use crate::span::Span;

/// The whitespace set recognized by the trim family
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

impl<'a> Span<'a> {
    /// Content equality with ASCII letters folded to one case
    ///
    /// Byte-for-byte comparison after mapping `A`-`Z` to `a`-`z` on both
    /// sides. Bytes above 127 never match anything but themselves; there is
    /// no locale handling of any kind.
    pub fn eq_ignore_ascii_case<'b>(&self, other: impl Into<Span<'b>>) -> bool {
        self.as_bytes().eq_ignore_ascii_case(other.into().as_bytes())
    }

    /// Byte offset of the leftmost occurrence of `target` in the live bytes
    ///
    /// Matching is raw-bytes: embedded zeros are ordinary content. The
    /// empty target matches at offset 0 of anything, including the empty
    /// span; a target longer than the source never matches.
    ///
    /// ```rust
    /// use bytespan_core::Span;
    ///
    /// let src = Span::from("abcdefgabcdefg");
    /// assert_eq!(src.find("abc"), Some(0));
    /// assert_eq!(src.find("gab"), Some(6));
    /// assert_eq!(src.find("xyz"), None);
    /// ```
    pub fn find<'b>(&self, target: impl Into<Span<'b>>) -> Option<usize> {
        let target = target.into();
        let src = self.as_bytes();
        let tgt = target.as_bytes();
        if tgt.is_empty() {
            return Some(0);
        }
        if tgt.len() > src.len() {
            return None;
        }
        src.windows(tgt.len()).position(|window| window == tgt)
    }

    /// Live bytes with leading and trailing whitespace removed
    ///
    /// Whitespace is exactly space, tab, CR, LF. Idempotent; the empty span
    /// trims to itself.
    pub fn trim_whitespace(&self) -> Span<'a> {
        self.trim_whitespace_from_start().trim_whitespace_from_end()
    }

    /// Live bytes with leading whitespace removed
    ///
    /// The view's base advances past the trimmed bytes, so the parent's
    /// spare capacity stays reachable behind the shorter live prefix.
    pub fn trim_whitespace_from_start(&self) -> Span<'a> {
        let live = self.as_bytes();
        let start = live
            .iter()
            .position(|byte| !is_whitespace(*byte))
            .unwrap_or(live.len());
        Span { data: &self.data[start..], len: live.len() - start }
    }

    /// Live bytes with trailing whitespace removed
    ///
    /// Only the live length shrinks; capacity is untouched, so appends
    /// after a trim keep writing into the same allocation.
    pub fn trim_whitespace_from_end(&self) -> Span<'a> {
        let live = self.as_bytes();
        let end = live
            .iter()
            .rposition(|byte| !is_whitespace(*byte))
            .map_or(0, |pos| pos + 1);
        Span { data: self.data, len: end }
    }

    /// Splits around the leftmost occurrence of `delimiter`
    ///
    /// Neither part contains the delimiter. Returns `None` when the
    /// delimiter is absent; the empty delimiter splits before the first
    /// byte. Both parts follow slice capacity rules (the tail keeps the
    /// parent's spare capacity).
    pub fn split_once<'b>(
        &self,
        delimiter: impl Into<Span<'b>>,
    ) -> Option<(Span<'a>, Span<'a>)> {
        let delimiter = delimiter.into();
        let at = self.find(delimiter)?;
        let live = self.as_bytes();
        let after_start = at + delimiter.as_bytes().len();
        let before = Span { data: self.data, len: at };
        let after = Span { data: &self.data[after_start..], len: live.len() - after_start };
        Some((before, after))
    }

    /// The live bytes past `prefix`, if the span starts with it
    ///
    /// Comparison is exact content equality. Returns `None` on a mismatch,
    /// including when the span is shorter than the prefix.
    pub fn strip_prefix<'b>(&self, prefix: impl Into<Span<'b>>) -> Option<Span<'a>> {
        let prefix = prefix.into();
        let live = self.as_bytes();
        let pre = prefix.as_bytes();
        if !live.starts_with(pre) {
            return None;
        }
        Some(Span { data: &self.data[pre.len()..], len: live.len() - pre.len() })
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Span<'_> {}

impl PartialEq<[u8]> for Span<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Span<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for Span<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Span<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == &other[..]
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Span<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == &other[..]
    }
}
