//! Integration tests for in-place editing and incremental building
//!
//! Covers the mutating half of the crate:
//! - The replace shift matrix (shrink, grow, append, replace-all)
//! - No-partial-write guarantees on failure
//! - Copy chains and percent-encoded copies
//! - Builder append/replace/reset flows

#![cfg(test)]

use bytespan_core::{Span, SpanBuilder, SpanError, SpanMut};

/// Runs a replace over a 200-byte buffer seeded with `initial` and returns
/// the resulting live bytes
fn replace_case(
    initial: &[u8],
    start: usize,
    end: usize,
    replacement: &[u8],
) -> Result<Vec<u8>, SpanError> {
    let mut buf = [0u8; 200];
    buf[..initial.len()].copy_from_slice(initial);
    let mut window = SpanMut::new(&mut buf);
    let new_len = window.replace(initial.len(), start, end, Span::new(replacement))?;
    Ok(buf[..new_len].to_vec())
}

#[test]
fn test_replace_shrinking_range() {
    assert_eq!(replace_case(b"12345678", 1, 6, b"X").unwrap(), b"1X78");
}

#[test]
fn test_replace_pure_insert() {
    assert_eq!(replace_case(b"12345678", 2, 2, b"X").unwrap(), b"12X345678");
}

#[test]
fn test_replace_append_at_end() {
    assert_eq!(replace_case(b"12345678", 8, 8, b"90").unwrap(), b"1234567890");
}

#[test]
fn test_replace_everything_with_larger() {
    assert_eq!(
        replace_case(b"12345678", 0, 8, b"X12345678X").unwrap(),
        b"X12345678X"
    );
}

#[test]
fn test_replace_at_start_shifts_whole_tail() {
    assert_eq!(replace_case(b"12345678", 0, 0, b">>").unwrap(), b">>12345678");
}

#[test]
fn test_replace_identical_length() {
    assert_eq!(replace_case(b"12345678", 3, 5, b"ab").unwrap(), b"123ab678");
}

#[test]
fn test_replace_with_empty_removes_range() {
    assert_eq!(replace_case(b"12345678", 2, 6, b"").unwrap(), b"1278");
    assert_eq!(replace_case(b"12345678", 0, 8, b"").unwrap(), b"");
}

#[test]
fn test_replace_empty_buffer_cases() {
    assert_eq!(replace_case(b"", 0, 0, b"x").unwrap(), b"x");
    assert_eq!(replace_case(b"", 0, 0, b"").unwrap(), b"");
    assert_eq!(
        replace_case(b"", 0, 1, b"x"),
        Err(SpanError::InvalidRange { start: 0, end: 1, len: 0 })
    );
    assert_eq!(
        replace_case(b"", 1, 1, b"x"),
        Err(SpanError::InvalidRange { start: 1, end: 1, len: 0 })
    );
}

#[test]
fn test_replace_out_of_bounds_ranges() {
    assert_eq!(
        replace_case(b"12345678", 5, 4, b"x"),
        Err(SpanError::InvalidRange { start: 5, end: 4, len: 8 })
    );
    assert_eq!(
        replace_case(b"12345678", 0, 9, b"x"),
        Err(SpanError::InvalidRange { start: 0, end: 9, len: 8 })
    );
}

#[test]
fn test_replace_capacity_failure_leaves_content() {
    let mut buf = *b"1234";
    let mut window = SpanMut::new(&mut buf);
    let err = window.replace(4, 0, 4, Span::from("4321X")).unwrap_err();
    assert_eq!(err, SpanError::InsufficientCapacity { needed: 5, available: 4 });
    assert_eq!(&buf, b"1234");
}

#[test]
fn test_replace_used_len_beyond_capacity() {
    let mut buf = [0u8; 4];
    let mut window = SpanMut::new(&mut buf);
    assert_eq!(
        window.replace(5, 0, 1, Span::from("x")),
        Err(SpanError::InvalidRange { start: 0, end: 5, len: 4 })
    );
}

#[test]
fn test_copy_chain_builds_request_line() {
    let mut buf = [0u8; 64];
    let rest = SpanMut::new(&mut buf)
        .copy(Span::from("GET "))
        .unwrap()
        .copy(Span::from("/devices/42/twin"))
        .unwrap()
        .copy(Span::from(" HTTP/1.1"))
        .unwrap();
    let written = 64 - rest.capacity();
    assert_eq!(&buf[..written], b"GET /devices/42/twin HTTP/1.1");
}

#[test]
fn test_copy_failure_reports_sizes() {
    let mut buf = [0u8; 8];
    let window = SpanMut::new(&mut buf);
    let err = window.copy(Span::from("123456789")).unwrap_err();
    assert_eq!(err, SpanError::InsufficientCapacity { needed: 9, available: 8 });
}

#[test]
fn test_copy_url_encoded_for_sas_signature() {
    // Base64 output is the classic encode consumer: +, / and = must escape
    let mut buf = [0u8; 64];
    let rest = SpanMut::new(&mut buf)
        .copy_url_encoded(Span::from("ab+/cd="))
        .unwrap();
    let written = 64 - rest.capacity();
    assert_eq!(&buf[..written], b"ab%2B%2Fcd%3D");
}

#[test]
fn test_copy_url_encoded_exact_fit() {
    // " " -> 3 bytes, "a" -> 1 byte
    let mut buf = [0u8; 4];
    let rest = SpanMut::new(&mut buf).copy_url_encoded(Span::from(" a")).unwrap();
    assert!(rest.is_empty());
    assert_eq!(&buf, b"%20a");

    let mut small = [0u8; 3];
    assert_eq!(
        SpanMut::new(&mut small).copy_url_encoded(Span::from(" a")),
        Err(SpanError::InsufficientCapacity { needed: 4, available: 3 })
    );
}

#[test]
fn test_copy_url_encoded_high_bytes() {
    let mut buf = [0u8; 8];
    let raw = [0x00u8, 0xFF];
    let rest = SpanMut::new(&mut buf)
        .copy_url_encoded(Span::new(&raw))
        .unwrap();
    let written = 8 - rest.capacity();
    assert_eq!(&buf[..written], b"%00%FF");
}

#[test]
fn test_fill_then_overwrite() {
    let mut buf = [0u8; 8];
    let mut window = SpanMut::new(&mut buf);
    window.fill(b'.');
    let rest = window.copy(Span::from("ok")).unwrap();
    assert_eq!(rest.capacity(), 6);
    assert_eq!(&buf, b"ok......");
}

#[test]
fn test_builder_append_replace_append() {
    let mut buf = [0u8; 32];
    let mut builder = SpanBuilder::new(&mut buf);

    builder.append(Span::from("MemoryLeak")).unwrap();
    builder.replace(0, 6, Span::from("Net")).unwrap();
    assert_eq!(builder.as_span(), "NetLeak");

    builder.append(Span::from("Detector")).unwrap();
    assert_eq!(builder.as_span(), "NetLeakDetector");
    assert_eq!(builder.len(), 15);
}

#[test]
fn test_builder_capacity_exhaustion() {
    let mut buf = [0u8; 10];
    let mut builder = SpanBuilder::new(&mut buf);
    builder.append(Span::from("0123456789")).unwrap();
    assert_eq!(builder.remaining(), 0);

    assert_eq!(
        builder.append_byte(b'!'),
        Err(SpanError::InsufficientCapacity { needed: 1, available: 0 })
    );
    assert_eq!(
        builder.replace(0, 2, Span::from("abc")),
        Err(SpanError::InsufficientCapacity { needed: 11, available: 10 })
    );
    assert_eq!(builder.as_span(), "0123456789");
}

#[test]
fn test_builder_reset_clears_storage() {
    let mut buf = [0u8; 16];
    let mut builder = SpanBuilder::new(&mut buf);
    builder.append(Span::from("sas-token")).unwrap();
    builder.reset();
    assert_eq!(builder.len(), 0);
    builder.append_u32(7).unwrap();
    assert_eq!(builder.as_span(), "7");
    drop(builder);
    // Everything past the new content is zero, not stale token bytes
    assert_eq!(&buf[1..], &[0u8; 15]);
}

#[test]
fn test_builder_mixed_numeric_appends() {
    let mut buf = [0u8; 48];
    let mut builder = SpanBuilder::new(&mut buf);
    builder.append(Span::from("se=")).unwrap();
    builder.append_u64(1_735_689_600).unwrap();
    builder.append(Span::from("&skn=")).unwrap();
    builder.append_i32(-1).unwrap();
    assert_eq!(builder.as_span(), "se=1735689600&skn=-1");
}

#[test]
fn test_windows_compose_with_views() {
    // Parse a frame header, then build a response into the same stack frame
    let request = Span::from("PUT /telemetry?id=99");
    let (verb, rest) = request.split_once(" ").unwrap();
    assert_eq!(verb, "PUT");
    let id = rest.split_once("id=").unwrap().1;

    let mut out = [0u8; 32];
    let remainder = SpanMut::new(&mut out)
        .copy(Span::from("ack:"))
        .unwrap()
        .copy(id)
        .unwrap();
    let written = 32 - remainder.capacity();
    assert_eq!(&out[..written], b"ack:99");
}
