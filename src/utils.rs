// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-level helpers shared by the index and the engine.

/// UTF-8 encoding of U+212A KELVIN SIGN, which case-folds to `k`.
const KELVIN_SIGN: &[u8] = "\u{212A}".as_bytes();

/// UTF-8 encoding of U+017F LATIN SMALL LETTER LONG S, which case-folds to `s`.
const LONG_S: &[u8] = "\u{17F}".as_bytes();

/// Preview window `[start, end)` for a match at `pos`, clamped to `[0, len)`.
///
/// `pos` itself may be anywhere up to `len`; the result is always in bounds.
#[inline]
pub fn window_bounds(pos: usize, radius: usize, len: usize) -> (usize, usize) {
    let start = pos.saturating_sub(radius).min(len);
    let end = pos.saturating_add(radius).min(len);
    (start, end)
}

/// Clamp a caller-supplied match index into `[0, total]`.
#[inline]
pub fn clamp_offset(offset: i64, total: usize) -> usize {
    usize::try_from(offset).unwrap_or(0).min(total)
}

/// Rewrite `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' {
            if iter.peek() == Some(&b'\n') {
                iter.next();
            }
            out.push(b'\n');
        } else {
            out.push(b);
        }
    }
    out
}

/// ASCII-lowercase copy of `bytes`. Non-ASCII bytes are left untouched,
/// so offsets into the copy are offsets into the original.
pub fn fold_ascii(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(u8::to_ascii_lowercase).collect()
}

/// True when the corpus has a non-ASCII character whose simple case fold is
/// an ASCII letter. ASCII-only folding is inexact for `k` and `s` then.
pub fn has_ascii_fold_exceptions(bytes: &[u8]) -> bool {
    contains_subslice(bytes, KELVIN_SIGN) || contains_subslice(bytes, LONG_S)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Count of `\r\n` pairs.
pub fn count_crlf(bytes: &[u8]) -> usize {
    bytes.windows(2).filter(|w| *w == b"\r\n").count()
}

/// Number of lines, counting a trailing line without a newline.
pub fn count_lines(bytes: &[u8]) -> usize {
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    match bytes.last() {
        None => 0,
        Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}
