// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the engine.
//!
//! Debug-mode assertions for the invariants listed in `index.rs` and
//! `search.rs`. They compile to nothing in release builds and fail loudly in
//! tests and debug builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                   |
//! |------------------------------|---------------------------------------------|
//! | `check_suffix_array`         | complete permutation, folded order          |
//! | `check_matches_ascending`    | strictly ascending match offsets            |
//! | `check_window_in_bounds`     | preview window inside `[0, len)`            |
//! | `check_page_bounds`          | page slice inside the match list            |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    use crate::types::{DEFAULT_PAGE_SIZE, DEFAULT_PREVIEW_RADIUS};
    assert!(DEFAULT_PAGE_SIZE > 0);
    assert!(DEFAULT_PREVIEW_RADIUS > 0);
};

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that `suffix_array` is a permutation of `0..text.len()` sorted by
/// ASCII-folded suffix.
///
/// # Panics (debug builds only)
/// Panics on a missing, duplicated, or out-of-order entry.
#[inline]
pub fn check_suffix_array(text: &[u8], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        suffix_array.len(),
        text.len(),
        "Contract violation: SuffixArray.Complete - {} entries for {} bytes",
        suffix_array.len(),
        text.len()
    );

    let mut seen = vec![false; text.len()];
    for (i, &pos) in suffix_array.iter().enumerate() {
        debug_assert!(
            pos < text.len() && !seen[pos],
            "Contract violation: SuffixArray.Complete - entry {} ({}) out of range or repeated",
            i,
            pos
        );
        if pos < text.len() {
            seen[pos] = true;
        }
    }

    for i in 1..suffix_array.len() {
        let prev = text[suffix_array[i - 1]..].iter().map(u8::to_ascii_lowercase);
        let curr = text[suffix_array[i]..].iter().map(u8::to_ascii_lowercase);
        debug_assert!(
            prev.le(curr),
            "Contract violation: SuffixArray.Sorted - suffix_array[{}] > suffix_array[{}]",
            i - 1,
            i
        );
    }
}

// ============================================================================
// ENGINE CONTRACTS
// ============================================================================

/// Check that match offsets are strictly ascending.
#[inline]
pub fn check_matches_ascending(matches: &[usize]) {
    for i in 1..matches.len() {
        debug_assert!(
            matches[i - 1] < matches[i],
            "Contract violation: Matches.Ascending - matches[{}] = {} >= matches[{}] = {}",
            i - 1,
            matches[i - 1],
            i,
            matches[i]
        );
    }
}

/// Check that a preview window is a valid slice of a corpus of `len` bytes.
#[inline]
pub fn check_window_in_bounds(start: usize, end: usize, len: usize) {
    debug_assert!(
        start <= end && end <= len,
        "Contract violation: Preview.InBounds - window [{}, {}) outside corpus of {} bytes",
        start,
        end,
        len
    );
}

/// Check that a page `[start, end)` is a valid slice of `total` matches and
/// respects the page size.
#[inline]
pub fn check_page_bounds(start: usize, end: usize, total: usize, page_size: usize) {
    debug_assert!(
        start <= end && end <= total && end - start <= page_size,
        "Contract violation: Page.Bounds - page [{}, {}) of {} matches with page size {}",
        start,
        end,
        total,
        page_size
    );
}
