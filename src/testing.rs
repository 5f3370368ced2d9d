// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation. The `oracle_*`
//! functions are deliberately naive reference implementations: if an oracle
//! and the engine disagree, the oracle is right.

#![doc(hidden)]

use crate::search::Searcher;
use crate::types::SearchConfig;

/// Searcher over `text` with the default configuration.
pub fn make_searcher(text: &str) -> Searcher {
    make_searcher_with(text, SearchConfig::default())
}

/// Searcher over `text` with an explicit configuration.
///
/// Panics on an empty `text`; tests never need an empty corpus searcher.
pub fn make_searcher_with(text: &str, config: SearchConfig) -> Searcher {
    Searcher::from_bytes(text.as_bytes().to_vec(), config).expect("non-empty test corpus")
}

/// Sorted suffix array by direct comparison of folded suffixes. O(n² log n).
pub fn oracle_suffix_array(text: &[u8]) -> Vec<usize> {
    let folded: Vec<u8> = text.iter().map(u8::to_ascii_lowercase).collect();
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| folded[a..].cmp(&folded[b..]));
    sa
}

/// Leftmost, non-overlapping, ASCII-case-insensitive occurrences of a literal
/// by sliding a window over every offset.
pub fn oracle_find_literal(text: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut out = Vec::new();
    if needle.is_empty() || needle.len() > text.len() {
        return out;
    }

    let mut pos = 0;
    while pos + needle.len() <= text.len() {
        if text[pos..pos + needle.len()].eq_ignore_ascii_case(needle) {
            out.push(pos);
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    out
}

/// Walk every page of `query` from offset 0 and collect `(positions, has_more)`
/// per page.
pub fn collect_pages(searcher: &Searcher, query: &str) -> Vec<(Vec<usize>, bool)> {
    let mut pages = Vec::new();
    let mut offset = 0i64;
    loop {
        let page = searcher.search(query, offset).expect("valid query");
        let has_more = page.has_more;
        let next = page.next_offset();
        pages.push((page.positions, has_more));
        match next {
            Some(next) => offset = next as i64,
            None => break,
        }
    }
    pages
}
