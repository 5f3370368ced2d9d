// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: engine configuration, result pages, and corpus statistics.

use serde::{Deserialize, Serialize};

/// Matches returned per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Bytes of context on each side of a match.
pub const DEFAULT_PREVIEW_RADIUS: usize = 250;

/// Upper bound on compiled regex size (bytes of compiled program).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Engine configuration, fixed for the lifetime of a [`crate::Searcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Matches per page. Zero is treated as one.
    pub page_size: usize,
    /// Context radius in bytes around each match start.
    pub preview_radius: usize,
    /// Rewrite `\r\n` and lone `\r` to `\n` once at load time.
    ///
    /// Off by default: matching runs on the raw corpus bytes.
    pub normalize_line_endings: bool,
    /// Compiled regex size limit; larger patterns are rejected as invalid.
    pub regex_size_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            preview_radius: DEFAULT_PREVIEW_RADIUS,
            normalize_line_endings: false,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Page size with the zero case folded to one.
    pub(crate) fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// One page of search results.
///
/// `results[i]` is the preview window around the match starting at
/// `positions[i]`. Pages are built per call and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Preview windows, in corpus order.
    pub results: Vec<String>,
    /// Byte offset of each match in this page.
    pub positions: Vec<usize>,
    /// Whether matches exist past the end of this page.
    pub has_more: bool,
    /// Total matches for the query across the whole corpus.
    pub total: usize,
    /// Clamped index of the first match in this page.
    pub offset: usize,
}

impl SearchPage {
    pub(crate) fn empty(total: usize, offset: usize) -> Self {
        Self {
            results: Vec::new(),
            positions: Vec::new(),
            has_more: false,
            total,
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Offset to request for the following page, if there is one.
    pub fn next_offset(&self) -> Option<usize> {
        self.has_more.then(|| self.offset + self.results.len())
    }
}

/// Diagnostics describing a loaded corpus and its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    /// Corpus length in bytes (after optional line-ending normalization).
    pub corpus_bytes: usize,
    /// Number of suffix array entries (equals `corpus_bytes`).
    pub suffix_entries: usize,
    /// Approximate heap footprint of the suffix array.
    pub index_bytes: usize,
    /// CRC32 of the corpus bytes the index was built from.
    pub fingerprint: u32,
    /// Whether ASCII case folding alone matches the regex engine's folding.
    pub ascii_fold_exact: bool,
    /// Lines in the corpus (count of `\n`, plus one for a trailing partial line).
    pub lines: usize,
    /// `\r\n` pairs in the corpus.
    pub crlf_pairs: usize,
}
