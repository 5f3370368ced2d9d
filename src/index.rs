// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index construction and lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SNAPSHOT**: the suffix array is built from, and stored with, exactly one
//!    corpus. Neither is mutated after [`CorpusIndex::build`] returns.
//! 2. **SUFFIX_ARRAY_SORTED**: suffixes are in lexicographic order of the
//!    ASCII-folded corpus.
//! 3. **SUFFIX_ARRAY_COMPLETE**: every byte offset appears exactly once.
//! 4. **MATCHES_ASCENDING**: [`CorpusIndex::find_all`] returns strictly
//!    ascending, non-overlapping offsets for both the literal and the scan path.
//!
//! # Case folding
//!
//! The suffix array is sorted over `fold_ascii(corpus)`, which has the same
//! length and offsets as the corpus. The folded copy only lives during
//! construction; lookups fold corpus bytes on the fly while comparing.

use std::cmp::Ordering;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::{check_matches_ascending, check_suffix_array};
use crate::query::CompiledQuery;
use crate::sais::sais;
use crate::types::CorpusStats;
use crate::utils::{count_crlf, count_lines, fold_ascii, has_ascii_fold_exceptions};

/// Below this many hits a sequential sort beats spinning up rayon.
#[cfg(feature = "parallel")]
const PARALLEL_SORT_THRESHOLD: usize = 1 << 16;

/// Suffix array over one immutable corpus.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    text: Vec<u8>,
    suffix_array: Vec<usize>,
    fingerprint: u32,
    ascii_fold_exact: bool,
}

impl CorpusIndex {
    /// Build the index. Deterministic in `text`.
    pub fn build(text: Vec<u8>) -> Self {
        let started = Instant::now();

        let suffix_array = sais(&fold_ascii(&text));
        let fingerprint = crc32fast::hash(&text);
        let ascii_fold_exact = !has_ascii_fold_exceptions(&text);

        check_suffix_array(&text, &suffix_array);

        tracing::info!(
            bytes = text.len(),
            fingerprint = %format!("{:08x}", fingerprint),
            ascii_fold_exact,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built suffix array"
        );

        Self {
            text,
            suffix_array,
            fingerprint,
            ascii_fold_exact,
        }
    }

    /// The corpus bytes this index was built from.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Suffix start offsets in folded lexicographic order.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// CRC32 of the corpus bytes.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Whether ASCII-only folding agrees with Unicode simple case folding
    /// for every literal on this corpus.
    pub fn ascii_fold_exact(&self) -> bool {
        self.ascii_fold_exact
    }

    /// Compare the first `needle.len()` folded bytes of the suffix at `pos`
    /// with `needle`. A suffix shorter than the needle compares by its prefix.
    fn compare_prefix(&self, pos: usize, needle: &[u8]) -> Ordering {
        self.text[pos..]
            .iter()
            .take(needle.len())
            .map(u8::to_ascii_lowercase)
            .cmp(needle.iter().copied())
    }

    /// Suffix array range whose folded suffixes start with `needle`.
    ///
    /// `needle` must already be ASCII-lowercase. Positions come back in suffix
    /// order, not corpus order.
    pub fn lookup(&self, needle: &[u8]) -> &[usize] {
        let sa = &self.suffix_array;
        let lo = sa.partition_point(|&pos| self.compare_prefix(pos, needle) == Ordering::Less);
        let hi = lo
            + sa[lo..].partition_point(|&pos| self.compare_prefix(pos, needle) == Ordering::Equal);
        &sa[lo..hi]
    }

    /// Number of (possibly overlapping) occurrences of a folded literal.
    pub fn count(&self, needle: &[u8]) -> usize {
        self.lookup(needle).len()
    }

    /// Whether a folded literal can be answered from the suffix array alone.
    fn literal_is_exact(&self, literal: &[u8]) -> bool {
        literal.is_ascii()
            && (self.ascii_fold_exact || !literal.iter().any(|&b| b == b'k' || b == b's'))
    }

    /// Every match start for `query`, ascending and non-overlapping.
    pub fn find_all(&self, query: &CompiledQuery) -> Vec<usize> {
        let matches = match query.literal() {
            Some(literal) if self.literal_is_exact(literal) => {
                tracing::debug!(query = query.as_str(), "literal suffix array lookup");
                self.find_literal(literal)
            }
            _ => {
                tracing::debug!(query = query.as_str(), "regex scan");
                query
                    .regex()
                    .find_iter(&self.text)
                    .map(|m| m.start())
                    .collect()
            }
        };

        check_matches_ascending(&matches);
        matches
    }

    /// Resolve a folded literal to leftmost-first, non-overlapping offsets.
    fn find_literal(&self, literal: &[u8]) -> Vec<usize> {
        let mut positions = self.lookup(literal).to_vec();

        #[cfg(feature = "parallel")]
        {
            if positions.len() >= PARALLEL_SORT_THRESHOLD {
                positions.par_sort_unstable();
            } else {
                positions.sort_unstable();
            }
        }
        #[cfg(not(feature = "parallel"))]
        positions.sort_unstable();

        // A left-to-right scan resumes after each match, so an occurrence
        // starting inside the previous one is never reported.
        let mut next_free = 0usize;
        positions.retain(|&pos| {
            if pos >= next_free {
                next_free = pos + literal.len();
                true
            } else {
                false
            }
        });
        positions
    }

    /// Diagnostics for this index.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            corpus_bytes: self.text.len(),
            suffix_entries: self.suffix_array.len(),
            index_bytes: self.suffix_array.len() * std::mem::size_of::<usize>(),
            fingerprint: self.fingerprint,
            ascii_fold_exact: self.ascii_fold_exact,
            lines: count_lines(&self.text),
            crlf_pairs: count_crlf(&self.text),
        }
    }
}
