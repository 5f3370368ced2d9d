// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: query compilation, pagination, and preview windows.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **STATELESS**: `search` is a pure function of corpus, query, and offset.
//!    No cursor survives between calls.
//! 2. **PAGE_BOUNDS**: `page_start = min(offset, total)`,
//!    `page_end = min(page_start + page_size, total)`,
//!    `has_more = page_end < total`.
//! 3. **WINDOW_BOUNDS**: every preview is
//!    `corpus[max(pos - radius, 0) .. min(pos + radius, len)]`.
//!
//! A [`Searcher`] holds no interior mutability, so `&Searcher` can be shared
//! across threads (typically as `Arc<Searcher>`) with no locking.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::contracts::{check_page_bounds, check_window_in_bounds};
use crate::error::{LoadError, SearchError};
use crate::index::CorpusIndex;
use crate::query::CompiledQuery;
use crate::types::{CorpusStats, SearchConfig, SearchPage};
use crate::utils::{clamp_offset, normalize_line_endings, window_bounds};

/// A loaded corpus, its index, and the engine configuration.
#[derive(Debug, Clone)]
pub struct Searcher {
    index: CorpusIndex,
    config: SearchConfig,
}

impl Searcher {
    /// Read the corpus at `path` and build the index.
    ///
    /// Runs once before any query traffic; failures are fatal to startup.
    pub fn load(path: impl AsRef<Path>, config: SearchConfig) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let started = Instant::now();

        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(LoadError::EmptyCorpus {
                path: Some(path.to_path_buf()),
            });
        }

        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "read corpus"
        );

        Self::from_bytes(bytes, config)
    }

    /// Build a searcher from corpus bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>, config: SearchConfig) -> Result<Self, LoadError> {
        if bytes.is_empty() {
            return Err(LoadError::EmptyCorpus { path: None });
        }

        let bytes = if config.normalize_line_endings {
            let normalized = normalize_line_endings(&bytes);
            tracing::info!(
                before = bytes.len(),
                after = normalized.len(),
                "normalized line endings"
            );
            normalized
        } else {
            bytes
        };

        Ok(Self {
            index: CorpusIndex::build(bytes),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn stats(&self) -> CorpusStats {
        self.index.stats()
    }

    /// Compile `query` with this searcher's limits.
    pub fn compile(&self, query: &str) -> Result<CompiledQuery, SearchError> {
        CompiledQuery::new(query, self.config.regex_size_limit)
    }

    /// Every match start for `query`, in corpus order.
    ///
    /// The empty query matches nothing.
    pub fn find_all(&self, query: &str) -> Result<Vec<usize>, SearchError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let compiled = self.compile(query)?;
        Ok(self.index.find_all(&compiled))
    }

    /// One page of previews for `query`, starting at match index `offset`.
    ///
    /// Negative offsets behave as zero; offsets past the last match yield an
    /// empty page with `has_more = false`.
    pub fn search(&self, query: &str, offset: i64) -> Result<SearchPage, SearchError> {
        let matches = self.find_all(query)?;
        Ok(self.paginate(&matches, offset))
    }

    /// Cut one page out of a full match list.
    pub fn paginate(&self, matches: &[usize], offset: i64) -> SearchPage {
        let total = matches.len();
        let page_size = self.config.effective_page_size();
        let page_start = clamp_offset(offset, total);
        let page_end = page_start.saturating_add(page_size).min(total);
        check_page_bounds(page_start, page_end, total, page_size);

        if page_start == page_end {
            return SearchPage::empty(total, page_start);
        }

        let positions = matches[page_start..page_end].to_vec();
        let results = positions.iter().map(|&pos| self.preview(pos)).collect();

        SearchPage {
            results,
            positions,
            has_more: page_end < total,
            total,
            offset: page_start,
        }
    }

    /// Byte range of the preview window for a match at `pos`.
    pub fn window(&self, pos: usize) -> (usize, usize) {
        let (start, end) = window_bounds(pos, self.config.preview_radius, self.index.len());
        check_window_in_bounds(start, end, self.index.len());
        (start, end)
    }

    /// Preview text around `pos`. Multi-byte characters split by the window
    /// edge decode as U+FFFD.
    pub fn preview(&self, pos: usize) -> String {
        let (start, end) = self.window(pos);
        String::from_utf8_lossy(&self.index.text()[start..end]).into_owned()
    }
}
