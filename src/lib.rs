// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring search over one static corpus.
//!
//! The corpus is loaded once, indexed with a suffix array, and then served to
//! any number of concurrent readers. A query returns one page of fixed-radius
//! context windows around its matches, in corpus order, plus a flag saying
//! whether more pages exist.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  sais.rs    │────▶│  index.rs    │◀────│  search.rs    │
//! │  (SA-IS)    │     │ (CorpusIndex,│     │  (Searcher:   │
//! │             │     │  find_all)   │     │  page, window)│
//! └─────────────┘     └──────────────┘     └───────────────┘
//!                            ▲                     │
//!                            │             ┌───────┴───────┐
//!                     ┌──────┴───────┐     │  server.rs    │
//!                     │  query.rs    │     │  (axum, opt.) │
//!                     │ (regex + lit)│     └───────────────┘
//!                     └──────────────┘
//! ```
//!
//! Literal queries resolve by binary search over the ASCII-folded suffix array.
//! Anything else falls back to a regex scan of the raw bytes. Both paths return
//! the same leftmost, non-overlapping match offsets.
//!
//! # Usage
//!
//! ```
//! use shakesearch::{SearchConfig, Searcher};
//!
//! let searcher = Searcher::from_bytes(b"to be or not to be".to_vec(), SearchConfig::default())?;
//! let page = searcher.search("BE", 0)?;
//!
//! assert_eq!(page.positions, vec![3, 16]);
//! assert!(!page.has_more);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod contracts;
mod error;
mod index;
mod query;
mod sais;
mod search;
mod types;
mod utils;

#[cfg(feature = "server")]
pub mod server;

pub mod testing;

pub use error::{LoadError, SearchError};
pub use index::CorpusIndex;
pub use query::CompiledQuery;
pub use sais::sais;
pub use search::Searcher;
pub use types::{
    CorpusStats, SearchConfig, SearchPage, DEFAULT_PAGE_SIZE, DEFAULT_PREVIEW_RADIUS,
    DEFAULT_REGEX_SIZE_LIMIT,
};
pub use utils::{normalize_line_endings, window_bounds};
