// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Two classes only. [`LoadError`] is fatal and happens once, before any query
//! is served. [`SearchError`] is per request and never changes engine state.
//! There is no corruption class: the index is immutable after load.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The corpus could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the corpus file failed.
    Io { path: PathBuf, source: io::Error },
    /// The corpus has no bytes. `path` is `None` for in-memory sources.
    EmptyCorpus { path: Option<PathBuf> },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read corpus {}: {}", path.display(), source)
            }
            LoadError::EmptyCorpus { path: Some(path) } => {
                write!(f, "corpus {} is empty", path.display())
            }
            LoadError::EmptyCorpus { path: None } => write!(f, "corpus is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::EmptyCorpus { .. } => None,
        }
    }
}

/// A query could not be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query does not compile as a pattern (syntax error or size limit).
    InvalidQuery { query: String, message: String },
}

impl SearchError {
    pub(crate) fn invalid_query(query: &str, err: &regex::Error) -> Self {
        SearchError::InvalidQuery {
            query: query.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidQuery { query, message } => {
                write!(f, "invalid query {:?}: {}", query, message)
            }
        }
    }
}

impl std::error::Error for SearchError {}
