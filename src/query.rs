// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query compilation.
//!
//! Every query is compiled as a case-insensitive regex over corpus bytes. The
//! case-insensitive flag is set on the builder, the equivalent of a `(?i)`
//! prefix; neither the query nor the corpus is lowercased for matching.
//!
//! Alongside the regex, compilation asks `regex-syntax` whether the query is a
//! plain literal. Literals with only ASCII bytes can be answered by binary
//! search over the ASCII-folded suffix array instead of a full scan:
//!
//! ```text
//! "Hamlet"        → Literal("hamlet")    suffix array range, O(m log n)
//! "need\. O"      → Literal("need. o")   escapes still count as literal
//! "ham(let)?"     → Scan                 regex find_iter, O(n)
//! "café"          → Scan                 non-ASCII folding is Unicode-aware
//! "(?-i)Hamlet"   → Scan                 inline flags change semantics
//! ```

use regex::bytes::{Regex, RegexBuilder};
use regex_syntax::hir::{Hir, HirKind};

use crate::error::SearchError;

/// A validated, case-insensitive query.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pattern: String,
    regex: Regex,
    literal: Option<Vec<u8>>,
}

impl CompiledQuery {
    /// Compile `query`, rejecting bad syntax and patterns over `size_limit`.
    pub fn new(query: &str, size_limit: usize) -> Result<Self, SearchError> {
        let regex = RegexBuilder::new(query)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|err| SearchError::invalid_query(query, &err))?;

        Ok(Self {
            pattern: query.to_string(),
            regex,
            literal: ascii_literal(query),
        })
    }

    /// The query as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The compiled case-insensitive regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// ASCII-lowercased literal bytes when the query is a plain ASCII literal.
    pub fn literal(&self) -> Option<&[u8]> {
        self.literal.as_deref()
    }
}

/// Extract the folded literal a query matches, if it is nothing but a literal.
fn ascii_literal(query: &str) -> Option<Vec<u8>> {
    // Inline flag groups can switch case sensitivity back on
    if query.contains("(?") {
        return None;
    }

    let hir = regex_syntax::Parser::new().parse(query).ok()?;
    let mut bytes = Vec::new();
    if !collect_literal(&hir, &mut bytes) || bytes.is_empty() || !bytes.is_ascii() {
        return None;
    }

    bytes.make_ascii_lowercase();
    Some(bytes)
}

fn collect_literal(hir: &Hir, out: &mut Vec<u8>) -> bool {
    match hir.kind() {
        HirKind::Literal(lit) => {
            out.extend_from_slice(&lit.0);
            true
        }
        HirKind::Concat(parts) => parts.iter().all(|part| collect_literal(part, out)),
        _ => false,
    }
}
