// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzz target: suffix array lookup versus regex scan.
//!
//! For an arbitrary corpus and an arbitrary ASCII needle, the literal fast
//! path must report exactly the offsets a case-insensitive `find_iter` does.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::{SearchConfig, Searcher};

#[derive(Arbitrary, Debug)]
struct Input {
    corpus: Vec<u8>,
    needle: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let needle: String = input
        .needle
        .iter()
        .take(8)
        .map(|&b| (b & 0x7f) as char)
        .collect();
    if needle.is_empty() || input.corpus.is_empty() || input.corpus.len() > 1 << 16 {
        return;
    }

    let searcher = match Searcher::from_bytes(input.corpus.clone(), SearchConfig::default()) {
        Ok(searcher) => searcher,
        Err(_) => return,
    };

    let pattern = regex::escape(&needle);
    let found = match searcher.find_all(&pattern) {
        Ok(found) => found,
        Err(_) => return,
    };

    let expected: Vec<usize> = regex::bytes::RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(|re| re.find_iter(&input.corpus).map(|m| m.start()).collect())
        .unwrap_or_default();

    assert_eq!(found, expected);
});
