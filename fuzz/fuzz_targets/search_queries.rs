// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary query text and offsets against a fixed corpus. The engine must
//! either reject the query with `InvalidQuery` or return a page that respects
//! the pagination and preview bounds. It must never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::{SearchConfig, Searcher};

const CORPUS: &str = "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\r\n\r\n\
HAMLET.\r\nTo be, or not to be, that is the question:\r\n\
Whether 'tis nobler in the mind to suffer\r\n\
The slings and arrows of outrageous fortune,\r\n\
\u{212A}ing \u{17F}leep caf\u{E9} na\u{EF}ve \u{1F3AD}\0\n";

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    offset: i64,
    page_size: u8,
    radius: u8,
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fuzz_target!(|input: Input| {
    let config = SearchConfig {
        page_size: input.page_size as usize,
        preview_radius: input.radius as usize,
        // Keep pathological patterns cheap to reject
        regex_size_limit: 1 << 20,
        ..SearchConfig::default()
    };
    let searcher = match Searcher::from_bytes(CORPUS.as_bytes().to_vec(), config) {
        Ok(searcher) => searcher,
        Err(err) => panic!("fixed corpus failed to load: {}", err),
    };

    let query = truncate(input.query, 200);
    let page = match searcher.search(query, input.offset) {
        Ok(page) => page,
        Err(_) => return,
    };

    let page_size = (input.page_size as usize).max(1);
    assert!(page.len() <= page_size);
    assert!(page.offset <= page.total);
    assert_eq!(page.results.len(), page.positions.len());
    assert_eq!(page.has_more, page.offset + page.len() < page.total);
    assert!(page.positions.windows(2).all(|w| w[0] < w[1]));
    for &pos in &page.positions {
        assert!(pos <= CORPUS.len());
        let (start, end) = searcher.window(pos);
        assert!(start <= end && end <= CORPUS.len());
    }
});
