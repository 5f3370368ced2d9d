//! Differential tests: the suffix array fast path, the regex scan, and a
//! naive sliding-window oracle must agree on every input.

use super::common::{make_searcher, oracle_find_literal};
use proptest::prelude::*;

fn corpus_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB .?*\n]{1,120}").unwrap()
}

fn needle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB .?*]{1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_literal_search_matches_oracle(text in corpus_strategy(), needle in needle_strategy()) {
        let searcher = make_searcher(&text);
        let found = searcher.find_all(&regex::escape(&needle)).unwrap();
        prop_assert_eq!(found, oracle_find_literal(text.as_bytes(), needle.as_bytes()));
    }

    #[test]
    fn prop_fast_path_matches_regex_scan(text in corpus_strategy(), needle in "[abAB]{1,3}") {
        let searcher = make_searcher(&text);
        let literal = searcher.find_all(&needle).unwrap();
        // Wrapping in a group forces the scan path without changing the language
        let scanned = searcher.find_all(&format!("({})", needle)).unwrap();
        prop_assert_eq!(literal, scanned);
    }

    #[test]
    fn prop_matches_are_strictly_ascending(text in corpus_strategy(), needle in needle_strategy()) {
        let searcher = make_searcher(&text);
        let found = searcher.find_all(&regex::escape(&needle)).unwrap();
        prop_assert!(found.windows(2).all(|w| w[0] + needle.len() <= w[1]));
    }
}
