//! Rejected queries and recovery afterwards.

use super::common::{hamlet, HAMLET_OFFSETS};
use shakesearch::SearchError;

#[test]
fn test_unbalanced_paren_is_invalid() {
    let searcher = hamlet();
    let err = searcher.search("(", 0).unwrap_err();

    let SearchError::InvalidQuery { query, .. } = &err;
    assert_eq!(query, "(");
    assert!(err.to_string().starts_with("invalid query \"(\""));
}

#[test]
fn test_engine_still_usable_after_invalid_query() {
    let searcher = hamlet();
    for bad in ["(", "[", "*hamlet", "a{3,2}"] {
        assert!(searcher.search(bad, 0).is_err(), "{} should be rejected", bad);
        assert_eq!(searcher.find_all("hamlet").unwrap(), HAMLET_OFFSETS);
    }
}

#[test]
fn test_empty_query_is_not_an_error() {
    let searcher = hamlet();
    let page = searcher.search("", 0).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_empty_matching_pattern_is_not_rejected() {
    // Matches the empty string at every position; the engine reports them
    let searcher = shakesearch::testing::make_searcher("abc");
    assert_eq!(searcher.find_all("x*").unwrap(), vec![0, 1, 2, 3]);
}
