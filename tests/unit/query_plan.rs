//! Literal fast path versus regex scan selection.

use super::common::{hamlet, HAMLET_OFFSETS, TO_BE_OFFSETS};
use shakesearch::{CompiledQuery, SearchError, DEFAULT_REGEX_SIZE_LIMIT};

fn compile(query: &str) -> CompiledQuery {
    CompiledQuery::new(query, DEFAULT_REGEX_SIZE_LIMIT).unwrap()
}

#[test]
fn test_literal_and_scan_agree_on_fixture() {
    let searcher = hamlet();
    let index = searcher.index();

    let literal = compile("Hamlet");
    assert!(literal.literal().is_some());

    // A capture group keeps the pattern off the literal path
    let scan = compile("Hamle(t)");
    assert!(scan.literal().is_none());

    assert_eq!(index.find_all(&literal), HAMLET_OFFSETS);
    assert_eq!(index.find_all(&scan), HAMLET_OFFSETS);
}

#[test]
fn test_multi_word_literal() {
    let q = compile("TO BE");
    assert_eq!(q.literal(), Some(&b"to be"[..]));
    assert_eq!(hamlet().index().find_all(&q), TO_BE_OFFSETS);
}

#[test]
fn test_anchors_and_word_boundaries_scan() {
    let searcher = hamlet();
    assert_eq!(searcher.find_all(r"(?m)^hamlet\.$").unwrap(), vec![98, 723]);
    assert_eq!(searcher.find_all(r"\bdie\b").unwrap(), vec![308, 478]);
}

#[test]
fn test_repetition_matches_like_literal() {
    let searcher = hamlet();
    assert_eq!(
        searcher.find_all("sle+p").unwrap(),
        searcher.find_all("sleep").unwrap()
    );
    assert_eq!(
        searcher.find_all("sleep").unwrap(),
        vec![316, 341, 486, 496, 556]
    );
}

#[test]
fn test_invalid_patterns_are_rejected() {
    for query in ["(", "[a-", "a{2,1}", r"\"] {
        let err = CompiledQuery::new(query, DEFAULT_REGEX_SIZE_LIMIT).unwrap_err();
        let SearchError::InvalidQuery { query: echoed, message } = err;
        assert_eq!(echoed, query);
        assert!(!message.is_empty());
    }
}

#[test]
fn test_size_limit_rejects_huge_patterns() {
    assert!(CompiledQuery::new(r"\w{1000}", 1 << 16).is_err());
    assert!(CompiledQuery::new("hamlet", 1 << 16).is_ok());
}
