//! Identical inputs give identical outputs.

use super::common::{hamlet, make_searcher, HAMLET};

#[test]
fn test_repeated_search_is_identical() {
    let searcher = hamlet();
    for query in ["hamlet", "to be", "sle+p", r"\bthe\b"] {
        let first = searcher.search(query, 0).unwrap();
        let second = searcher.search(query, 0).unwrap();
        assert_eq!(first, second, "{}", query);
    }
}

#[test]
fn test_independent_builds_agree() {
    let a = make_searcher(HAMLET);
    let b = make_searcher(HAMLET);

    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.index().suffix_array(), b.index().suffix_array());
    assert_eq!(a.search("the", 3).unwrap(), b.search("the", 3).unwrap());
}

#[test]
fn test_clone_searches_like_original() {
    let searcher = hamlet();
    let cloned = searcher.clone();
    assert_eq!(
        searcher.search("well", 1).unwrap(),
        cloned.search("well", 1).unwrap()
    );
}
