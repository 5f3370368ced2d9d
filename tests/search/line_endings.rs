//! Raw versus normalized line endings.

use super::common::{hamlet_crlf, make_searcher, make_searcher_with, oracle_find_literal, HAMLET};
use shakesearch::SearchConfig;

fn normalizing() -> SearchConfig {
    SearchConfig {
        normalize_line_endings: true,
        ..SearchConfig::default()
    }
}

#[test]
fn test_raw_corpus_keeps_crlf() {
    let text = hamlet_crlf();
    let searcher = make_searcher(&text);

    let stats = searcher.stats();
    assert_eq!(stats.corpus_bytes, text.len());
    assert_eq!(stats.crlf_pairs, 27);
    assert_eq!(stats.lines, 27);

    assert!(searcher.find_all(r"hamlet\.\n").unwrap().is_empty());
    assert_eq!(searcher.find_all(r"hamlet\.\r\n").unwrap().len(), 3);
    assert_eq!(
        searcher.find_all("hamlet").unwrap(),
        oracle_find_literal(text.as_bytes(), b"hamlet")
    );
}

#[test]
fn test_normalized_corpus_matches_across_lines() {
    let searcher = make_searcher_with(&hamlet_crlf(), normalizing());

    assert_eq!(searcher.index().text(), HAMLET.as_bytes());
    assert_eq!(searcher.stats().crlf_pairs, 0);
    assert_eq!(searcher.find_all(r"hamlet\.\n").unwrap(), vec![89, 98, 723]);
    assert_eq!(searcher.find_all("sleep;\nno more").unwrap(), vec![316]);
}

#[test]
fn test_lone_carriage_returns_are_normalized() {
    let searcher = make_searcher_with("To be,\ror not", normalizing());
    assert_eq!(searcher.index().text(), b"To be,\nor not");
    assert_eq!(searcher.find_all(r",\nor").unwrap(), vec![5]);
}

#[test]
fn test_normalization_is_off_by_default() {
    assert!(!SearchConfig::default().normalize_line_endings);
    let searcher = make_searcher("a\r\nb");
    assert_eq!(searcher.index().text(), b"a\r\nb");
}
