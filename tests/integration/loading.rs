//! Loading a corpus from the filesystem.

use std::io::Write;

use super::common::{HAMLET, HAMLET_OFFSETS};
use shakesearch::{LoadError, SearchConfig, Searcher};
use tempfile::NamedTempFile;

fn corpus_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_fixture_from_disk() {
    let file = corpus_file(HAMLET.as_bytes());
    let searcher = Searcher::load(file.path(), SearchConfig::default()).unwrap();

    assert_eq!(searcher.index().text(), HAMLET.as_bytes());
    assert_eq!(searcher.find_all("hamlet").unwrap(), HAMLET_OFFSETS);
}

#[test]
fn test_load_matches_from_bytes() {
    let file = corpus_file(HAMLET.as_bytes());
    let loaded = Searcher::load(file.path(), SearchConfig::default()).unwrap();
    let in_memory = Searcher::from_bytes(HAMLET.as_bytes().to_vec(), SearchConfig::default()).unwrap();

    assert_eq!(loaded.stats(), in_memory.stats());
    assert_eq!(loaded.search("to be", 0).unwrap(), in_memory.search("to be", 0).unwrap());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("completeworks.txt");

    let err = Searcher::load(&path, SearchConfig::default()).unwrap_err();
    match &err {
        LoadError::Io { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {:?}", other),
    }
    assert!(err.to_string().contains("completeworks.txt"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_empty_file_is_rejected() {
    let file = corpus_file(b"");
    let err = Searcher::load(file.path(), SearchConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::EmptyCorpus { path: Some(_) }));
}

#[test]
fn test_invalid_utf8_corpus_loads() {
    let file = corpus_file(b"caf\xE9 \xFF Hamlet");
    let searcher = Searcher::load(file.path(), SearchConfig::default()).unwrap();
    let page = searcher.search("hamlet", 0).unwrap();
    assert_eq!(page.positions, vec![7]);
    assert!(page.results[0].contains('\u{FFFD}'));
}

#[test]
fn test_load_with_normalization() {
    let file = corpus_file(b"Enter Hamlet.\r\n\r\nHAMLET.\r\n");
    let config = SearchConfig {
        normalize_line_endings: true,
        ..SearchConfig::default()
    };
    let searcher = Searcher::load(file.path(), config).unwrap();
    assert_eq!(searcher.index().text(), b"Enter Hamlet.\n\nHAMLET.\n");
    assert_eq!(searcher.find_all(r"\.\n\nhamlet").unwrap(), vec![12]);
}
