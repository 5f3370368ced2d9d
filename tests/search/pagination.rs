//! Page slicing, offset clamping, and the has-more flag.

use super::common::{assert_page_well_formed, collect_pages, hamlet, hamlet_with};

const THE_OFFSETS: [usize; 11] = [0, 70, 135, 152, 172, 191, 299, 361, 381, 527, 535];

#[test]
fn test_pages_cover_every_match_in_order() {
    let searcher = hamlet_with(4, 20);
    let pages = collect_pages(&searcher, "the");

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].0, &THE_OFFSETS[0..4]);
    assert_eq!(pages[1].0, &THE_OFFSETS[4..8]);
    assert_eq!(pages[2].0, &THE_OFFSETS[8..11]);

    let flags: Vec<bool> = pages.iter().map(|(_, has_more)| *has_more).collect();
    assert_eq!(flags, vec![true, true, false]);
}

#[test]
fn test_exact_multiple_of_page_size() {
    let searcher = hamlet_with(2, 20);
    let pages = collect_pages(&searcher, "hamlet");
    assert_eq!(pages.len(), 2);
    assert!(pages[0].1);
    assert!(!pages[1].1);
}

#[test]
fn test_default_page_holds_all_fixture_matches() {
    let searcher = hamlet();
    let page = searcher.search("the", 0).unwrap();
    assert_eq!(page.len(), THE_OFFSETS.len());
    assert!(!page.has_more);
    assert_page_well_formed(&searcher, &page);
}

#[test]
fn test_offset_mid_page() {
    let searcher = hamlet_with(4, 20);
    let page = searcher.search("the", 9).unwrap();
    assert_eq!(page.positions, &THE_OFFSETS[9..]);
    assert_eq!(page.offset, 9);
    assert!(!page.has_more);
}

#[test]
fn test_offset_at_and_past_total() {
    let searcher = hamlet_with(4, 20);
    for offset in [11, 12, 1_000, i64::MAX] {
        let page = searcher.search("the", offset).unwrap();
        assert!(page.is_empty(), "offset {}", offset);
        assert!(!page.has_more);
        assert_eq!(page.total, 11);
        assert_page_well_formed(&searcher, &page);
    }
}

#[test]
fn test_negative_offset_behaves_as_zero() {
    let searcher = hamlet_with(4, 20);
    let first = searcher.search("the", 0).unwrap();
    for offset in [-1, -20, i64::MIN] {
        assert_eq!(searcher.search("the", offset).unwrap(), first);
    }
}

#[test]
fn test_no_matches() {
    let searcher = hamlet();
    let page = searcher.search("yorick", 0).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.total, 0);
}

#[test]
fn test_every_page_is_well_formed() {
    let searcher = hamlet_with(3, 40);
    let mut offset = 0;
    loop {
        let page = searcher.search("s", offset).unwrap();
        assert_page_well_formed(&searcher, &page);
        match page.next_offset() {
            Some(next) => offset = next as i64,
            None => break,
        }
    }
}
