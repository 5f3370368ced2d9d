//! Pagination contract on random page sizes and offsets.

use super::common::{assert_page_well_formed, collect_pages, make_searcher_with};
use proptest::prelude::*;
use shakesearch::SearchConfig;

fn searcher(text: &str, page_size: usize) -> shakesearch::Searcher {
    make_searcher_with(
        text,
        SearchConfig {
            page_size,
            preview_radius: 8,
            ..SearchConfig::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_pages_concatenate_to_all_matches(
        text in "[ab ]{1,200}",
        page_size in 1usize..8,
    ) {
        let searcher = searcher(&text, page_size);
        let all = searcher.find_all("a").unwrap();
        let pages = collect_pages(&searcher, "a");

        let flattened: Vec<usize> = pages.iter().flat_map(|(p, _)| p.iter().copied()).collect();
        prop_assert_eq!(flattened, all.clone());

        // Only the last page says there is nothing more
        let last = pages.len() - 1;
        for (i, (_, has_more)) in pages.iter().enumerate() {
            prop_assert_eq!(*has_more, i != last);
        }
        prop_assert_eq!(pages.len(), all.len().div_ceil(page_size).max(1));
    }

    #[test]
    fn prop_any_offset_gives_well_formed_page(
        text in "[ab ]{1,100}",
        page_size in 0usize..6,
        offset in any::<i64>(),
    ) {
        let searcher = searcher(&text, page_size);
        let page = searcher.search("b", offset).unwrap();
        assert_page_well_formed(&searcher, &page);

        let total = searcher.find_all("b").unwrap().len();
        let start = offset.clamp(0, total as i64) as usize;
        prop_assert_eq!(page.offset, start);
        prop_assert_eq!(page.total, total);
    }
}
