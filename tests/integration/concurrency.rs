//! One searcher shared read-only by many threads.

use std::sync::Arc;
use std::thread;

use super::common::{hamlet_with, HAMLET_OFFSETS};

#[test]
fn test_concurrent_searches_agree() {
    let searcher = Arc::new(hamlet_with(2, 30));
    let expected = searcher.search("the", 4).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let searcher = Arc::clone(&searcher);
            thread::spawn(move || {
                let mut pages = Vec::new();
                for _ in 0..50 {
                    pages.push(searcher.search("the", 4).unwrap());
                    // Interleave other queries, including bad ones
                    assert!(searcher.search("(", 0).is_err());
                    assert_eq!(searcher.find_all("hamlet").unwrap(), HAMLET_OFFSETS);
                    let _ = searcher.search("sle+p", i);
                }
                pages
            })
        })
        .collect();

    for handle in handles {
        for page in handle.join().unwrap() {
            assert_eq!(page, expected);
        }
    }
}

#[test]
fn test_scoped_threads_borrow_searcher() {
    let searcher = &hamlet_with(20, 10);
    let queries = ["hamlet", "to be", "sleep", "well"];

    let totals: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| scope.spawn(move || searcher.search(q, 0).unwrap().total))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(totals, vec![4, 3, 5, 3]);
}
