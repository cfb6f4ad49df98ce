//! Assertions shared by pagination suites.

use std::fmt::Debug;

/// Assert that `pages` partitions `items` in order into chunks of `page_size`.
///
/// Every page except the last must be full, the last must be non-empty unless
/// `items` is empty, and concatenating the pages must reproduce `items`.
///
/// # Panics
///
/// Panics with a descriptive message when any of the above does not hold.
pub fn assert_pages_partition<T: PartialEq + Debug>(items: &[T], pages: &[&[T]], page_size: usize) {
    let Some((last, full)) = pages.split_last() else {
        panic!("expected at least one page");
    };
    for (index, page) in full.iter().enumerate() {
        assert_eq!(
            page.len(),
            page_size,
            "page {} should be full",
            index + 1
        );
    }
    assert!(last.len() <= page_size, "last page overflows page size");
    assert!(
        items.is_empty() || !last.is_empty(),
        "last page is empty for a non-empty collection"
    );
    let joined: Vec<&T> = pages.iter().flat_map(|page| page.iter()).collect();
    let expected: Vec<&T> = items.iter().collect();
    assert_eq!(joined, expected, "pages do not reproduce the collection");
}
