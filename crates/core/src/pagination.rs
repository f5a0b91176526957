//! Page arithmetic over the cached result set.
//!
//! Pages are 1-indexed. A page past the end (or page 0) is an empty slice,
//! never an error and never clamped to the last page.

use schemars::JsonSchema;
use serde::Serialize;

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Resolved bounds of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Slice start, clipped to `total_items`.
    pub start: usize,
    /// Slice end (exclusive), clipped to `total_items`.
    pub end: usize,
}

impl PageWindow {
    /// Compute the window for `page` over `total_items` items.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);

        let (start, end) = match page.checked_sub(1) {
            Some(index) => {
                let start = index.saturating_mul(page_size).min(total_items);
                let end = start.saturating_add(page_size).min(total_items);
                (start, end)
            }
            None => (0, 0),
        };

        Self { page, page_size, total_items, total_pages, start, end }
    }

    /// Whether pagination controls should be offered at all.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow this window's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        &items[self.start.min(end)..end]
    }
}

/// One page of items plus its window metadata.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub window: PageWindow,
    pub shows_controls: bool,
}

/// Slice `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let window = PageWindow::new(items.len(), page_size, page);
    Page { items: window.slice(items).to_vec(), shows_controls: window.shows_controls(), window }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(PageWindow::new(0, 12, 1).total_pages, 0);
        assert_eq!(PageWindow::new(12, 12, 1).total_pages, 1);
        assert_eq!(PageWindow::new(13, 12, 1).total_pages, 2);
        assert_eq!(PageWindow::new(25, 12, 1).total_pages, 3);
        assert_eq!(PageWindow::new(84, 12, 1).total_pages, 7);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 3);
        assert_eq!(page.window.total_pages, 3);
        assert_eq!(page.items, vec![24]);
    }

    #[test]
    fn test_page_beyond_total_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 4);
        assert!(page.items.is_empty());
        assert!(page.window.is_empty());
        assert_eq!(page.window.start, 25);
        assert_eq!(page.window.end, 25);
    }

    #[test]
    fn test_page_zero_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 1);
        assert_eq!(page.items, (0..12).collect::<Vec<_>>());
        assert_eq!(page.window.len(), 12);
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        let items: Vec<u32> = (0..12).collect();
        let page = paginate(&items, DEFAULT_PAGE_SIZE, 1);
        assert!(!page.shows_controls);
        assert_eq!(page.items.len(), 12);

        assert!(!paginate::<u32>(&[], DEFAULT_PAGE_SIZE, 1).shows_controls);
        assert!(paginate(&(0..13).collect::<Vec<u32>>(), DEFAULT_PAGE_SIZE, 1).shows_controls);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let window = PageWindow::new(25, 12, usize::MAX);
        assert!(window.is_empty());
    }
}
