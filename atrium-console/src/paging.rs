//! Page window arithmetic
//!
//! The backend hands lists over whole; the console slices them locally.
//! The current page is always inside `[1, total_pages]` and `total_pages`
//! never drops below 1, so an empty list still renders as page 1 of 1.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    total_items: usize,
    current: usize,
}

impl Pager {
    /// Create a pager; a zero page size is bumped to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total_items: 0,
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages, at least 1 even for an empty list
    pub fn total_pages(&self) -> usize {
        let pages = (self.total_items + self.page_size - 1) / self.page_size;
        pages.max(1)
    }

    /// Current page, 1-based
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Update the item count and re-clamp the current page.
    ///
    /// Deleting the last row of the last page pulls the view back to the
    /// new last page instead of leaving it past the end.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.current = self.current.min(self.total_pages());
    }

    pub fn next(&mut self) {
        self.jump(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.jump(self.current.saturating_sub(1));
    }

    /// Go to a page, clamped into the valid range
    pub fn jump(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages());
    }

    /// Slice of `items` visible on the current page
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_one_page() {
        let pager = Pager::new(10);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut pager = Pager::new(10);
        pager.set_total_items(25);
        assert_eq!(pager.total_pages(), 3);

        for _ in 0..10 {
            pager.next();
        }
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_prev_clamps_at_first_page() {
        let mut pager = Pager::new(10);
        pager.set_total_items(25);

        pager.prev();
        pager.prev();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_jump_out_of_range_clamps() {
        let mut pager = Pager::new(10);
        pager.set_total_items(25);

        pager.jump(99);
        assert_eq!(pager.current_page(), 3);

        pager.jump(0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_shrinking_list_reclamps_current_page() {
        let mut pager = Pager::new(10);
        pager.set_total_items(45);
        pager.jump(5);
        assert_eq!(pager.current_page(), 5);

        // Down to 2 pages: the view follows
        pager.set_total_items(12);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_window_slices_current_page() {
        let items: Vec<u32> = (0..25).collect();
        let mut pager = Pager::new(10);
        pager.set_total_items(items.len());

        assert_eq!(pager.window(&items), &items[0..10]);

        pager.next();
        assert_eq!(pager.window(&items), &items[10..20]);

        pager.next();
        assert_eq!(pager.window(&items), &items[20..25]);
    }

    #[test]
    fn test_window_on_empty_list_is_empty() {
        let items: Vec<u32> = Vec::new();
        let pager = Pager::new(10);
        assert!(pager.window(&items).is_empty());
    }
}
