//! Page window arithmetic over an ordered post collection.

use std::ops::Range;

/// A validated page request: 0-based page index and a positive page size.
///
/// The window it describes is `[page * size, page * size + size)`. Running
/// past the end of the data clamps to the available elements; it is never
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub size: u64,
}

impl PageQuery {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Index of the first element of the window.
    ///
    /// Saturates on overflow and is capped at `i64::MAX`, the largest
    /// OFFSET the SQL layer accepts; a window that far out is empty
    /// everywhere anyway.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }

    /// Maximum number of elements in the window.
    pub fn limit(&self) -> u64 {
        self.size
    }

    /// The window clamped to a collection of `len` elements, as a slice
    /// range. A start past the end yields an empty range.
    pub fn clamp(&self, len: usize) -> Range<usize> {
        let len = len as u64;
        let from = self.offset().min(len);
        let to = self.offset().saturating_add(self.size).min(len);
        from as usize..to as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_over_hundred_posts() {
        // The fixture triples exercised against a 100-post collection.
        assert_eq!(PageQuery::new(1, 3).clamp(100), 3..6);
        assert_eq!(PageQuery::new(2, 10).clamp(100), 20..30);
        assert_eq!(PageQuery::new(3, 20).clamp(100), 60..80);
    }

    #[test]
    fn test_first_page() {
        assert_eq!(PageQuery::new(0, 10).clamp(100), 0..10);
    }

    #[test]
    fn test_tail_clamps_without_error() {
        // 95..105 requested, only 100 available.
        assert_eq!(PageQuery::new(19, 5).clamp(97), 95..97);
    }

    #[test]
    fn test_start_past_end_is_empty() {
        let range = PageQuery::new(50, 10).clamp(100);
        assert!(range.is_empty());
    }

    #[test]
    fn test_start_at_exact_end_is_empty() {
        assert!(PageQuery::new(10, 10).clamp(100).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(PageQuery::new(0, 20).clamp(0).is_empty());
    }

    #[test]
    fn test_offset_saturates_instead_of_overflowing() {
        let query = PageQuery::new(u64::MAX, 2);
        assert_eq!(query.offset(), i64::MAX as u64);
        assert!(query.clamp(100).is_empty());
    }

    #[test]
    fn test_limit_is_page_size() {
        assert_eq!(PageQuery::new(4, 25).limit(), 25);
    }
}
