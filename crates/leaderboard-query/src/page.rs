//! Paginate stage and page arithmetic.

use std::ops::RangeInclusive;

use crate::error::{QueryError, Result};

/// A validated page request: 1-based index and positive size.
///
/// ```
/// use leaderboard_query::PageRequest;
///
/// let page = PageRequest::new(3, 2).unwrap();
/// assert_eq!(page.slice(&[50, 40, 30, 20, 10]), &[10]);
///
/// assert!(PageRequest::new(0, 10).is_err());
/// assert!(PageRequest::new(1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    index: usize,
    size: usize,
}

impl PageRequest {
    /// Validates a page index and page size.
    pub fn new(index: usize, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(QueryError::InvalidPageSize { page_size: size });
        }
        if index == 0 {
            return Err(QueryError::InvalidPageIndex { page_index: index });
        }
        Ok(PageRequest { index, size })
    }

    /// Returns the 1-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the 0-based position of the first record on this page.
    ///
    /// Saturates instead of overflowing, which lands past any real slice.
    pub fn offset(&self) -> usize {
        (self.index - 1).saturating_mul(self.size)
    }

    /// Returns this page's window of `items`, clamped to its bounds.
    ///
    /// A page past the end yields an empty slice; the index is never
    /// adjusted here.
    pub fn slice<'s, X>(&self, items: &'s [X]) -> &'s [X] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }
}

/// Number of pages needed for `total` records, `0` when there are none.
///
/// # Panics
///
/// Panics if `page_size` is zero; use [`PageRequest`] to validate first.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Page numbers shown by a pager with `width` links around `current`.
///
/// The window keeps `current` roughly centred and slides to stay inside
/// `1..=total_pages`. Empty when there are no pages.
///
/// ```
/// use leaderboard_query::page_window;
///
/// assert_eq!(page_window(1, 20, 5), 1..=5);
/// assert_eq!(page_window(10, 20, 5), 8..=12);
/// assert_eq!(page_window(20, 20, 5), 16..=20);
/// assert_eq!(page_window(2, 3, 5), 1..=3);
/// ```
pub fn page_window(current: usize, total_pages: usize, width: usize) -> RangeInclusive<usize> {
    if total_pages == 0 || width == 0 {
        return RangeInclusive::new(1, 0);
    }
    let len = width.min(total_pages);
    let last_start = total_pages - len + 1;
    let start = current.saturating_sub(width / 2).min(last_start).max(1);
    start..=start + len - 1
}
