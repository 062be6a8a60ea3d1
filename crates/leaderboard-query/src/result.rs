//! The visible page plus pagination metadata.

use std::ops::RangeInclusive;

/// Output of one query.
///
/// Holds shared references into the caller's record slice; nothing is
/// copied and nothing is retained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a, T> {
    /// The records on the requested page, in sorted order.
    pub records: Vec<&'a T>,
    /// Number of records that passed the search filter.
    pub total_matching: usize,
    /// `ceil(total_matching / page_size)`, `0` when nothing matched.
    pub total_pages: usize,
    /// The 1-based page index that was requested.
    pub page_index: usize,
    /// The page size that was requested.
    pub page_size: usize,
}

impl<'a, T> QueryResult<'a, T> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page_index > 1 && self.total_pages > 0
    }

    /// 1-based positions of this page's records within all matches, for
    /// "showing 51-100 of 9876" style labels. `None` for an empty page.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        if self.records.is_empty() {
            return None;
        }
        let first = (self.page_index - 1) * self.page_size + 1;
        Some(first..=first + self.records.len() - 1)
    }

    /// Iterates over the page's records.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.records.iter().copied()
    }

    /// Clones the page's records into owned values.
    pub fn cloned(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.iter().map(|record| (*record).clone()).collect()
    }
}
