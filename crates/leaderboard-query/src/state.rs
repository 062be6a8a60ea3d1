//! Caller-owned query inputs and the view policies that update them.
//!
//! The engine only ever borrows a [`QueryState`]. The mutating helpers here
//! encode how a leaderboard view reacts to user actions: a new search or a
//! new sort goes back to page 1, and a page index left dangling by a shrinking
//! result set is clamped by the caller before the next query.

use serde::{Deserialize, Serialize};

use crate::config::LeaderboardConfig;
use crate::error::{QueryError, Result};
use crate::ordering::Dir;

/// The full set of inputs for one query.
///
/// ```
/// use leaderboard_query::{Dir, QueryState};
///
/// let mut state = QueryState::default();
/// assert_eq!(state.sort_field, "rank");
///
/// state.toggle_sort("rank");
/// assert_eq!(state.sort_dir, Dir::Desc);
///
/// state.toggle_sort("score");
/// assert_eq!((state.sort_field.as_str(), state.sort_dir), ("score", Dir::Asc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Raw search input; trimmed and lowercased by the engine.
    pub search_term: String,
    /// Name of the schema field to sort by.
    pub sort_field: String,
    /// Sort direction.
    pub sort_dir: Dir,
    /// 1-based page index.
    pub page_index: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState::from_config(&LeaderboardConfig::default())
    }
}

impl QueryState {
    /// Creates the initial state: no search, sorted by `sort_field`
    /// ascending, first page.
    pub fn new(sort_field: impl Into<String>, page_size: usize) -> Self {
        QueryState {
            search_term: String::new(),
            sort_field: sort_field.into(),
            sort_dir: Dir::Asc,
            page_index: 1,
            page_size,
        }
    }

    /// Creates the initial state described by a configuration.
    pub fn from_config(config: &LeaderboardConfig) -> Self {
        QueryState {
            sort_dir: config.default_sort_dir,
            ..QueryState::new(config.default_sort_field.clone(), config.default_page_size)
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Sets the sort field and direction.
    pub fn with_sort(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort_field = field.into();
        self.sort_dir = dir;
        self
    }

    /// Sets the page index.
    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    // ========================================================================
    // View policies
    // ========================================================================

    /// Replaces the search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page_index = 1;
    }

    /// Handles a click on a sortable column.
    ///
    /// The active field flips direction; any other field becomes active in
    /// ascending order. Either way the view returns to the first page.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_dir = Dir::Asc;
        }
        self.page_index = 1;
    }

    /// Switches to one of the configured page sizes and returns to the
    /// first page.
    pub fn set_page_size(&mut self, page_size: usize, config: &LeaderboardConfig) -> Result<()> {
        if !config.allows_page_size(page_size) {
            return Err(QueryError::PageSizeNotAllowed {
                page_size,
                allowed: config.page_sizes.clone(),
            });
        }
        self.page_size = page_size;
        self.page_index = 1;
        Ok(())
    }

    /// Pulls the page index back into `1..=total_pages` (page 1 when there
    /// are no pages). Returns `true` if the index changed.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page_index.clamp(1, total_pages.max(1));
        let changed = clamped != self.page_index;
        self.page_index = clamped;
        changed
    }

    /// Advances one page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page_index < total_pages {
            self.page_index += 1;
        }
    }

    /// Goes back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        if self.page_index > 1 {
            self.page_index -= 1;
        }
    }
}
