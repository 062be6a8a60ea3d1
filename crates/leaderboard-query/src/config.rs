//! Leaderboard view configuration.
//!
//! The engine itself accepts any positive page size. The choices a user is
//! offered, and the state a fresh view starts from, live here so that a
//! host can load them from a file.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};
use crate::ordering::Dir;

/// Caller-side settings for a leaderboard view.
///
/// Every field has a default, so partial config files are fine:
///
/// ```
/// use leaderboard_query::{Dir, LeaderboardConfig};
///
/// let config: LeaderboardConfig =
///     serde_json::from_str(r#"{ "default_sort_dir": "desc" }"#).unwrap();
///
/// assert_eq!(config.default_sort_dir, Dir::Desc);
/// assert_eq!(config.default_page_size, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaderboardConfig {
    /// Page sizes the user may pick from.
    pub page_sizes: Vec<usize>,
    /// Page size of a fresh view.
    pub default_page_size: usize,
    /// Sort field of a fresh view.
    pub default_sort_field: String,
    /// Sort direction of a fresh view.
    pub default_sort_dir: Dir,
    /// Number of page links a pager shows at once.
    pub page_window: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        LeaderboardConfig {
            page_sizes: vec![10, 25, 50, 100],
            default_page_size: 50,
            default_sort_field: "rank".to_string(),
            default_sort_dir: Dir::Asc,
            page_window: 5,
        }
    }
}

impl LeaderboardConfig {
    /// Returns `true` if `size` is one of the configured choices.
    pub fn allows_page_size(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }

    /// Checks internal consistency.
    ///
    /// The sort field is not checked here; it is resolved against the record
    /// schema on every query.
    pub fn validate(&self) -> Result<()> {
        if self.page_sizes.is_empty() {
            return Err(QueryError::InvalidConfig(
                "page_sizes must list at least one size".to_string(),
            ));
        }
        if self.page_sizes.contains(&0) {
            return Err(QueryError::InvalidConfig(
                "page_sizes must all be at least 1".to_string(),
            ));
        }
        if !self.allows_page_size(self.default_page_size) {
            return Err(QueryError::InvalidConfig(format!(
                "default_page_size {} is not one of page_sizes {:?}",
                self.default_page_size, self.page_sizes
            )));
        }
        if self.default_sort_field.trim().is_empty() {
            return Err(QueryError::InvalidConfig(
                "default_sort_field must not be empty".to_string(),
            ));
        }
        if self.page_window == 0 {
            return Err(QueryError::InvalidConfig(
                "page_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
