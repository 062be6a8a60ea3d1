//! Leaderboard query engine: search, sort and paginate in-memory records.
//!
//! The engine is a pure function of a record slice and a [`QueryState`]. Each
//! call runs three stages in a fixed order and returns the visible page plus
//! pagination metadata:
//!
//! 1. **Filter**: keep records where the trimmed, case-insensitive search term
//!    is a substring of at least one searchable field.
//! 2. **Sort**: stable sort on one schema field. Strings use locale-aware
//!    collation, numbers compare arithmetically, dates chronologically.
//! 3. **Paginate**: slice out the requested 1-based page.
//!
//! Nothing is cached between calls and the record slice is never mutated.
//!
//! # Quick Start
//!
//! ```rust
//! use leaderboard_query::{
//!     query, Dir, FieldDef, FieldKind, Number, QueryState, Record, Schema, Value,
//! };
//!
//! struct Player {
//!     username: String,
//!     country: String,
//!     score: u32,
//! }
//!
//! static SCHEMA: Schema = Schema::new(&[
//!     FieldDef::new("username", FieldKind::String).searchable(),
//!     FieldDef::new("country", FieldKind::String).searchable(),
//!     FieldDef::new("score", FieldKind::Number),
//! ]);
//!
//! impl Record for Player {
//!     fn schema() -> &'static Schema {
//!         &SCHEMA
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "username" => Value::String(&self.username),
//!             "country" => Value::String(&self.country),
//!             "score" => Value::Number(Number::from(self.score)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let players = vec![
//!     Player { username: "NovaKing".into(), country: "US".into(), score: 7200 },
//!     Player { username: "FrostPro".into(), country: "AU".into(), score: 9100 },
//!     Player { username: "BladeHero".into(), country: "UK".into(), score: 8000 },
//! ];
//!
//! let state = QueryState::new("score", 10)
//!     .with_search("u")
//!     .with_sort("score", Dir::Desc);
//!
//! let page = query(&players, &state).unwrap();
//! assert_eq!(page.total_matching, 3);
//! assert_eq!(page.records[0].username, "FrostPro");
//! ```
//!
//! # Errors
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Sort field not in schema | [`QueryError::UnknownField`] |
//! | Page size 0 | [`QueryError::InvalidPageSize`] |
//! | Page index 0 | [`QueryError::InvalidPageIndex`] |
//! | Accessor value contradicts schema kind | [`QueryError::TypeMismatch`] |
//!
//! An empty record slice is not an error: it yields no records and zero pages.

pub mod collate;
mod config;
mod engine;
mod error;
mod ordering;
mod page;
mod record;
mod result;
mod schema;
mod search;
mod state;
mod value;

// Re-export public API
pub use config::LeaderboardConfig;
pub use engine::{query, QueryEngine};
pub use error::{QueryError, Result};
pub use ordering::{sort_records, Dir, SortKey};
pub use page::{page_window, total_pages, PageRequest};
pub use record::Record;
pub use result::QueryResult;
pub use schema::{FieldDef, FieldKind, Schema};
pub use search::{filter_records, SearchTerm};
pub use state::QueryState;
pub use value::{Number, Timestamp, Value};
