//! Proc macros for leaderboard records.
//!
//! # Available Macros
//!
//! - [`Record`] - Generate the schema table and field accessor for a record struct

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derives the `Record` trait for leaderboard rows.
///
/// This macro generates an implementation of the `Record` trait from
/// `leaderboard-query`: a static `Schema` listing every annotated field, and a
/// `field_value` accessor dispatching on the field name.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Text field, sorted with locale-aware collation. Type must be `AsRef<str>` |
/// | `Number` | Numeric field, sorted arithmetically. Type must be a `Copy` primitive number |
/// | `Date` | RFC 3339 timestamp string, sorted chronologically. Type must be `AsRef<str>` |
/// | `searchable` | Match the search term against this field |
/// | `skip` | Exclude this field from the schema |
/// | `rename = "..."` | Use a custom name in queries |
///
/// Fields without a kind are left out of the schema.
///
/// # Container Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename_all = "camelCase"` | Rename every field not given an explicit `rename` |
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Player::WIN_RATE == "winRate"`)
/// 2. `Record::schema()` returning a `'static` schema in declaration order
/// 3. `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use leaderboard_macros::Record;
/// use leaderboard_query::{query, Dir, QueryState};
///
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct Player {
///     #[record(String)]
///     id: String,
///
///     #[record(String, searchable)]
///     username: String,
///
///     #[record(Number)]
///     win_rate: u8,
///
///     #[record(Date)]
///     last_active: String,
/// }
///
/// let state = QueryState::new(Player::WIN_RATE, 50).with_sort(Player::WIN_RATE, Dir::Desc);
/// let page = query(&players, &state)?;
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
