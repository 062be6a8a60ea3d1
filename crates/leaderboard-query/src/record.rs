//! The [`Record`] trait: schema plus field access for a row type.
//!
//! This trait is implemented by the `#[derive(Record)]` macro from
//! `leaderboard-macros`, or by hand for types that need custom access.

use crate::schema::Schema;
use crate::value::Value;

/// A row type the query engine can search, sort and page.
///
/// # Derive Usage
///
/// ```ignore
/// use leaderboard_macros::Record;
///
/// #[derive(Record)]
/// struct Player {
///     #[record(String)]
///     id: String,
///     #[record(String, searchable)]
///     username: String,
///     #[record(Number)]
///     rank: u32,
/// }
///
/// assert_eq!(Player::RANK, "rank");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use leaderboard_query::{FieldDef, FieldKind, Number, Record, Schema, Value};
///
/// struct Player {
///     username: String,
///     rank: u32,
/// }
///
/// static SCHEMA: Schema = Schema::new(&[
///     FieldDef::new("username", FieldKind::String).searchable(),
///     FieldDef::new("rank", FieldKind::Number),
/// ]);
///
/// impl Record for Player {
///     fn schema() -> &'static Schema {
///         &SCHEMA
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "username" => Value::String(&self.username),
///             "rank" => Value::Number(Number::from(self.rank)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the static field declarations for this type.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Returns the value of a field, or [`Value::None`] for unknown names.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Static accessor function suitable for [`QueryEngine::run`].
    ///
    /// [`QueryEngine::run`]: crate::QueryEngine::run
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
