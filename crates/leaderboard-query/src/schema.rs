//! Static field declarations for record types.
//!
//! A [`Schema`] is the caller's declaration of which fields exist, what kind
//! of value each one holds, and which ones the search term is matched against.
//! The engine dispatches comparators from this table, never from the runtime
//! shape of a value, so a numeric-looking string is still compared as text.

use crate::error::{QueryError, Result};

/// The declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Text, compared with locale-aware collation.
    String,
    /// Integer or floating point, compared arithmetically.
    Number,
    /// RFC 3339 timestamp stored as a string, compared chronologically.
    Date,
}

impl FieldKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Name used in queries and passed to the accessor.
    pub name: &'static str,
    /// Declared value kind.
    pub kind: FieldKind,
    /// Whether the search term is matched against this field.
    pub searchable: bool,
}

impl FieldDef {
    /// Declares a field that is sortable but not searched.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            kind,
            searchable: false,
        }
    }

    /// Marks the field as searchable.
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// The ordered set of fields a record type exposes to the engine.
///
/// Schemas are built in `const` context, usually by `#[derive(Record)]`:
///
/// ```
/// use leaderboard_query::{FieldDef, FieldKind, Schema};
///
/// static PLAYER_SCHEMA: Schema = Schema::new(&[
///     FieldDef::new("rank", FieldKind::Number),
///     FieldDef::new("username", FieldKind::String).searchable(),
///     FieldDef::new("country", FieldKind::String).searchable(),
/// ]);
///
/// assert!(PLAYER_SCHEMA.resolve("rank").is_ok());
/// assert!(PLAYER_SCHEMA.resolve("nickname").is_err());
/// assert_eq!(PLAYER_SCHEMA.searchable().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldDef],
}

impl Schema {
    /// Creates a schema from a static field table.
    pub const fn new(fields: &'static [FieldDef]) -> Self {
        Schema { fields }
    }

    /// Returns all declared fields in declaration order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    /// Looks up a field by name, failing with [`QueryError::UnknownField`].
    pub fn resolve(&self, name: &str) -> Result<&'static FieldDef> {
        self.field(name).ok_or_else(|| QueryError::UnknownField {
            field: name.to_string(),
        })
    }

    /// Returns `true` if a field with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterates over the searchable fields.
    pub fn searchable(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|def| def.searchable)
    }

    /// Returns the declared field names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|def| def.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: Schema = Schema::new(&[
        FieldDef::new("id", FieldKind::String),
        FieldDef::new("username", FieldKind::String).searchable(),
        FieldDef::new("score", FieldKind::Number).searchable(),
        FieldDef::new("lastActive", FieldKind::Date),
    ]);

    #[test]
    fn field_lookup() {
        let def = SCHEMA.field("score").unwrap();
        assert_eq!(def.kind, FieldKind::Number);
        assert!(def.searchable);

        assert!(SCHEMA.field("Score").is_none());
        assert!(SCHEMA.contains("lastActive"));
        assert!(!SCHEMA.contains(""));
    }

    #[test]
    fn resolve_unknown_field() {
        let err = SCHEMA.resolve("elo").unwrap_err();
        assert!(matches!(err, QueryError::UnknownField { ref field } if field == "elo"));
        assert_eq!(err.to_string(), "unknown sort field 'elo'");
    }

    #[test]
    fn searchable_fields_in_declaration_order() {
        let names: Vec<_> = SCHEMA.searchable().map(|def| def.name).collect();
        assert_eq!(names, ["username", "score"]);
    }

    #[test]
    fn names_in_declaration_order() {
        let names: Vec<_> = SCHEMA.names().collect();
        assert_eq!(names, ["id", "username", "score", "lastActive"]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(FieldKind::Date.to_string(), "date");
        assert_eq!(FieldKind::String.as_str(), "string");
    }
}
