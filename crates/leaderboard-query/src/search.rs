//! Filter stage: free-text search over the schema's searchable fields.

use crate::schema::Schema;
use crate::value::Value;

/// A normalized search term.
///
/// The raw input is trimmed and lowercased once; matching is plain substring
/// containment against each searchable field, also lowercased. There is no
/// tokenizing and no fuzzy matching.
///
/// ```
/// use leaderboard_query::SearchTerm;
///
/// let term = SearchTerm::new("  US ");
/// assert_eq!(term.as_str(), "us");
/// assert!(term.matches_text("AUS"));
/// assert!(!term.matches_text("UK"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Normalizes a raw search input.
    pub fn new(raw: &str) -> Self {
        SearchTerm {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns `true` if the term matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns the normalized term.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test against one piece of text.
    pub fn matches_text(&self, haystack: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if haystack.is_ascii() {
            // Avoids allocating for the common case
            return contains_ascii_lowercase(haystack, &self.needle);
        }
        haystack.to_lowercase().contains(&self.needle)
    }

    /// Tests a field value: strings and dates by their text, numbers by
    /// their decimal rendering. Missing values never match.
    pub fn matches_value(&self, value: &Value<'_>) -> bool {
        match value {
            Value::String(s) | Value::Date(s) => self.matches_text(s),
            Value::Number(n) => self.matches_text(&n.to_string()),
            Value::None => false,
        }
    }

    /// Tests a record: at least one searchable field must match.
    pub fn matches<T, F>(&self, item: &T, schema: &Schema, accessor: &F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.is_empty()
            || schema
                .searchable()
                .any(|def| self.matches_value(&accessor(item, def.name)))
    }
}

fn contains_ascii_lowercase(haystack: &str, needle: &str) -> bool {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.len() > hay.len() {
        return false;
    }
    hay.windows(pat.len())
        .any(|window| window.iter().zip(pat).all(|(h, p)| h.to_ascii_lowercase() == *p))
}

/// Keeps the records that match `term`, in collection order.
///
/// An empty term keeps every record.
pub fn filter_records<'a, T, F>(
    records: &'a [T],
    term: &SearchTerm,
    schema: &Schema,
    accessor: &F,
) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    if term.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|item| term.matches(*item, schema, accessor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldKind};
    use crate::value::Number;

    struct Player {
        username: &'static str,
        country: &'static str,
        score: u32,
        level: u32,
    }

    static SCHEMA: Schema = Schema::new(&[
        FieldDef::new("username", FieldKind::String).searchable(),
        FieldDef::new("country", FieldKind::String).searchable(),
        FieldDef::new("score", FieldKind::Number).searchable(),
        FieldDef::new("level", FieldKind::Number),
    ]);

    fn accessor<'a>(p: &'a Player, field: &str) -> Value<'a> {
        match field {
            "username" => Value::String(p.username),
            "country" => Value::String(p.country),
            "score" => Value::Number(Number::from(p.score)),
            "level" => Value::Number(Number::from(p.level)),
            _ => Value::None,
        }
    }

    fn players() -> Vec<Player> {
        vec![
            Player {
                username: "ShadowHunter12",
                country: "US",
                score: 9120,
                level: 77,
            },
            Player {
                username: "NovaKing3",
                country: "DE",
                score: 7005,
                level: 12,
            },
            Player {
                username: "FrostLord450",
                country: "AU",
                score: 5120,
                level: 91,
            },
            Player {
                username: "Émilie",
                country: "FR",
                score: 6000,
                level: 9,
            },
        ]
    }

    fn usernames(found: &[&Player]) -> Vec<&'static str> {
        found.iter().map(|p| p.username).collect()
    }

    #[test]
    fn empty_term_is_identity() {
        let players = players();
        for raw in ["", "   ", "\t\n"] {
            let found = filter_records(&players, &SearchTerm::new(raw), &SCHEMA, &accessor);
            assert_eq!(found.len(), players.len());
        }
    }

    #[test]
    fn case_insensitive_country_match() {
        let players = players();
        let found = filter_records(&players, &SearchTerm::new("us"), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["ShadowHunter12"]);
    }

    #[test]
    fn substring_not_prefix() {
        let players = players();
        let found = filter_records(&players, &SearchTerm::new("lord"), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["FrostLord450"]);
    }

    #[test]
    fn term_is_trimmed() {
        let players = players();
        let found = filter_records(&players, &SearchTerm::new("  nova  "), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["NovaKing3"]);
    }

    #[test]
    fn numeric_searchable_field_matches_decimal_text() {
        let players = players();
        // "120" appears in two scores
        let found = filter_records(&players, &SearchTerm::new("120"), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["ShadowHunter12", "FrostLord450"]);
    }

    #[test]
    fn non_searchable_fields_are_ignored() {
        let players = players();
        // level 77 only exists on an unsearched field
        let found = filter_records(&players, &SearchTerm::new("77"), &SCHEMA, &accessor);
        assert!(found.is_empty());
    }

    #[test]
    fn unicode_lowercasing() {
        let players = players();
        let found = filter_records(&players, &SearchTerm::new("ÉMIL"), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["Émilie"]);
    }

    #[test]
    fn survivors_keep_collection_order() {
        let players = players();
        let found = filter_records(&players, &SearchTerm::new("o"), &SCHEMA, &accessor);
        assert_eq!(usernames(&found), ["ShadowHunter12", "NovaKing3", "FrostLord450"]);
    }

    #[test]
    fn missing_value_never_matches() {
        let term = SearchTerm::new("x");
        assert!(!term.matches_value(&Value::None));
        assert!(SearchTerm::new("").matches_text(""));
        assert!(!term.matches_text(""));
    }

    #[test]
    fn ascii_fast_path_agrees_with_lowercase() {
        let term = SearchTerm::new("hunter");
        assert!(term.matches_text("SHADOWHUNTER"));
        assert!(term.matches_text("hunter"));
        assert!(!term.matches_text("hunte"));
    }
}
