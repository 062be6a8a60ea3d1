//! Locale-aware string collation.
//!
//! Strings are compared the way natural-language sorting expects rather than
//! by code point, using a multi-level key in the style of the Unicode
//! Collation Algorithm:
//!
//! 1. **Primary**: base letters, accents and case folded away. Whitespace
//!    sorts before punctuation, punctuation before digits, digits before
//!    letters. `"apple" < "Banana" < "émile" < "zebra"`.
//! 2. **Secondary**: unaccented before accented. `"resume" < "résumé"`.
//! 3. **Tertiary**: lowercase before uppercase. `"ace" < "Ace"`.
//! 4. **Identical**: code point order, so distinct strings never tie.
//!
//! Accent folding uses `deunicode` transliteration, so Latin, Greek and
//! Cyrillic letters fold onto their ASCII base letters. Symbols keep their
//! punctuation class even when they transliterate to letters (`"€"` folds to
//! `eur` but still sorts before digits). Letters with no transliteration sort
//! after all other letters by code point.

use std::cmp::Ordering;

use deunicode::deunicode_char;

const CLASS_WHITESPACE: u32 = 1;
const CLASS_PUNCTUATION: u32 = 2;
const CLASS_DIGIT: u32 = 3;
const CLASS_LETTER: u32 = 4;
const CLASS_OTHER: u32 = 5;

/// Precomputed sort key for a string.
///
/// Building a key costs one pass over the string; comparing two keys is a
/// plain lexicographic comparison. The sort stage builds one key per record
/// instead of re-folding strings on every comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
    identical: Box<str>,
}

impl CollationKey {
    /// Builds the collation key for `s`.
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for c in s.chars() {
            let upper = u8::from(c.is_uppercase());

            if c.is_ascii() {
                primary.push(primary_weight(c.to_ascii_lowercase()));
                secondary.push(0);
                tertiary.push(upper);
                continue;
            }

            // Classed by the original character, not by its transliteration
            let symbol = !(c.is_alphanumeric() || c.is_whitespace());
            let weight = |f: char| {
                if symbol {
                    (CLASS_PUNCTUATION << 21) | f as u32
                } else {
                    primary_weight(f)
                }
            };

            match fold(c) {
                Some(folded) if !folded.is_empty() => {
                    for f in folded.chars() {
                        primary.push(weight(f.to_ascii_lowercase()));
                        secondary.push(1);
                        tertiary.push(upper);
                    }
                }
                // Combining marks only carry accent weight
                Some(_) => secondary.push(1),
                None => {
                    primary.push(weight(c));
                    secondary.push(0);
                    tertiary.push(upper);
                }
            }
        }

        CollationKey {
            primary,
            secondary,
            tertiary,
            identical: s.into(),
        }
    }
}

/// Compares two strings with locale-aware collation.
///
/// ```
/// use std::cmp::Ordering;
/// use leaderboard_query::collate::compare;
///
/// assert_eq!(compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare("Émile", "Zoe"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

fn fold(c: char) -> Option<&'static str> {
    let folded = deunicode_char(c)?;
    if c.is_whitespace() {
        return Some(folded);
    }
    // Transliterations of ideographs carry a trailing separator space
    let folded = folded.trim();
    if folded.is_ascii() {
        Some(folded)
    } else {
        None
    }
}

fn primary_weight(c: char) -> u32 {
    let class = if c.is_whitespace() {
        CLASS_WHITESPACE
    } else if c.is_ascii_digit() {
        CLASS_DIGIT
    } else if c.is_ascii_alphabetic() {
        CLASS_LETTER
    } else if c.is_ascii() {
        CLASS_PUNCTUATION
    } else {
        CLASS_OTHER
    };
    (class << 21) | c as u32
}
