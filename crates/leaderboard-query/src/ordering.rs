//! Sort stage: direction, per-kind sort keys, and the stable sort.
//!
//! Provides [`Dir`] for sort direction and [`sort_records`], which orders a
//! filtered set by one schema field.

use std::cmp::Ordering;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::collate::CollationKey;
use crate::error::{QueryError, Result};
use crate::schema::{FieldDef, FieldKind};
use crate::value::{Number, Timestamp, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dir {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Comparable key extracted from one record for one field.
///
/// Keys of a single sort all come from the same schema field, so only
/// same-kind pairs and `Missing` ever meet. Missing values sort after
/// present ones.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Collation key of a string field.
    Text(CollationKey),
    /// Numeric field value.
    Number(Number),
    /// Parsed date field value.
    Date(Timestamp),
    /// Absent, null, or unparseable value.
    Missing,
}

impl SortKey {
    /// Builds the key for `value` under the field's declared kind.
    ///
    /// Fails with [`QueryError::TypeMismatch`] when the value's kind
    /// contradicts the declaration. A date string that does not parse
    /// becomes [`SortKey::Missing`].
    pub fn extract(def: &FieldDef, value: &Value<'_>) -> Result<Self> {
        match (def.kind, value) {
            (_, Value::None) => Ok(SortKey::Missing),
            (FieldKind::String, Value::String(s)) => Ok(SortKey::Text(CollationKey::new(s))),
            (FieldKind::Number, Value::Number(n)) => Ok(SortKey::Number(*n)),
            (FieldKind::Date, Value::Date(s)) => Ok(Timestamp::parse_rfc3339(s)
                .map(SortKey::Date)
                .unwrap_or(SortKey::Missing)),
            (kind, other) => Err(QueryError::TypeMismatch {
                field: def.name.to_string(),
                expected: kind.as_str(),
                actual: other.type_name(),
            }),
        }
    }

    /// Returns `true` for [`SortKey::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, SortKey::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Missing => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(*b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Sorts records by one field.
///
/// Keys are extracted once per record, then ordered with a stable sort:
/// records whose keys compare equal keep their incoming relative order in
/// both directions, so `Desc` is exactly `Asc` with the comparator reversed.
pub fn sort_records<'a, T, F>(
    records: Vec<&'a T>,
    def: &FieldDef,
    dir: Dir,
    accessor: &F,
) -> Result<Vec<&'a T>>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let mut unparsed = 0usize;
    let mut keyed = records
        .into_iter()
        .map(|record| -> Result<(SortKey, &'a T)> {
            let value = accessor(record, def.name);
            let key = SortKey::extract(def, &value)?;
            if key.is_missing() && value.is_date() {
                unparsed += 1;
            }
            Ok((key, record))
        })
        .collect::<Result<Vec<_>>>()?;

    if unparsed > 0 {
        warn!(
            "{} value(s) of date field '{}' are not RFC 3339 and sort as missing",
            unparsed, def.name
        );
    }

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| dir.apply(a.cmp(b)));
    trace!("sorted {} records by {} {}", keyed.len(), def.name, dir);

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
