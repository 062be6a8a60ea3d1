//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a record.
//! It covers the three field kinds a leaderboard schema can declare: strings,
//! numbers, and timestamps carried as strings.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;

/// Runtime value for comparison, borrowed from the source record.
///
/// This enum represents the value of a field at query execution time.
/// The accessor function provided to the engine returns this type.
///
/// # Example
///
/// ```
/// use leaderboard_query::{Value, Number};
///
/// struct Player {
///     username: String,
///     score: u32,
///     last_active: String,
/// }
///
/// fn accessor<'a>(player: &'a Player, field: &str) -> Value<'a> {
///     match field {
///         "username" => Value::String(&player.username),
///         "score" => Value::Number(Number::from(player.score)),
///         "lastActive" => Value::Date(&player.last_active),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// RFC 3339 timestamp, kept as the raw string.
    Date(&'a str),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Date` value.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the raw date string, if present.
    pub fn as_date(&self) -> Option<&'a str> {
        match self {
            Value::Date(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Date(_) => "date",
            Value::None => "none",
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between different numeric types are handled by converting
/// to the appropriate common type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` if this is a floating point NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Integer and float pairs compare exactly, without rounding the integer
    /// through f64. Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            (Number::I64(a), Number::U64(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (Number::U64(a), Number::I64(b)) => Some(i128::from(a).cmp(&i128::from(b))),

            (Number::I64(a), Number::F64(b)) => compare_int_float(i128::from(a), b),
            (Number::U64(a), Number::F64(b)) => compare_int_float(i128::from(a), b),
            (Number::F64(a), Number::I64(b)) => {
                compare_int_float(i128::from(b), a).map(Ordering::reverse)
            }
            (Number::F64(a), Number::U64(b)) => {
                compare_int_float(i128::from(b), a).map(Ordering::reverse)
            }
        }
    }

    /// Total ordering over numbers: NaN sorts after every other number and
    /// equal to itself.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }
}

// Bounds of the i64/u64 union; every finite f64 between them has an
// integral part that fits in i128 exactly.
const INT_UPPER: f64 = 18_446_744_073_709_551_616.0; // 2^64
const INT_LOWER: f64 = -9_223_372_036_854_775_808.0; // -2^63

fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= INT_UPPER {
        return Some(Ordering::Less);
    }
    if float < INT_LOWER {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => whole.partial_cmp(&float),
        unequal => Some(unequal),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// Date fields are declared and stored as RFC 3339 strings; the sort stage
/// parses them into this type so that offsets and fractional seconds compare
/// chronologically instead of textually.
///
/// # Example
///
/// ```
/// use leaderboard_query::Timestamp;
///
/// let a = Timestamp::parse_rfc3339("2024-01-29T10:00:00Z").unwrap();
/// let b = Timestamp::parse_rfc3339("2024-01-29T11:30:00+02:00").unwrap();
///
/// // 11:30 at +02:00 is 09:30 UTC
/// assert!(b < a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Parses an RFC 3339 / ISO 8601 timestamp such as `2024-05-01T12:00:00.000Z`.
    ///
    /// Returns `None` if the string is not a valid timestamp.
    pub fn parse_rfc3339(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| Timestamp(dt.timestamp_millis()))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }
}
