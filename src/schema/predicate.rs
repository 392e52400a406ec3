//! Named predicates.
//!
//! A [`Predicate`] is a well-known single-argument test resolvable from a
//! string identifier, covering the practical zero-argument queries on a
//! dynamic value's own type. A predicate applied to a value of the wrong
//! kind is simply false (an odd check on a string fails the value, it does
//! not panic).

use crate::foundation::SchemaError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A well-known single-argument test on a value.
///
/// Parses from its kebab-case name, with an optional `is-` prefix:
///
/// ```rust
/// use schemaful::schema::Predicate;
///
/// assert_eq!("is-even".parse::<Predicate>().unwrap(), Predicate::Even);
/// assert_eq!("even".parse::<Predicate>().unwrap(), Predicate::Even);
/// assert!("is-fancy".parse::<Predicate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// An even integer.
    Even,
    /// An odd integer.
    Odd,
    /// A number strictly greater than zero.
    Positive,
    /// A number strictly less than zero.
    Negative,
    /// The number zero.
    Zero,
    /// A number other than zero.
    NonZero,
    /// A number with an integer representation.
    Integer,
    /// A finite number.
    Finite,
    /// The null value.
    Null,
    /// An empty text, array, or object.
    Empty,
    /// A non-empty text, array, or object.
    NonEmpty,
    /// A text consisting of ASCII characters only.
    Ascii,
    /// A text with no uppercase characters.
    Lowercase,
    /// A text with no lowercase characters.
    Uppercase,
    /// A non-empty text of alphanumeric characters only.
    Alphanumeric,
}

impl Predicate {
    /// Returns the canonical kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::NonZero => "non-zero",
            Self::Integer => "integer",
            Self::Finite => "finite",
            Self::Null => "null",
            Self::Empty => "empty",
            Self::NonEmpty => "non-empty",
            Self::Ascii => "ascii",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Alphanumeric => "alphanumeric",
        }
    }

    /// Applies the test to a value.
    #[must_use]
    pub fn test(self, value: &Value) -> bool {
        match self {
            Self::Even => parity(value) == Some(Parity::Even),
            Self::Odd => parity(value) == Some(Parity::Odd),
            Self::Positive => value.as_f64().is_some_and(|n| n > 0.0),
            Self::Negative => value.as_f64().is_some_and(|n| n < 0.0),
            Self::Zero => value.as_f64().is_some_and(|n| n == 0.0),
            Self::NonZero => value.as_f64().is_some_and(|n| n != 0.0),
            Self::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
            Self::Finite => value.as_f64().is_some_and(f64::is_finite),
            Self::Null => value.is_null(),
            Self::Empty => size(value).is_some_and(|n| n == 0),
            Self::NonEmpty => size(value).is_some_and(|n| n > 0),
            Self::Ascii => value.as_str().is_some_and(str::is_ascii),
            Self::Lowercase => value
                .as_str()
                .is_some_and(|s| !s.chars().any(char::is_uppercase)),
            Self::Uppercase => value
                .as_str()
                .is_some_and(|s| !s.chars().any(char::is_lowercase)),
            Self::Alphanumeric => value
                .as_str()
                .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphanumeric)),
        }
    }
}

#[derive(PartialEq)]
enum Parity {
    Even,
    Odd,
}

/// Parity of an integer-valued number. Floats have none, even when round.
fn parity(value: &Value) -> Option<Parity> {
    let even = if let Some(n) = value.as_i64() {
        n % 2 == 0
    } else {
        value.as_u64()? % 2 == 0
    };
    Some(if even { Parity::Even } else { Parity::Odd })
}

/// Element count of a container-like value.
fn size(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        Value::Object(m) => Some(m.len()),
        _ => None,
    }
}

impl FromStr for Predicate {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("is-").unwrap_or(s);
        match name {
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "zero" => Ok(Self::Zero),
            "non-zero" | "nonzero" => Ok(Self::NonZero),
            "integer" => Ok(Self::Integer),
            "finite" => Ok(Self::Finite),
            "null" => Ok(Self::Null),
            "empty" => Ok(Self::Empty),
            "non-empty" | "nonempty" => Ok(Self::NonEmpty),
            "ascii" => Ok(Self::Ascii),
            "lowercase" => Ok(Self::Lowercase),
            "uppercase" => Ok(Self::Uppercase),
            "alphanumeric" => Ok(Self::Alphanumeric),
            _ => Err(SchemaError::UnknownPredicate { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
