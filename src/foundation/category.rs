//! Semantic value categories.
//!
//! A [`Category`] is the base type a schema enforces. Categories unify the
//! runtime representations a caller thinks of as one type: both truth values
//! form one boolean category, and integers and floats form one numeric
//! category.

use serde_json::Value;
use std::fmt;

/// The semantic class of values a schema is primarily responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The wildcard category; every value is a member.
    Any,
    /// Both truth values.
    Boolean,
    /// Integer and floating-point values.
    Numeric,
    /// Text values.
    Text,
}

impl Category {
    /// Returns the category name, used as an error param and rule code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }

    /// Checks whether a value is a member of this category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schemaful::foundation::Category;
    /// use serde_json::json;
    ///
    /// assert!(Category::Numeric.contains(&json!(42)));
    /// assert!(Category::Numeric.contains(&json!(42.5)));
    /// assert!(!Category::Numeric.contains(&json!("42")));
    /// ```
    #[must_use]
    pub fn contains(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Boolean => value.is_boolean(),
            Self::Numeric => value.is_number(),
            Self::Text => value.is_string(),
        }
    }

    /// Describes a value's runtime type for error reporting.
    #[must_use]
    pub fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "numeric",
            Value::String(_) => "text",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn any_contains_everything() {
        for value in [json!(null), json!(true), json!(1), json!("x"), json!([])] {
            assert!(Category::Any.contains(&value));
        }
    }

    #[test]
    fn boolean_unifies_both_truth_values() {
        assert!(Category::Boolean.contains(&json!(true)));
        assert!(Category::Boolean.contains(&json!(false)));
        assert!(!Category::Boolean.contains(&json!(null)));
        assert!(!Category::Boolean.contains(&json!("true")));
    }

    #[test]
    fn numeric_unifies_integers_and_floats() {
        assert!(Category::Numeric.contains(&json!(42)));
        assert!(Category::Numeric.contains(&json!(-42)));
        assert!(Category::Numeric.contains(&json!(42.5)));
        assert!(!Category::Numeric.contains(&json!("42")));
    }

    #[test]
    fn text_rejects_numbers() {
        assert!(Category::Text.contains(&json!("42")));
        assert!(!Category::Text.contains(&json!(42)));
    }

    #[test]
    fn describe_covers_all_kinds() {
        assert_eq!(Category::describe(&json!(null)), "null");
        assert_eq!(Category::describe(&json!(true)), "boolean");
        assert_eq!(Category::describe(&json!(1.5)), "numeric");
        assert_eq!(Category::describe(&json!("x")), "text");
        assert_eq!(Category::describe(&json!({})), "object");
        assert_eq!(Category::describe(&json!([])), "array");
    }
}
