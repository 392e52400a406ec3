//! Rules and their normalization into checks.
//!
//! A [`Rule`] is the caller-facing tagged union of condition forms; a
//! [`Check`] is its normalized shape: one callable plus a stable code for
//! error reporting. Normalization happens once, when the rule is attached
//! to a schema.

use crate::foundation::{Category, SchemaError};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::sync::Arc;

use super::{Interval, Predicate};

/// A shared predicate callable over a value.
pub type RuleFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A caller-supplied condition a value must satisfy, in one of four forms.
///
/// Most forms convert implicitly:
///
/// ```rust
/// use schemaful::prelude::*;
///
/// let _ = Schema::any()
///     .rule(Category::Numeric)          // category tag
///     .rule(Predicate::Positive)        // named predicate
///     .rule(Interval::closed(0.0, 1.0)) // interval
///     .rule(Rule::func(|v| v != &serde_json::Value::Null));
/// ```
#[derive(Clone)]
pub enum Rule {
    /// An arbitrary predicate function; its truthiness is the decision.
    Func(RuleFn),
    /// The value must be a member of the category.
    Is(Category),
    /// The value must satisfy the named predicate.
    Named(Predicate),
    /// The value must be a number lying within the interval.
    Within(Interval),
}

impl Rule {
    /// Creates a rule from a predicate function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Resolves a named-predicate identifier into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownPredicate`] if the identifier is not a
    /// known predicate name.
    pub fn named(name: &str) -> Result<Self, SchemaError> {
        name.parse().map(Self::Named)
    }

    /// Normalizes the rule into its canonical callable form.
    #[must_use]
    pub fn compile(self) -> Check {
        match self {
            Self::Func(test) => Check::new("predicate", test),
            Self::Is(category) => Check::new(
                category.name(),
                Arc::new(move |value: &Value| category.contains(value)),
            ),
            Self::Named(predicate) => Check::new(
                predicate.name(),
                Arc::new(move |value: &Value| predicate.test(value)),
            ),
            Self::Within(interval) => Check::new(
                "interval",
                Arc::new(move |value: &Value| {
                    value.as_f64().is_some_and(|n| interval.contains(n))
                }),
            ),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Func(..)"),
            Self::Is(category) => f.debug_tuple("Is").field(category).finish(),
            Self::Named(predicate) => f.debug_tuple("Named").field(predicate).finish(),
            Self::Within(interval) => f.debug_tuple("Within").field(interval).finish(),
        }
    }
}

impl From<Category> for Rule {
    fn from(category: Category) -> Self {
        Self::Is(category)
    }
}

impl From<Predicate> for Rule {
    fn from(predicate: Predicate) -> Self {
        Self::Named(predicate)
    }
}

impl From<Interval> for Rule {
    fn from(interval: Interval) -> Self {
        Self::Within(interval)
    }
}

impl From<RangeInclusive<f64>> for Rule {
    fn from(range: RangeInclusive<f64>) -> Self {
        Self::Within(range.into())
    }
}

impl From<Range<f64>> for Rule {
    fn from(range: Range<f64>) -> Self {
        Self::Within(range.into())
    }
}

impl From<RangeFrom<f64>> for Rule {
    fn from(range: RangeFrom<f64>) -> Self {
        Self::Within(range.into())
    }
}

impl From<RangeToInclusive<f64>> for Rule {
    fn from(range: RangeToInclusive<f64>) -> Self {
        Self::Within(range.into())
    }
}

impl From<RangeTo<f64>> for Rule {
    fn from(range: RangeTo<f64>) -> Self {
        Self::Within(range.into())
    }
}

impl From<RangeFull> for Rule {
    fn from(range: RangeFull) -> Self {
        Self::Within(range.into())
    }
}

/// A normalized rule: a canonical callable and the code reported when the
/// callable rejects a value.
#[derive(Clone)]
pub struct Check {
    code: Cow<'static, str>,
    test: RuleFn,
}

impl Check {
    fn new(code: impl Into<Cow<'static, str>>, test: RuleFn) -> Self {
        Self {
            code: code.into(),
            test,
        }
    }

    /// Applies the check to a value.
    #[must_use]
    pub fn apply(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    /// The error code this check reports on failure.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn func_rule_uses_truthiness() {
        let check = Rule::func(|v| v.as_str().is_some_and(|s| s.len() > 3)).compile();
        assert!(check.apply(&json!("long enough")));
        assert!(!check.apply(&json!("ab")));
        assert!(!check.apply(&json!(42)));
        assert_eq!(check.code(), "predicate");
    }

    #[test]
    fn category_rule_respects_unified_types() {
        let check = Rule::from(Category::Numeric).compile();
        assert!(check.apply(&json!(1)));
        assert!(check.apply(&json!(1.5)));
        assert!(!check.apply(&json!("1")));
        assert_eq!(check.code(), "numeric");
    }

    #[test]
    fn named_rule_resolves() {
        let check = Rule::named("is-even").unwrap().compile();
        assert!(check.apply(&json!(2)));
        assert!(!check.apply(&json!(1)));
        assert_eq!(check.code(), "even");
    }

    #[test]
    fn named_rule_unknown_fails_at_resolution() {
        assert!(matches!(
            Rule::named("is-prime"),
            Err(SchemaError::UnknownPredicate { .. })
        ));
    }

    #[test]
    fn interval_rule_rejects_non_numbers() {
        let check = Rule::from(0.0..=10.0).compile();
        assert!(check.apply(&json!(5)));
        assert!(!check.apply(&json!(11)));
        assert!(!check.apply(&json!("5")));
        assert_eq!(check.code(), "interval");
    }

    #[test]
    fn debug_does_not_expose_callables() {
        let rule = Rule::func(|_| true);
        assert_eq!(format!("{rule:?}"), "Func(..)");
    }
}
