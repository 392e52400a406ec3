//! Schemas: value validators built from a category, a conformity hook, and
//! an ordered list of rules.
//!
//! A [`Schema`] decides, for a single value, whether it satisfies a
//! structural base-type conformity check and a conjunction of attached
//! rules. The named constructors ([`Schema::boolean`], [`Schema::numeric`],
//! [`Schema::string`]) are preconfigured categories, not a type hierarchy;
//! they share the validate/add-rule protocol unchanged.
//!
//! # Examples
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! // The wildcard schema accepts every value until rules say otherwise.
//! let any = Schema::any();
//! assert!(any.validate(&json!("any value, literally")).is_ok());
//!
//! // Rules restrict it.
//! let even = Schema::any().rule(Predicate::Even);
//! assert!(even.validate(&json!(2)).is_ok());
//! assert!(even.validate(&json!(1)).is_err());
//!
//! // Specializations gate on their category first.
//! let text = Schema::string();
//! assert!(text.validate(&json!("42")).is_ok());
//! assert!(text.validate(&json!(42)).is_err());
//! ```

mod interval;
mod predicate;
mod rule;

pub use interval::Interval;
pub use predicate::Predicate;
pub use rule::{Check, Rule, RuleFn};

use crate::foundation::{Category, Validate, ValidationError, ValidationResult};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The base conformity check a schema runs before any attached rules.
///
/// The two historical behaviors of the wildcard validator are explicit
/// configuration here; for [`Category::Any`] they accept the same values,
/// but a schema built for a narrower category behaves differently under
/// each.
#[derive(Clone, Default)]
pub enum Conformity {
    /// The value must be a member of the schema's category (the default,
    /// and the behavior of the named specializations).
    #[default]
    TypeGated,
    /// Every value conforms; gating is left to explicit rules.
    Open,
    /// A custom per-schema check, replacing the category test entirely.
    Hook(RuleFn),
}

impl fmt::Debug for Conformity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeGated => f.write_str("TypeGated"),
            Self::Open => f.write_str("Open"),
            Self::Hook(_) => f.write_str("Hook(..)"),
        }
    }
}

/// A value validator: a category, a conformity hook, and ordered rules.
///
/// `validate` runs the conformity hook first, then every rule check in
/// insertion order, failing on the first rejection. A schema holds no
/// per-call state: validating is a pure read, safe to repeat and to share
/// across threads once rule attachment is done.
#[derive(Debug, Clone)]
pub struct Schema {
    category: Category,
    conformity: Conformity,
    checks: Vec<Check>,
}

impl Schema {
    /// Creates a type-gated schema for a category, with no rules attached.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            conformity: Conformity::default(),
            checks: Vec::new(),
        }
    }

    /// The wildcard schema; accepts every value.
    #[must_use]
    pub fn any() -> Self {
        Self::new(Category::Any)
    }

    /// A schema accepting both truth values.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(Category::Boolean)
    }

    /// A schema accepting integer and floating-point values.
    #[must_use]
    pub fn numeric() -> Self {
        Self::new(Category::Numeric)
    }

    /// A schema accepting text values.
    #[must_use]
    pub fn string() -> Self {
        Self::new(Category::Text)
    }

    /// Replaces the conformity configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_conformity(mut self, conformity: Conformity) -> Self {
        self.conformity = conformity;
        self
    }

    /// Overrides the conformity check with a custom hook.
    ///
    /// The hook replaces the category test; attached rules still run
    /// afterwards in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schemaful::prelude::*;
    /// use serde_json::json;
    ///
    /// let integer = Schema::numeric().with_hook(|v| v.as_i64().is_some() || v.as_u64().is_some());
    /// assert!(integer.validate(&json!(42)).is_ok());
    /// assert!(integer.validate(&json!(42.0)).is_err());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn with_hook<F>(self, hook: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with_conformity(Conformity::Hook(Arc::new(hook)))
    }

    /// Attaches a rule, normalizing it into a check (builder form).
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.add_rule(rule);
        self
    }

    /// Attaches every rule from an iterator, preserving order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        for rule in rules {
            self.add_rule(rule);
        }
        self
    }

    /// Appends a rule to an existing schema.
    ///
    /// Checks are only ever appended, never removed; callers must not add
    /// rules while validations are outstanding on the same instance.
    pub fn add_rule(&mut self, rule: impl Into<Rule>) -> &mut Self {
        self.checks.push(rule.into().compile());
        self
    }

    /// The category this schema enforces.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The normalized checks, in insertion (and evaluation) order.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    fn conforms(&self, value: &Value) -> bool {
        match &self.conformity {
            Conformity::TypeGated => self.category.contains(value),
            Conformity::Open => true,
            Conformity::Hook(hook) => hook(value),
        }
    }

    /// Checks whether a value is valid.
    ///
    /// Runs the conformity hook, then each check in insertion order,
    /// returning on the first rejection. A normal return means the value is
    /// accepted; this is a pass/fail gate, not a coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] with code `type_mismatch` (type-gated
    /// hook), `conformity` (custom hook), or the failing check's code.
    pub fn validate(&self, value: &Value) -> ValidationResult<()> {
        if !self.conforms(value) {
            return Err(match self.conformity {
                Conformity::Hook(_) => ValidationError::conformity(),
                _ => ValidationError::type_mismatch(
                    self.category.name(),
                    Category::describe(value),
                ),
            });
        }
        for check in &self.checks {
            if !check.apply(value) {
                return Err(ValidationError::new(
                    check.code().to_owned(),
                    format!("Value failed `{}` check", check.code()),
                ));
            }
        }
        Ok(())
    }
}

impl Validate for Schema {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        Schema::validate(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn any_accepts_everything_by_default() {
        let schema = Schema::any();
        for value in [json!(null), json!(true), json!(42), json!("42"), json!([1])] {
            assert!(schema.validate(&value).is_ok(), "rejected {value}");
        }
    }

    #[test]
    fn rules_evaluate_in_insertion_order() {
        // Second rule never runs when the first rejects.
        let schema = Schema::any()
            .rule(Category::Numeric)
            .rule(Predicate::Even);
        let error = schema.validate(&json!("two")).unwrap_err();
        assert_eq!(error.code, "numeric");

        let error = schema.validate(&json!(3)).unwrap_err();
        assert_eq!(error.code, "even");
    }

    #[test]
    fn add_rule_appends_after_construction() {
        let mut schema = Schema::numeric();
        assert!(schema.validate(&json!(-1)).is_ok());

        schema.add_rule(Interval::at_least(0.0));
        assert_eq!(schema.checks().len(), 1);
        assert!(schema.validate(&json!(-1)).is_err());
        assert!(schema.validate(&json!(1)).is_ok());
    }

    #[test]
    fn with_rules_preserves_order() {
        let schema = Schema::any().with_rules([
            Rule::from(Category::Numeric),
            Rule::from(Predicate::Positive),
        ]);
        assert_eq!(schema.checks().len(), 2);
        assert_eq!(schema.validate(&json!("x")).unwrap_err().code, "numeric");
        assert_eq!(schema.validate(&json!(-1)).unwrap_err().code, "positive");
    }

    #[test]
    fn open_conformity_skips_the_gate() {
        let schema = Schema::numeric().with_conformity(Conformity::Open);
        assert!(schema.validate(&json!("not a number")).is_ok());
    }

    #[test]
    fn open_conformity_still_runs_rules() {
        let schema = Schema::numeric()
            .with_conformity(Conformity::Open)
            .rule(Category::Numeric);
        assert!(schema.validate(&json!(1)).is_ok());
        assert!(schema.validate(&json!("1")).is_err());
    }

    #[test]
    fn hook_error_has_conformity_code() {
        let schema = Schema::any().with_hook(|v| v.is_i64());
        let error = schema.validate(&json!(1.5)).unwrap_err();
        assert_eq!(error.code, "conformity");
    }

    #[test]
    fn type_mismatch_reports_both_sides() {
        let error = Schema::boolean().validate(&json!("true")).unwrap_err();
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.param("expected"), Some("boolean"));
        assert_eq!(error.param("actual"), Some("text"));
    }

    #[test]
    fn cloned_schemas_evolve_independently() {
        let base = Schema::numeric();
        let restricted = base.clone().rule(Interval::at_least(0.0));
        assert!(base.validate(&json!(-1)).is_ok());
        assert!(restricted.validate(&json!(-1)).is_err());
    }

    #[test]
    fn schema_is_shareable_across_threads() {
        let schema = std::sync::Arc::new(Schema::numeric().rule(Predicate::Even));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let schema = std::sync::Arc::clone(&schema);
                std::thread::spawn(move || schema.validate(&json!(i * 2)).is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok_and(|ok| ok));
        }
    }

    #[test]
    fn debug_output_is_bounded() {
        let schema = Schema::numeric().rule(Rule::func(|_| true));
        let rendered = format!("{schema:?}");
        assert!(rendered.contains("Numeric"));
        assert!(rendered.contains("Check"));
    }
}
