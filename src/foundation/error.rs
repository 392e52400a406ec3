//! Error types for validation failures.
//!
//! [`ValidationError`] is the single failure signal of `validate`: it means
//! "this value was rejected", with a stable code and a few key/value params
//! for diagnostics. Validation short-circuits on the first failure, so one
//! error is always one failed check.
//!
//! String fields use `Cow<'static, str>` for zero allocation in the common
//! case of static codes and messages.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Ordered key/value pairs attached to an error (typically 0-2 entries).
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A validation failure.
///
/// # Examples
///
/// ```rust
/// use schemaful::foundation::ValidationError;
///
/// let error = ValidationError::new("even", "Value failed `even` check")
///     .with_param("actual", "3");
/// assert_eq!(error.code, "even");
/// assert_eq!(error.param("actual"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "type_mismatch", "interval", "even"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Parameters for the message, as ordered key/value pairs.
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "type_mismatch" error.
    ///
    /// Returned when a value is not a member of the category a type-gated
    /// schema enforces.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "conformity" error for a custom hook rejection.
    pub fn conformity() -> Self {
        Self::new("conformity", "Value rejected by conformity hook")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Crate-level error taxonomy.
///
/// `Validation` is the runtime rejection of a value; `UnknownPredicate` is a
/// construction-time failure resolving a named predicate identifier, so a
/// bad name can never surface as a spurious value rejection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// A value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A named predicate identifier did not resolve to a known test.
    #[error("unknown predicate `{name}`")]
    UnknownPredicate {
        /// The identifier as supplied by the caller.
        name: String,
    },
}
