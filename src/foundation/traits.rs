//! Core traits for the validation system.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so the same combinators serve schemas over
/// dynamic values and any other validator alike. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// There is no default `validate` body: a validator that does not define its
/// own conformity check is a compile error, not a runtime one.
///
/// # Examples
///
/// ```rust
/// use schemaful::foundation::{Validate, ValidationError};
/// use serde_json::Value;
///
/// struct NonNull;
///
/// impl Validate for NonNull {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         if input.is_null() {
///             Err(ValidationError::new("non_null", "Value must not be null"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonNull.validate(&Value::from(42)).is_ok());
/// assert!(NonNull.validate(&Value::Null).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` inputs like `str` where borrowing is natural.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`](crate::foundation::ValidationError) if the
    /// value is rejected.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use schemaful::prelude::*;
/// use serde_json::json;
///
/// let either = Schema::boolean().or(Schema::numeric());
/// assert!(either.validate(&json!(true)).is_ok());
/// assert!(either.validate(&json!(1)).is_ok());
/// assert!(either.validate(&json!("no")).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both must pass; short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one must pass; short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::{And, Not, Or};

// ============================================================================
// TESTS
// ============================================================================
