//! NOT combinator, logical negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails, and fails
/// when it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new("not", "Inner validation passed")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] combinator from a validator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn inverts_acceptance() {
        let validator = Schema::boolean().not();
        assert!(validator.validate(&json!("text")).is_ok());
        assert!(validator.validate(&json!(true)).is_err());
    }

    #[test]
    fn double_negation() {
        let validator = not(not(Schema::numeric()));
        assert!(validator.validate(&json!(1)).is_ok());
        assert!(validator.validate(&json!("1")).is_err());
    }
}
