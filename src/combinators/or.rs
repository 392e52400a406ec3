//! OR combinator, logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass. If the first passes, the second is not
/// evaluated. If both fail, an `or` error reports both failing codes as
/// params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(right_error) = self.right.validate(input) else {
            return Ok(());
        };
        Err(ValidationError::new("or", "No alternative matched")
            .with_param("left", left_error.code)
            .with_param("right", right_error.code))
    }
}

/// Creates an [`Or`] combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn left_passes() {
        let validator = Schema::boolean().or(Schema::numeric());
        assert!(validator.validate(&json!(true)).is_ok());
    }

    #[test]
    fn right_passes() {
        let validator = Schema::boolean().or(Schema::numeric());
        assert!(validator.validate(&json!(1)).is_ok());
    }

    #[test]
    fn both_fail() {
        let validator = Schema::boolean().or(Schema::numeric());
        let error = validator.validate(&json!("nope")).unwrap_err();
        assert_eq!(error.code, "or");
        assert_eq!(error.param("left"), Some("type_mismatch"));
        assert_eq!(error.param("right"), Some("type_mismatch"));
    }
}
