//! Core validation types and traits.
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`SchemaError`]
//! - **Categories**: [`Category`] — the semantic base types schemas enforce
//!
//! # Architecture
//!
//! Validators are generic over their input type, and compose with logical
//! combinators:
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! let flag = Schema::boolean();
//! let count = Schema::numeric().rule(Predicate::Positive);
//! let either = flag.or(count);
//!
//! assert!(either.validate(&json!(false)).is_ok());
//! assert!(either.validate(&json!(3)).is_ok());
//! assert!(either.validate(&json!(-3)).is_err());
//! ```
//!
//! Errors carry a stable code plus key/value params:
//!
//! ```rust
//! use schemaful::foundation::ValidationError;
//!
//! let error = ValidationError::type_mismatch("boolean", "text");
//! assert_eq!(error.param("expected"), Some("boolean"));
//! ```

pub mod category;
pub mod error;
pub mod traits;

pub use category::Category;
pub use error::{SchemaError, ValidationError};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
