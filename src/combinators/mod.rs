//! Logical combinators for composing validators.
//!
//! Combinators are usually reached through
//! [`ValidateExt`](crate::foundation::ValidateExt) rather than constructed
//! directly:
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! let positive_number = Schema::numeric().and(Schema::any().rule(Predicate::Positive));
//! assert!(positive_number.validate(&json!(3)).is_ok());
//! assert!(positive_number.validate(&json!(-3)).is_err());
//! ```

mod and;
mod not;
mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
