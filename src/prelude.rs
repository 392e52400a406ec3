//! Prelude module for convenient imports.
//!
//! A single `use schemaful::prelude::*;` brings in the traits, the schema
//! types, and the combinators.
//!
//! # Examples
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! let flag = Schema::boolean();
//! assert!(flag.validate(&json!(true)).is_ok());
//! assert!(flag.validate(&json!("true")).is_err());
//! ```

pub use crate::foundation::{
    Category, SchemaError, Validate, ValidateExt, ValidationError, ValidationResult,
};

pub use crate::schema::{Check, Conformity, Interval, Predicate, Rule, RuleFn, Schema};

pub use crate::combinators::{And, Not, Or, and, not, or};
