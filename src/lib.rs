//! # schemaful
//!
//! Schema type validation for dynamically typed values.
//!
//! A [`Schema`](schema::Schema) pairs a semantic [`Category`](foundation::Category)
//! (any, boolean, numeric, text) with an ordered list of [`Rule`](schema::Rule)s.
//! Validation first runs the schema's conformity hook, then every rule in
//! insertion order, short-circuiting on the first failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! let price = Schema::numeric().rule(Interval::at_least(0.0));
//! assert!(price.validate(&json!(42)).is_ok());
//! assert!(price.validate(&json!(-1)).is_err());
//! assert!(price.validate(&json!("42")).is_err()); // not numeric at all
//! ```
//!
//! ## Rules
//!
//! Rules come in four input forms, all normalized into a single callable
//! check when attached:
//!
//! - [`Rule::func`](schema::Rule::func) — any predicate over a value
//! - a [`Category`](foundation::Category) tag — membership test
//! - a named [`Predicate`](schema::Predicate) — well-known tests like `"is-even"`
//! - an [`Interval`](schema::Interval) — numeric range with inclusive or
//!   exclusive bounds
//!
//! ```rust
//! use schemaful::prelude::*;
//! use serde_json::json;
//!
//! let even = Schema::any().rule(Rule::named("is-even")?);
//! assert!(even.validate(&json!(2)).is_ok());
//! assert!(even.validate(&json!(1)).is_err());
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! ## Composition
//!
//! Every schema implements [`Validate`](foundation::Validate), so schemas
//! compose with `.and()` / `.or()` / `.not()` like any other validator.

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod schema;
