//! # verdict
//!
//! Composable validation rules that report *why* an input was rejected.
//!
//! Validating an input yields a [`RuleResult`](foundation::RuleResult) tree
//! instead of an error: every combinator keeps the results of the rules it
//! evaluated, inverting some of them so the tree reads correctly, and a
//! [`Formatter`](message::Formatter) turns any result into a bounded,
//! human-readable message.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = OneOf::default()
//!     .with(Equals::new("admin"))
//!     .with(NoWhitespace::new().not());
//!
//! let input = Value::from("admin");
//! let result = rule.validate(&input);
//! assert!(result.is_valid());
//!
//! let formatter = Formatter::new(3, 5);
//! assert_eq!(
//!     formatter.message(&result, "{{placeholder}} matched {{valid_count}} of {{total}}"),
//!     r#""admin" matched 1 of 2"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`foundation`]: the [`Rule`](foundation::Rule) contract and results
//! - [`combinators`]: [`Not`](combinators::Not), [`OneOf`](combinators::OneOf),
//!   [`AllOf`](combinators::AllOf), [`AnyOf`](combinators::AnyOf)
//! - [`rules`]: built-in leaf rules
//! - [`factory`]: building rules by name
//! - [`message`]: value rendering and templates
//! - [`value`]: the dynamic [`Value`](value::Value) type

pub mod combinators;
pub mod factory;
pub mod foundation;
pub mod message;
pub mod prelude;
pub mod rules;
pub mod value;
