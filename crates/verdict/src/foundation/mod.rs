//! Core validation types and traits
//!
//! This module contains the two building blocks everything else composes:
//!
//! - **[`Rule`]**: the capability `validate(input) -> RuleResult`
//! - **[`RuleResult`]**: the immutable outcome tree
//!
//! # Architecture
//!
//! ## 1. Outcomes are data
//!
//! A rule never returns an error for a bad input. Rejection is a
//! [`RuleResult`] whose [`is_valid`](RuleResult::is_valid) is `false`, so
//! combinators can fold, invert and render outcomes freely.
//!
//! ## 2. Borrowed trees
//!
//! Results borrow the input and the rule that produced them. A combinator's
//! result keeps its children's results, which lets a message renderer walk the
//! whole evaluation afterwards.
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = not(NoWhitespace::new());
//! let input = Value::from("two words");
//! let result = rule.validate(&input);
//!
//! assert!(result.is_valid());
//! assert!(result.children()[0].is_inverted());
//! ```

pub mod result;
pub mod rule;

pub use result::RuleResult;
pub use rule::{Rule, RuleExt, RuleRef};
