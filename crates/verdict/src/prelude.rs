//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict::prelude::*;` import that brings in the
//! rule contract, results, values, combinators, built-in rules and the
//! formatter.
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = ScalarVal::new().and(NoWhitespace::new().not().not());
//! assert!(rule.validate(&Value::from("ok")).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits and results
// ============================================================================

pub use crate::foundation::{Rule, RuleExt, RuleRef, RuleResult};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{ErrorValue, Object, Properties, Traversable, Value};

// ============================================================================
// COMBINATORS AND RULES
// ============================================================================

pub use crate::combinators::{AllOf, AnyOf, Not, OneOf, all_of, any_of, not, one_of};
pub use crate::rules::{Callback, Equals, NoWhitespace, ScalarVal};

// ============================================================================
// FACTORY AND MESSAGES
// ============================================================================

pub use crate::factory::{Namespace, ResolveError, RuleFactory};
pub use crate::message::{Formatter, FormatterConfig};
