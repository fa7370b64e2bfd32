//! NOT combinator - logical negation of a rule
//!
//! This module provides the [`Not`] combinator which inverts the outcome of
//! a rule - it accepts an input when the inner rule rejects it and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = Not::new(NoWhitespace::new());
//! assert!(rule.validate(&Value::from("has spaces")).is_valid());
//! assert!(!rule.validate(&Value::from("compact")).is_valid());
//! ```

use crate::foundation::{Rule, RuleResult};
use crate::value::Value;

/// Negates a rule.
///
/// The resulting [`RuleResult`] carries exactly one child: the inner rule's
/// result, inverted. Its validity is that inverted child's validity, so
/// nested `Not(Not(..))` chains show a consistent polarity at every level.
///
/// # Type Parameters
///
/// * `R` - The inner rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<R> {
    /// The inner rule to invert.
    pub(crate) inner: R,
}

impl<R> Not<R> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for Not<R>
where
    R: Rule,
{
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        let inverted = self.inner.validate(input).invert();

        RuleResult::new(inverted.is_valid(), input, self).with_children([inverted])
    }
}

/// Creates a `Not` combinator from a rule.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let rule = not(Equals::new("forbidden"));
/// assert!(rule.validate(&Value::from("allowed")).is_valid());
/// assert!(!rule.validate(&Value::from("forbidden")).is_valid());
/// ```
pub fn not<R>(rule: R) -> Not<R> {
    Not::new(rule)
}
