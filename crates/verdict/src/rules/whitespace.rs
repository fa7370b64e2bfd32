//! Whitespace check

use crate::foundation::{Rule, RuleResult};
use crate::rules::ScalarVal;
use crate::value::Value;

/// Validates that a value contains no whitespace (spaces, tabs, line breaks).
///
/// `null` passes. Non-scalar inputs fail, and the result carries the failed
/// [`ScalarVal`] result as its only child. Scalars other than strings cannot
/// contain whitespace and always pass.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let rule = NoWhitespace::new();
/// assert!(rule.validate(&Value::from("compact")).is_valid());
/// assert!(!rule.validate(&Value::from("tab\there")).is_valid());
/// assert!(rule.validate(&Value::Null).is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoWhitespace {
    scalar: ScalarVal,
}

impl NoWhitespace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for NoWhitespace {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        if input.is_null() {
            return RuleResult::new(true, input, self);
        }

        let scalar = self.scalar.validate(input);
        if !scalar.is_valid() {
            return RuleResult::new(false, input, self).with_children([scalar]);
        }

        let valid = input
            .as_str()
            .is_none_or(|s| !s.chars().any(char::is_whitespace));
        RuleResult::new(valid, input, self)
    }
}
