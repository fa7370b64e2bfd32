//! Scalar type check

use crate::foundation::{Rule, RuleResult};
use crate::value::Value;

/// Validates that the input is a boolean, integer, float or string.
///
/// `null` is not a scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarVal;

impl ScalarVal {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScalarVal {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        RuleResult::new(input.is_scalar(), input, self)
    }
}
