//! Equality check

use crate::foundation::{Rule, RuleResult};
use crate::value::Value;

/// Validates that the input equals a fixed value.
///
/// The expected value is exposed to message templates as `compare_to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    compare_to: Value,
}

impl Equals {
    pub fn new(compare_to: impl Into<Value>) -> Self {
        Self {
            compare_to: compare_to.into(),
        }
    }

    pub fn compare_to(&self) -> &Value {
        &self.compare_to
    }
}

impl Rule for Equals {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        RuleResult::new(*input == self.compare_to, input, self)
            .with_property("compare_to", self.compare_to.clone())
    }
}
