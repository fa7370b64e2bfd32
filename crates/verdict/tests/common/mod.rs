//! Shared test rules.

#![allow(dead_code)]

use verdict::prelude::*;

/// A rule with a fixed outcome and fixed properties.
#[derive(Debug, Clone, Default)]
pub struct Stub {
    pub valid: bool,
    pub properties: Properties,
}

impl Stub {
    pub fn passing() -> Self {
        Self {
            valid: true,
            properties: Properties::new(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_owned(), value.into());
        self
    }
}

impl Rule for Stub {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        RuleResult::new(self.valid, input, self).with_properties(self.properties.clone())
    }
}

/// Builds results with a fixed outcome for `count` fresh stub evaluations.
pub fn results_of<'a>(rule: &'a Stub, input: &'a Value, count: usize) -> Vec<RuleResult<'a>> {
    (0..count).map(|_| rule.validate(input)).collect()
}
