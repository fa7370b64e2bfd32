//! ONE-OF combinator - exactly one rule must pass
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = OneOf::new([Equals::new(1).shared(), Equals::new(2).shared()]);
//! assert!(rule.validate(&Value::from(1)).is_valid());
//! assert!(!rule.validate(&Value::from(3)).is_valid());
//! ```

use crate::foundation::{Rule, RuleExt, RuleRef, RuleResult};
use crate::value::Value;

/// Accepts an input when exactly one inner rule accepts it.
///
/// Every inner rule is evaluated, in order, with no short-circuit. The first
/// passing child result is kept as is; every later passing child result is
/// inverted before it is stored, so a rendered tree shows the extra matches as
/// conflicts. The first match stays valid even when a later one makes the
/// whole `OneOf` invalid.
///
/// An empty `OneOf` never validates.
///
/// The result carries two properties: `valid_count` and `total`.
#[derive(Debug, Clone, Default)]
pub struct OneOf {
    rules: Vec<RuleRef>,
}

impl OneOf {
    /// Creates a `OneOf` from shared rules, keeping their order.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = RuleRef>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends another rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(rule.shared());
        self
    }

    /// Returns the inner rules in evaluation order.
    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }
}

impl Rule for OneOf {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        let mut valid_count = 0usize;
        let mut children = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let child = rule.validate(input);
            if !child.is_valid() {
                children.push(child);
                continue;
            }

            valid_count += 1;
            if valid_count > 1 {
                children.push(child.invert());
            } else {
                children.push(child);
            }
        }

        tracing::trace!(valid_count, total = self.rules.len(), "one_of evaluated");

        RuleResult::new(valid_count == 1, input, self)
            .with_property("valid_count", valid_count)
            .with_property("total", self.rules.len())
            .with_children(children)
    }
}

/// Creates a [`OneOf`] from shared rules.
pub fn one_of<I>(rules: I) -> OneOf
where
    I: IntoIterator<Item = RuleRef>,
{
    OneOf::new(rules)
}
