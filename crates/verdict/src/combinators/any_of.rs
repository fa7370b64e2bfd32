//! ANY-OF combinator - at least one rule must pass

use crate::combinators::evaluate_each;
use crate::foundation::{Rule, RuleExt, RuleRef, RuleResult};
use crate::value::Value;

/// Accepts an input when at least one inner rule accepts it.
///
/// Unlike a short-circuiting OR, every rule is evaluated so the rendered tree
/// shows each alternative. An empty `AnyOf` never validates.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let rule = Equals::new("yes").or(Equals::new("y"));
/// assert!(rule.validate(&Value::from("y")).is_valid());
/// assert!(!rule.validate(&Value::from("no")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnyOf {
    rules: Vec<RuleRef>,
}

impl AnyOf {
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

    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }
}

impl Rule for AnyOf {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        let (children, valid_count) = evaluate_each(&self.rules, input);

        tracing::trace!(valid_count, total = self.rules.len(), "any_of evaluated");

        RuleResult::new(valid_count > 0, input, self)
            .with_property("valid_count", valid_count)
            .with_property("total", self.rules.len())
            .with_children(children)
    }
}

/// Creates an [`AnyOf`] from shared rules.
pub fn any_of<I>(rules: I) -> AnyOf
where
    I: IntoIterator<Item = RuleRef>,
{
    AnyOf::new(rules)
}
