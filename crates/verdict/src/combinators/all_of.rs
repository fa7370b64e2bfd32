//! ALL-OF combinator - every rule must pass

use crate::combinators::evaluate_each;
use crate::foundation::{Rule, RuleExt, RuleRef, RuleResult};
use crate::value::Value;

/// Accepts an input when every inner rule accepts it.
///
/// All rules are evaluated so the result tree lists every failure, not just
/// the first. Children are stored as produced. An empty `AllOf` is vacuously
/// valid.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let rule = ScalarVal::new().and(NoWhitespace::new());
/// assert!(rule.validate(&Value::from("compact")).is_valid());
///
/// let input = Value::from("two words");
/// let result = rule.validate(&input);
/// assert!(!result.is_valid());
/// assert_eq!(result.property("valid_count"), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllOf {
    rules: Vec<RuleRef>,
}

impl AllOf {
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

impl Rule for AllOf {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        let (children, valid_count) = evaluate_each(&self.rules, input);

        tracing::trace!(valid_count, total = self.rules.len(), "all_of evaluated");

        RuleResult::new(valid_count == self.rules.len(), input, self)
            .with_property("valid_count", valid_count)
            .with_property("total", self.rules.len())
            .with_children(children)
    }
}

/// Creates an [`AllOf`] from shared rules.
pub fn all_of<I>(rules: I) -> AllOf
where
    I: IntoIterator<Item = RuleRef>,
{
    AllOf::new(rules)
}
