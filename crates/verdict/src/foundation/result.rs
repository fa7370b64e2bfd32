//! Immutable validation outcomes
//!
//! A [`RuleResult`] records whether a rule accepted an input, together with
//! the input itself, the rule that produced it, named properties for message
//! templates, and the results of any rules it delegated to.

use std::sync::Arc;

use crate::foundation::Rule;
use crate::value::{Properties, Value};

/// Outcome of a single [`Rule::validate`] call.
///
/// Results borrow both the input and the rule that produced them; they never
/// own a rule. Properties and children are reference counted so that
/// [`invert`](Self::invert) can share them instead of copying the tree.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
///
/// let rule = ScalarVal::new();
/// let input = Value::from("text");
///
/// let result = rule.validate(&input);
/// assert!(result.is_valid());
///
/// let inverted = result.invert();
/// assert!(!inverted.is_valid());
/// assert!(inverted.is_inverted());
/// assert!(!inverted.invert().is_inverted());
/// ```
#[derive(Debug, Clone)]
pub struct RuleResult<'a> {
    valid: bool,
    input: &'a Value,
    rule: &'a dyn Rule,
    properties: Arc<Properties>,
    children: Arc<[RuleResult<'a>]>,
    inverted: bool,
}

impl<'a> RuleResult<'a> {
    /// Creates a non-inverted result without properties or children.
    pub fn new(valid: bool, input: &'a Value, rule: &'a dyn Rule) -> Self {
        Self {
            valid,
            input,
            rule,
            properties: Arc::default(),
            children: Arc::from(Vec::new()),
            inverted: false,
        }
    }

    /// Replaces the properties.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Arc::new(properties);
        self
    }

    /// Adds (or replaces) a single property.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.properties).insert(key.into(), value.into());
        self
    }

    /// Replaces the children, keeping their order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RuleResult<'a>>,
    {
        self.children = children.into_iter().collect();
        self
    }

    /// Returns a new result with the opposite validity and inversion flag.
    ///
    /// Input, rule, properties and children are shared with `self`; children
    /// are not inverted.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            valid: !self.valid,
            input: self.input,
            rule: self.rule,
            properties: Arc::clone(&self.properties),
            children: Arc::clone(&self.children),
            inverted: !self.inverted,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn input(&self) -> &'a Value {
        self.input
    }

    pub fn rule(&self) -> &'a dyn Rule {
        self.rule
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn children(&self) -> &[RuleResult<'a>] {
        &self.children
    }

    /// Returns `true` if `rule` is the very instance that produced this result.
    pub fn is_produced_by(&self, rule: &dyn Rule) -> bool {
        std::ptr::addr_eq(std::ptr::from_ref(self.rule), std::ptr::from_ref(rule))
    }

    /// Number of results in this tree, including `self`.
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(RuleResult::total_count)
            .sum::<usize>()
    }

    /// Flattens the tree depth-first, starting with `self`.
    #[must_use]
    pub fn flatten(&self) -> Vec<&RuleResult<'a>> {
        let mut results = vec![self];
        for child in self.children.iter() {
            results.extend(child.flatten());
        }
        results
    }
}
