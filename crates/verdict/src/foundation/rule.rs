//! The rule contract
//!
//! Every leaf predicate and every combinator implements [`Rule`]. A rule never
//! fails on bad input: rejection is reported as an invalid [`RuleResult`].

use std::fmt;
use std::sync::Arc;

use crate::combinators::{AllOf, AnyOf, Not};
use crate::foundation::RuleResult;
use crate::value::Value;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A capability that evaluates an input and produces a [`RuleResult`].
///
/// Rules are immutable once built and may be shared between combinators and
/// threads.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
///
/// #[derive(Debug)]
/// struct Positive;
///
/// impl Rule for Positive {
///     fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
///         let valid = matches!(input, Value::Int(n) if *n > 0);
///         RuleResult::new(valid, input, self)
///     }
/// }
///
/// assert!(Positive.validate(&Value::from(3)).is_valid());
/// assert!(!Positive.validate(&Value::from(-3)).is_valid());
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Evaluates `input`.
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a>;
}

/// Shared handle to a rule, used when one rule instance is reused.
pub type RuleRef = Arc<dyn Rule>;

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        (**self).validate(input)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        (**self).validate(input)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        (**self).validate(input)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every sized rule.
///
/// # Examples
///
/// ```
/// use verdict::prelude::*;
///
/// let rule = NoWhitespace::new().not();
/// assert!(rule.validate(&Value::from("a b")).is_valid());
/// assert!(!rule.validate(&Value::from("ab")).is_valid());
/// ```
pub trait RuleExt: Rule + Sized {
    /// Negates this rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Requires both this rule and `other`.
    fn and<R>(self, other: R) -> AllOf
    where
        Self: 'static,
        R: Rule + 'static,
    {
        AllOf::new([self.shared(), other.shared()])
    }

    /// Requires at least one of this rule and `other`.
    fn or<R>(self, other: R) -> AnyOf
    where
        Self: 'static,
        R: Rule + 'static,
    {
        AnyOf::new([self.shared(), other.shared()])
    }

    /// Moves this rule behind a shared [`RuleRef`].
    fn shared(self) -> RuleRef
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Rule> RuleExt for T {}
