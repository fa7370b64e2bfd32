//! Rule combinators
//!
//! Combinators are rules built from other rules. They evaluate their children
//! and fold the child results into a new [`RuleResult`], inverting individual
//! children where that makes the rendered tree read correctly.
//!
//! - [`Not`] - passes when its single child fails
//! - [`OneOf`] - passes when exactly one child passes
//! - [`AllOf`] - passes when every child passes
//! - [`AnyOf`] - passes when at least one child passes
//!
//! None of them short-circuit: the full picture is needed for messages.

pub mod all_of;
pub mod any_of;
pub mod not;
pub mod one_of;

pub use all_of::{AllOf, all_of};
pub use any_of::{AnyOf, any_of};
pub use not::{Not, not};
pub use one_of::{OneOf, one_of};

use crate::foundation::{Rule, RuleRef, RuleResult};
use crate::value::Value;

/// Evaluates every rule in order, returning the results and how many passed.
fn evaluate_each<'a>(rules: &'a [RuleRef], input: &'a Value) -> (Vec<RuleResult<'a>>, usize) {
    let children: Vec<_> = rules.iter().map(|rule| rule.validate(input)).collect();
    let valid_count = children.iter().filter(|child| child.is_valid()).count();
    (children, valid_count)
}
