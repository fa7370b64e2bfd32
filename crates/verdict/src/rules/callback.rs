//! Closure-backed rule

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Rule, RuleResult};
use crate::value::Value;

/// Wraps a predicate closure as a rule.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let even = Callback::new("even", |input| matches!(input, Value::Int(n) if n % 2 == 0));
/// assert!(even.validate(&Value::from(4)).is_valid());
/// assert!(!even.validate(&Value::from(5)).is_valid());
/// ```
#[derive(Clone)]
pub struct Callback {
    name: Cow<'static, str>,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Callback {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Rule for Callback {
    fn validate<'a>(&'a self, input: &'a Value) -> RuleResult<'a> {
        RuleResult::new((self.predicate)(input), input, self)
    }
}
