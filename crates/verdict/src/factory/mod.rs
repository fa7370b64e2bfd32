//! Building rules by name
//!
//! A [`RuleFactory`] maps a rule name plus constructor arguments to a rule
//! instance. It searches an ordered list of [`Namespace`]s and the first
//! namespace that knows the name wins. The built-in namespace is always
//! searched, last unless the caller placed it elsewhere.
//!
//! Combinators and results never go through the factory; it exists for
//! higher-level composition code that only has rule names (configuration,
//! user input).
//!
//! # Examples
//!
//! ```rust
//! use verdict::factory::{Namespace, ResolveError, RuleFactory};
//! use verdict::prelude::*;
//!
//! let factory = RuleFactory::new([Namespace::new("app")]);
//! assert_eq!(factory.namespaces(), ["app", "verdict"]);
//!
//! let rule = factory.rule("equals", &[Value::from(3)])?;
//! assert!(rule.validate(&Value::from(3)).is_valid());
//!
//! assert!(matches!(
//!     factory.rule("missing", &[]),
//!     Err(ResolveError::NotFound { .. })
//! ));
//! # Ok::<(), ResolveError>(())
//! ```

mod error;
mod namespace;

pub use error::ResolveError;
pub use namespace::{Component, DEFAULT_NAMESPACE, Namespace, RuleConstructor};

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::foundation::RuleRef;
use crate::value::Value;

static DEFAULT_FACTORY: LazyLock<ArcSwap<RuleFactory>> =
    LazyLock::new(|| ArcSwap::from_pointee(RuleFactory::default()));

/// Creates rules by name from namespaces searched in priority order.
#[derive(Debug, Clone)]
pub struct RuleFactory {
    namespaces: Vec<Namespace>,
}

impl RuleFactory {
    /// Creates a factory searching `namespaces` in the given order.
    ///
    /// The built-in namespace is appended unless a namespace with the same
    /// name is already present, in which case the caller's position is kept.
    pub fn new<I>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = Namespace>,
    {
        let mut namespaces: Vec<Namespace> = namespaces.into_iter().collect();
        if !namespaces.iter().any(|ns| ns.name() == DEFAULT_NAMESPACE) {
            namespaces.push(Namespace::builtin());
        }
        Self { namespaces }
    }

    /// Names of the searched namespaces, in priority order.
    pub fn namespaces(&self) -> Vec<&str> {
        self.namespaces.iter().map(Namespace::name).collect()
    }

    /// Builds the rule registered as `name`.
    ///
    /// The first character of `name` is upper-cased before lookup, so
    /// `"noWhitespace"` and `"NoWhitespace"` are the same rule.
    pub fn rule(&self, name: &str, arguments: &[Value]) -> Result<RuleRef, ResolveError> {
        let component_name = upper_first(name);

        for namespace in &self.namespaces {
            let Some(component) = namespace.component(&component_name) else {
                continue;
            };

            let qualified = namespace.qualify(&component_name);
            return match *component {
                Component::Rule(constructor) => {
                    tracing::debug!(rule = %qualified, args = arguments.len(), "constructing rule");
                    constructor(arguments)
                }
                Component::Abstract => {
                    tracing::debug!(rule = %qualified, "rule is abstract");
                    Err(ResolveError::NotInstantiable { qualified })
                }
                Component::Foreign { kind } => {
                    tracing::debug!(rule = %qualified, kind, "component is not a rule");
                    Err(ResolveError::InvalidRule { qualified })
                }
            };
        }

        tracing::debug!(rule = name, namespaces = ?self.namespaces(), "rule not found");
        Err(ResolveError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Returns the process-wide factory.
    ///
    /// The same instance is returned until
    /// [`set_default_instance`](Self::set_default_instance) replaces it.
    pub fn default_instance() -> Arc<RuleFactory> {
        DEFAULT_FACTORY.load_full()
    }

    /// Replaces the process-wide factory.
    pub fn set_default_instance(factory: Arc<RuleFactory>) {
        DEFAULT_FACTORY.store(factory);
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new([])
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
