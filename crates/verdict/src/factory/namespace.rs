//! Named tables of rule components

use std::collections::HashMap;
use std::fmt;

use crate::factory::ResolveError;
use crate::foundation::{RuleExt, RuleRef};
use crate::rules::{Equals, NoWhitespace, ScalarVal};
use crate::value::Value;

/// Name of the namespace holding the built-in rules.
pub const DEFAULT_NAMESPACE: &str = "verdict";

/// Builds a rule from positional arguments.
pub type RuleConstructor = fn(&[Value]) -> Result<RuleRef, ResolveError>;

/// An entry registered under a name in a [`Namespace`].
#[derive(Clone, Copy)]
pub enum Component {
    /// A constructible rule.
    Rule(RuleConstructor),
    /// A rule family name with no constructor of its own.
    Abstract,
    /// Something registered alongside rules that is not a rule.
    Foreign { kind: &'static str },
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(_) => f.write_str("Rule(..)"),
            Self::Abstract => f.write_str("Abstract"),
            Self::Foreign { kind } => f.debug_struct("Foreign").field("kind", kind).finish(),
        }
    }
}

/// A named scope the factory searches for rules.
///
/// # Examples
///
/// ```rust
/// use verdict::factory::Namespace;
/// use verdict::prelude::*;
///
/// let app = Namespace::new("app")
///     .with_rule("Blank", |_args| Ok(Equals::new("").shared()))
///     .with_abstract("Composite");
///
/// assert_eq!(app.name(), "app");
/// assert!(app.component("Blank").is_some());
/// assert!(app.component("Missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    components: HashMap<String, Component>,
}

impl Namespace {
    /// Creates an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: HashMap::new(),
        }
    }

    /// The namespace holding the built-in rules.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_NAMESPACE)
            .with_rule("NoWhitespace", |args| {
                ResolveError::expect_arity("NoWhitespace", args, 0)?;
                Ok(NoWhitespace::new().shared())
            })
            .with_rule("ScalarVal", |args| {
                ResolveError::expect_arity("ScalarVal", args, 0)?;
                Ok(ScalarVal::new().shared())
            })
            .with_rule("Equals", |args| {
                ResolveError::expect_arity("Equals", args, 1)?;
                Ok(Equals::new(args[0].clone()).shared())
            })
            .with_abstract("AbstractComposite")
    }

    /// Registers a constructible rule. Overwrites any component with the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, name: impl Into<String>, constructor: RuleConstructor) -> Self {
        self.components.insert(name.into(), Component::Rule(constructor));
        self
    }

    /// Registers a name that cannot be constructed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_abstract(mut self, name: impl Into<String>) -> Self {
        self.components.insert(name.into(), Component::Abstract);
        self
    }

    /// Registers a name that is not a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_foreign(mut self, name: impl Into<String>, kind: &'static str) -> Self {
        self.components.insert(name.into(), Component::Foreign { kind });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Fully qualified display name of a component in this namespace.
    pub fn qualify(&self, component: &str) -> String {
        format!("{}::rules::{component}", self.name)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
