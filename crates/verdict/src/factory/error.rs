//! Errors raised while building rules by name

use crate::value::Value;

/// Failure to produce a rule from a name.
///
/// These are composition-time errors; they never come out of
/// [`Rule::validate`](crate::foundation::Rule::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// No namespace registers the name.
    #[error("Could not find \"{name}\" rule")]
    NotFound { name: String },

    /// The name resolves to a component that is not a rule.
    #[error("\"{qualified}\" is not a valid rule")]
    InvalidRule { qualified: String },

    /// The name resolves to a rule family that cannot be constructed.
    #[error("\"{qualified}\" is not instantiable")]
    NotInstantiable { qualified: String },

    /// The rule's constructor rejected the arguments.
    #[error("Invalid arguments for \"{rule}\": {reason}")]
    InvalidArguments { rule: String, reason: String },
}

impl ResolveError {
    pub fn invalid_arguments(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Checks that exactly `expected` arguments were supplied.
    pub fn expect_arity(rule: &str, arguments: &[Value], expected: usize) -> Result<(), Self> {
        if arguments.len() == expected {
            Ok(())
        } else {
            Err(Self::invalid_arguments(
                rule,
                format!("expected {expected} argument(s), got {}", arguments.len()),
            ))
        }
    }
}
