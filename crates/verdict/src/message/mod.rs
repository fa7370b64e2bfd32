//! Human-readable messages
//!
//! Rendering a failure message is a two-step process: a rule produces a
//! [`RuleResult`](crate::foundation::RuleResult), then a [`Formatter`] fills a
//! template with the result's input and properties.
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let rule = Equals::new(10);
//! let input = Value::from(7);
//! let result = rule.validate(&input);
//!
//! let formatter = Formatter::default();
//! assert_eq!(
//!     formatter.message(&result, "{{placeholder}} must be equal to {{compare_to}}"),
//!     "7 must be equal to 10"
//! );
//! ```

pub mod config;
pub mod formatter;

pub use config::FormatterConfig;
pub use formatter::{Formatter, PLACEHOLDER};
