//! Formatter configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for a [`Formatter`](crate::message::Formatter).
///
/// Every key is optional when deserializing; missing keys take the defaults.
///
/// # Examples
///
/// ```rust
/// use verdict::message::FormatterConfig;
///
/// let config: FormatterConfig = serde_json::from_str(r#"{ "max_depth": 2 }"#)?;
/// assert_eq!(config.max_depth, 2);
/// assert_eq!(config.max_children, FormatterConfig::default().max_children);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// How many levels of nested collections are rendered before `...`.
    pub max_depth: usize,
    /// How many entries of a collection are rendered before ` ... `.
    pub max_children: usize,
    /// Base directory that error source paths are shown relative to.
    pub working_dir: Option<PathBuf>,
}

impl FormatterConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 5;
    pub const DEFAULT_MAX_CHILDREN: usize = 10;
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_children: Self::DEFAULT_MAX_CHILDREN,
            working_dir: None,
        }
    }
}
