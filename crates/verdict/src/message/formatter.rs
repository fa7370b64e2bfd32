//! Bounded value rendering and template interpolation
//!
//! The [`Formatter`] turns any [`Value`] into a deterministic, size-limited
//! string and substitutes `{{name}}` tokens in message templates.
//!
//! # Rendering rules
//!
//! | Value | Rendering |
//! |---|---|
//! | traversable | `` `[traversable] (Type: { .. })` `` |
//! | date/time | `"2017-03-05T15:20:05+00:00"` |
//! | error | `` `[exception] (Type: { "message": .., "code": .., "file": "path:line" })` `` |
//! | stringable | its string form, as a string |
//! | object | `` `[object] (Type: { "field": .. })` `` |
//! | list / map | `{ 1, 2 }` / `{ "key": 1 }`, `{ }` when empty |
//! | float | `1.0`, `` `INF` ``, `` `-INF` ``, `` `NaN` `` |
//! | resource | `` `[resource] (kind)` `` |
//! | bool | `` `true` `` |
//! | null / int / string | JSON literal |
//!
//! Backticks are only added at the top level; nested values are left bare.
//! Collections deeper than `max_depth` render as `...` and collections longer
//! than `max_children` are cut with ` ... `. Object fields do not count as a
//! level of depth; collection nesting does.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::SecondsFormat;
use regex::{Captures, Regex};

use crate::foundation::RuleResult;
use crate::message::FormatterConfig;
use crate::value::{ErrorValue, Properties, Value};

/// Property name that defaults to the rendered input.
pub const PLACEHOLDER: &str = "placeholder";

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Renders values and interpolates message templates.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
///
/// let formatter = Formatter::new(3, 5);
///
/// assert_eq!(formatter.normalize(&Value::from(vec![1, 2, 3])), "{ 1, 2, 3 }");
/// assert_eq!(
///     formatter.create(&Value::from("a b"), &Properties::new(), "{{placeholder}} has spaces"),
///     r#""a b" has spaces"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    max_depth: usize,
    max_children: usize,
    working_dir: Option<PathBuf>,
}

impl Formatter {
    /// Creates a formatter with the given depth and breadth limits.
    pub fn new(max_depth: usize, max_children: usize) -> Self {
        Self {
            max_depth,
            max_children,
            working_dir: None,
        }
    }

    /// Creates a formatter from configuration.
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_children: config.max_children,
            working_dir: config.working_dir.clone(),
        }
    }

    /// Shows error source paths relative to `dir`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_children(&self) -> usize {
        self.max_children
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Interpolates `properties` into `template`.
    ///
    /// `{{placeholder}}` defaults to the rendered `input` unless `properties`
    /// supplies it. A string `placeholder` is inserted verbatim; every other
    /// value is rendered with [`normalize`](Self::normalize), strings
    /// included. Unknown tokens are left untouched.
    pub fn create(&self, input: &Value, properties: &Properties, template: &str) -> String {
        let default_placeholder = (!properties.contains_key(PLACEHOLDER))
            .then(|| Value::String(self.normalize(input)));

        TOKEN
            .replace_all(template, |caps: &Captures<'_>| {
                let name = &caps[1];
                let value = match properties.get(name) {
                    Some(value) => Some(value),
                    None if name == PLACEHOLDER => default_placeholder.as_ref(),
                    None => None,
                };

                match value {
                    None => caps[0].to_owned(),
                    Some(Value::String(verbatim)) if name == PLACEHOLDER => verbatim.clone(),
                    Some(value) => self.normalize(value),
                }
            })
            .into_owned()
    }

    /// Renders a message for `result` from its input and properties.
    pub fn message(&self, result: &RuleResult<'_>, template: &str) -> String {
        self.create(result.input(), result.properties(), template)
    }

    /// Renders `value` as a bounded string.
    pub fn normalize(&self, value: &Value) -> String {
        self.normalize_at(value, 0)
    }

    fn normalize_at(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Traversable(traversable) => quote_code(
                format!(
                    "[traversable] ({}: {})",
                    traversable.type_name(),
                    self.normalize_at(traversable.items(), depth + 1)
                ),
                depth,
            ),
            Value::DateTime(datetime) => {
                format!("\"{}\"", datetime.to_rfc3339_opts(SecondsFormat::Secs, false))
            }
            Value::Error(error) => quote_code(self.normalize_error(error, depth + 1), depth),
            Value::Stringable(stringable) => {
                self.normalize_at(&Value::String(stringable.to_string()), depth + 1)
            }
            Value::Object(object) => {
                let fields = object.fields();
                // Fields stay at the object's own depth.
                let rendered = self.normalize_entries(
                    fields.iter().map(|(k, v)| (Some(k.as_str()), v)),
                    depth,
                );
                quote_code(format!("[object] ({}: {rendered})", object.type_name()), depth)
            }
            Value::List(items) => self.normalize_entries(items.iter().map(|v| (None, v)), depth),
            Value::Map(entries) => {
                self.normalize_entries(entries.iter().map(|(k, v)| (Some(k.as_str()), v)), depth)
            }
            Value::Float(float) => normalize_float(*float, depth),
            Value::Resource(kind) => quote_code(format!("[resource] ({kind})"), depth),
            Value::Bool(b) => quote_code(b.to_string(), depth),
            Value::Null => "null".to_owned(),
            Value::Int(int) => int.to_string(),
            Value::String(string) => json_string(string),
        }
    }

    fn normalize_entries<'v, I>(&self, entries: I, depth: usize) -> String
    where
        I: ExactSizeIterator<Item = (Option<&'v str>, &'v Value)>,
    {
        if depth >= self.max_depth {
            return "...".to_owned();
        }

        let total = entries.len();
        if total == 0 {
            return "{ }".to_owned();
        }

        let mut rendered = String::new();
        for (index, (key, value)) in entries.enumerate() {
            if index >= self.max_children {
                rendered.push_str(" ... ");
                break;
            }

            if let Some(key) = key {
                rendered.push_str(&json_string(key));
                rendered.push_str(": ");
            }
            rendered.push_str(&self.normalize_at(value, depth + 1));

            if index + 1 != total {
                rendered.push_str(", ");
            }
        }

        format!("{{ {rendered} }}")
    }

    fn normalize_error(&self, error: &ErrorValue, depth: usize) -> String {
        let message = Value::from(error.message());
        let code = Value::Int(error.code());
        let file = Value::String(format!(
            "{}:{}",
            self.relative_path(error.file()).display(),
            error.line()
        ));

        let properties = [
            (Some("message"), &message),
            (Some("code"), &code),
            (Some("file"), &file),
        ];
        format!(
            "[exception] ({}: {})",
            error.type_name(),
            self.normalize_entries(properties.into_iter(), depth)
        )
    }

    fn relative_path<'p>(&self, path: &'p Path) -> &'p Path {
        match &self.working_dir {
            Some(dir) => path.strip_prefix(dir).unwrap_or(path),
            None => path,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_config(&FormatterConfig::default())
    }
}

fn quote_code(rendered: String, depth: usize) -> String {
    if depth == 0 {
        format!("`{rendered}`")
    } else {
        rendered
    }
}

fn normalize_float(float: f64, depth: usize) -> String {
    if float.is_infinite() {
        let literal = if float > 0.0 { "INF" } else { "-INF" };
        return quote_code(literal.to_owned(), depth);
    }

    if float.is_nan() {
        return quote_code("NaN".to_owned(), depth);
    }

    // `{:?}` round-trips but drops the decimal point in exponent form.
    let literal = format!("{float:?}");
    if literal.contains('.') {
        return literal;
    }
    match literal.find('e') {
        Some(exponent) => format!("{}.0{}", &literal[..exponent], &literal[exponent..]),
        None => format!("{literal}.0"),
    }
}

fn json_string(string: &str) -> String {
    serde_json::Value::String(string.to_owned()).to_string()
}
