//! Dynamic runtime values
//!
//! Rules accept any input and the formatter renders any value, so inputs are
//! carried as a [`Value`]: a closed set of shapes covering scalars, ordered
//! collections, dates, errors and named objects.
//!
//! # Examples
//!
//! ```
//! use verdict::value::{Object, Value};
//!
//! let user = Object::new("User")
//!     .with_field("name", "alice")
//!     .with_field("age", 42);
//!
//! assert!(matches!(Value::from(user), Value::Object(_)));
//! assert!(Value::from(1.5).is_scalar());
//! assert!(!Value::Null.is_scalar());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};
use indexmap::IndexMap;

/// Named data attached to a result and used for message interpolation.
///
/// Lookup is by key; iteration follows insertion order so rendering is
/// deterministic.
pub type Properties = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// Any value a rule can be asked to validate.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number, including infinities and NaN.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A sequential collection; rendered without keys.
    List(Vec<Value>),
    /// A string-keyed collection in insertion order; rendered with keys.
    Map(IndexMap<String, Value>),
    /// A point in time with a fixed UTC offset.
    DateTime(DateTime<FixedOffset>),
    /// An error captured as data.
    Error(ErrorValue),
    /// A named iterable wrapping a list or a map.
    Traversable(Traversable),
    /// A named object with ordered fields.
    Object(Object),
    /// An object that knows how to turn itself into a string.
    Stringable(Arc<dyn fmt::Display + Send + Sync>),
    /// An opaque system handle, identified by its kind (e.g. `stream`).
    Resource(String),
}

impl Value {
    /// Wraps a displayable object.
    pub fn stringable(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Stringable(Arc::new(value))
    }

    /// Creates an opaque resource of the given kind.
    pub fn resource(kind: impl Into<String>) -> Self {
        Self::Resource(kind.into())
    }

    /// Returns `true` for booleans, integers, floats and strings.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short, human-readable name of the value's shape.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::DateTime(_) => "datetime",
            Self::Error(error) => error.type_name(),
            Self::Traversable(traversable) => traversable.type_name(),
            Self::Object(object) => object.type_name(),
            Self::Stringable(_) => "stringable",
            Self::Resource(_) => "resource",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Traversable(t) => f.debug_tuple("Traversable").field(t).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
            Self::Stringable(s) => f
                .debug_tuple("Stringable")
                .field(&format_args!("{s}"))
                .finish(),
            Self::Resource(kind) => f.debug_tuple("Resource").field(kind).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Traversable(a), Self::Traversable(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            // Display objects have no structural identity.
            (Self::Stringable(a), Self::Stringable(b)) => Arc::ptr_eq(a, b),
            (Self::Resource(a), Self::Resource(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// ERROR VALUE
// ============================================================================

/// An error or exception captured as a value, with its source location.
///
/// # Examples
///
/// ```
/// use verdict::value::ErrorValue;
///
/// let error = ErrorValue::new("InvalidState", "connection closed").with_code(7);
/// assert_eq!(error.code(), 7);
/// assert_eq!(error.line(), line!() - 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    type_name: Cow<'static, str>,
    message: String,
    code: i64,
    file: PathBuf,
    line: u32,
}

impl ErrorValue {
    /// Captures an error at the caller's source location.
    #[track_caller]
    pub fn new(type_name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            type_name: type_name.into(),
            message: message.into(),
            code: 0,
            file: PathBuf::from(location.file()),
            line: location.line(),
        }
    }

    /// Captures a Rust error at the caller's source location.
    ///
    /// The type name is the last path segment of `E`, without generic arguments.
    #[track_caller]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let full = std::any::type_name::<E>();
        let path = full.split('<').next().unwrap_or(full);
        let short = path.rsplit("::").next().unwrap_or(path);
        Self::new(short.to_owned(), error.to_string())
    }

    /// Sets the numeric error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Overrides the recorded source location.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, file: impl Into<PathBuf>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

// ============================================================================
// TRAVERSABLE
// ============================================================================

/// A named iterable, materialized as a list or a map.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversable {
    type_name: Cow<'static, str>,
    items: Box<Value>,
}

impl Traversable {
    /// A traversable over sequential items.
    pub fn list<I, T>(type_name: impl Into<Cow<'static, str>>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            type_name: type_name.into(),
            items: Box::new(Value::List(items.into_iter().map(Into::into).collect())),
        }
    }

    /// A traversable over keyed entries.
    pub fn map<I, K, T>(type_name: impl Into<Cow<'static, str>>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Self {
            type_name: type_name.into(),
            items: Box::new(Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            )),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The materialized items; always a [`Value::List`] or [`Value::Map`].
    pub fn items(&self) -> &Value {
        &self.items
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// A generic named object with ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    type_name: Cow<'static, str>,
    fields: IndexMap<String, Value>,
}

impl Object {
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Self::Error(value)
    }
}

impl From<Traversable> for Value {
    fn from(value: Traversable) -> Self {
        Self::Traversable(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
