//! crates/logger/src/context.rs
//! Context values carried alongside a message template.

use std::borrow::Cow;
use std::fmt;

/// Value attached to a context key.
///
/// Interpolation substitutes a `{key}` placeholder only when the value has a
/// textual form; [`as_text`](Self::as_text) is that explicit capability
/// check. Composite values, nulls, and opaque handles have none and are
/// skipped, leaving the placeholder literal.
#[derive(Clone, Debug, PartialEq)]
pub enum ContextValue {
    /// Absent value; never substituted.
    Null,
    /// Boolean scalar, rendered as `true`/`false`.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text, substituted verbatim.
    Text(String),
    /// Ordered sequence of values; has no textual form.
    Seq(Vec<ContextValue>),
    /// Nested key/value mapping; has no textual form.
    Map(Vec<(String, ContextValue)>),
    /// Opaque resource handle (open file, socket, ...); never substituted.
    Handle,
}

impl ContextValue {
    /// Captures any displayable value as text.
    ///
    /// This is the hook for caller-defined types that carry their own
    /// string conversion: anything implementing [`fmt::Display`] is
    /// rendered eagerly and substituted like a plain string.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::ContextValue;
    ///
    /// let value = ContextValue::display(std::net::Ipv4Addr::LOCALHOST);
    /// assert_eq!(value, ContextValue::Text("127.0.0.1".to_string()));
    /// ```
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Returns the textual form of the value, if it has one.
    ///
    /// Scalars and text convert; [`Null`](Self::Null), sequences, mappings,
    /// and [`Handle`](Self::Handle) return `None` and are skipped by
    /// interpolation.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Bool(value) => Some(Cow::Owned(value.to_string())),
            Self::Int(value) => Some(Cow::Owned(value.to_string())),
            Self::Float(value) => Some(Cow::Owned(value.to_string())),
            Self::Text(value) => Some(Cow::Borrowed(value)),
            Self::Null | Self::Seq(_) | Self::Map(_) | Self::Handle => None,
        }
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ContextValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Insertion-ordered context mapping for one log call.
///
/// Keys are raw strings; dots and other punctuation are allowed and carry
/// no nesting semantics. Re-inserting an existing key replaces the value in
/// place, keeping the original position.
///
/// # Examples
///
/// ```
/// use console_logger::{ContextValue, LogContext};
///
/// let context = LogContext::new()
///     .with("user", "Bob")
///     .with("attempt", 3)
///     .with("exception", ContextValue::Handle);
///
/// assert_eq!(context.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogContext {
    entries: Vec<(String, ContextValue)>,
}

impl LogContext {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry, consuming and returning the context.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an entry, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}
