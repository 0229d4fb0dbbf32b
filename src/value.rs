//! Dynamic value representation for TOML key-values.
//!
//! This module provides the [`Value`] enum, the closed union of the six value
//! kinds the builder can render, and [`ValueKind`], the discriminant used by
//! the array-homogeneity check.
//!
//! There is deliberately no map or table variant: TOML tables are keygroups,
//! opened on the builder with [`TomlBuilder::add_group`], not values.
//!
//! ## Creating Values
//!
//! ```rust
//! use toml_builder::Value;
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let flag = Value::from(true);
//! let ports = Value::from(vec![8001, 8002]);
//! ```
//!
//! ## Type Checking
//!
//! ```rust
//! use toml_builder::{Value, ValueKind};
//!
//! let value = Value::from(42);
//! assert!(value.is_integer());
//! assert_eq!(value.kind(), ValueKind::Integer);
//! ```
//!
//! [`TomlBuilder::add_group`]: crate::TomlBuilder::add_group

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Timestamps render in full "Zulu" form, UTC at second precision.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A dynamically-typed representation of any value the builder can render.
///
/// # Examples
///
/// ```rust
/// use toml_builder::Value;
///
/// let value = Value::from(vec!["a", "b"]);
/// assert!(value.is_array());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(DateTime<Utc>),
}

/// The kind tag of a [`Value`], used to compare array elements pairwise.
///
/// Two arrays always compare equal at this level regardless of their inner
/// element kinds: `Array` is a single tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Array,
    Integer,
    Float,
    Boolean,
    Datetime,
}

impl ValueKind {
    /// Returns the lowercase name of this kind, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::ValueKind;
    ///
    /// assert_eq!(ValueKind::Integer.as_str(), "integer");
    /// assert_eq!(ValueKind::Datetime.as_str(), "datetime");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind tag of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from(1).kind(), ValueKind::Integer);
    /// assert_eq!(Value::from(1.5).kind(), ValueKind::Float);
    /// ```
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Datetime(_) => ValueKind::Datetime,
        }
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` if the value is a timestamp.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(self, Value::Datetime(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_builder::Value;
    ///
    /// assert_eq!(Value::from(42).as_integer(), Some(42));
    /// assert_eq!(Value::from(1.5).as_integer(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a timestamp, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Datetime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Datetime(dt) => {
                serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
            }
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Datetime(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}
