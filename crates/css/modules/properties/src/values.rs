//! Tagged property values.

use core::fmt;
use std::sync::Arc;

/// Which variant of [`PropertyValue`] a property name expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Str,
}

/// Value of a single property.
///
/// Strings are shared: cloning a value during the cascade never copies the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// Integer or engine-coded quantity (keyword, length, colour, weight).
    Int(i64),
    /// String payload such as a font family list or an image URL.
    Str(Arc<str>),
}

impl PropertyValue {
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Str(_) => ValueKind::Str,
        }
    }

    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(text) => Some(text),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::Str(Arc::from(text))
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        Self::Str(Arc::from(text))
    }
}

impl From<Arc<str>> for PropertyValue {
    fn from(text: Arc<str>) -> Self {
        Self::Str(text)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Str(text) => write!(formatter, "\"{text}\""),
        }
    }
}
