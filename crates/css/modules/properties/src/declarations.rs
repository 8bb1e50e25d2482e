//! Properties and the ordered, name-unique property list.

use core::fmt;
use core::slice::Iter;
use smallvec::SmallVec;
use std::sync::Arc;

use crate::{PropertyName, PropertyValue, ValueKind};

/// A single style attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: PropertyName,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: PropertyName, value: impl Into<PropertyValue>) -> Self {
        let value = value.into();
        debug_assert_eq!(
            value.kind(),
            name.value_kind(),
            "value kind does not match property `{name}`"
        );
        Self { name, value }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.name, self.value)
    }
}

/// Ordered list of properties holding at most one entry per name.
///
/// Rules share their list through an `Arc<PropertyList>` and never mutate it;
/// the cascade only ever writes into the caller's output list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyList {
    props: SmallVec<Property, 8>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an existing entry in place or appending a new one.
    pub fn set(&mut self, name: PropertyName, value: impl Into<PropertyValue>) {
        let value = value.into();
        debug_assert_eq!(
            value.kind(),
            name.value_kind(),
            "value kind does not match property `{name}`"
        );
        if let Some(existing) = self.props.iter_mut().find(|prop| prop.name == name) {
            existing.value = value;
        } else {
            self.props.push(Property { name, value });
        }
    }

    /// Merge `other` on top of this list; entries of `other` win on conflicting names.
    pub fn apply(&mut self, other: &Self) {
        for prop in other {
            self.set(prop.name, prop.value.clone());
        }
    }

    pub fn get(&self, name: PropertyName) -> Option<&PropertyValue> {
        self.props
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| &prop.value)
    }

    /// Integer value of `name`. `name` must be integer-valued.
    pub fn get_int(&self, name: PropertyName) -> Option<i64> {
        debug_assert_eq!(name.value_kind(), ValueKind::Int, "`{name}` is not integer-valued");
        self.get(name).and_then(PropertyValue::as_int)
    }

    /// String value of `name`. `name` must be string-valued.
    pub fn get_str(&self, name: PropertyName) -> Option<&str> {
        debug_assert_eq!(name.value_kind(), ValueKind::Str, "`{name}` is not string-valued");
        self.get(name).and_then(PropertyValue::as_str)
    }

    pub fn contains(&self, name: PropertyName) -> bool {
        self.props.iter().any(|prop| prop.name == name)
    }

    pub fn iter(&self) -> Iter<'_, Property> {
        self.props.iter()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Wrap the list for sharing between rules.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<'list> IntoIterator for &'list PropertyList {
    type Item = &'list Property;
    type IntoIter = Iter<'list, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<PropertyValue>> Extend<(PropertyName, V)> for PropertyList {
    fn extend<I: IntoIterator<Item = (PropertyName, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<V: Into<PropertyValue>> FromIterator<(PropertyName, V)> for PropertyList {
    fn from_iter<I: IntoIterator<Item = (PropertyName, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for PropertyList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for prop in self {
            write!(formatter, " {prop};")?;
        }
        formatter.write_str(" }")
    }
}
