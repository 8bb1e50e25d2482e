//! Selectors for the style cascade.
//!
//! A [`Selector`] is a compound of up to four independent tests against the
//! element at the current tree position: element type, class, pseudo-class
//! and id. Unset tests match anything. There are no combinators and no
//! specificity; precedence comes only from the origin band a rule is stored in
//! and from declaration order.

#![forbid(unsafe_code)]

mod matcher;

use core::fmt;
use doctree::TagId;
use std::sync::Arc;

/// Predicate over the element at the current tree position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Element type; `None` is the wildcard.
    element: Option<TagId>,
    class: Option<Arc<str>>,
    pseudo: Option<Arc<str>>,
    id: Option<Arc<str>>,
}

impl Selector {
    /// Build a selector from its four optional parts.
    pub fn new(
        element: Option<TagId>,
        class: Option<&str>,
        pseudo: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            element,
            class: class.map(Arc::from),
            pseudo: pseudo.map(Arc::from),
            id: id.map(Arc::from),
        }
    }

    /// Selector that matches every element (`*`).
    pub fn universal() -> Self {
        Self::default()
    }

    /// Type selector for the element named `name`.
    pub fn tag(name: &str) -> Self {
        Self {
            element: Some(TagId::intern(name)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(Arc::from(class));
        self
    }

    #[must_use]
    pub fn with_pseudo(mut self, pseudo: &str) -> Self {
        self.pseudo = Some(Arc::from(pseudo));
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(Arc::from(id));
        self
    }

    #[inline]
    pub const fn element(&self) -> Option<TagId> {
        self.element
    }

    #[inline]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    #[inline]
    pub fn pseudo(&self) -> Option<&str> {
        self.pseudo.as_deref()
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True if no part is set.
    pub const fn is_universal(&self) -> bool {
        self.element.is_none() && self.class.is_none() && self.pseudo.is_none() && self.id.is_none()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return formatter.write_str("*");
        }
        if let Some(element) = self.element {
            write!(formatter, "{element}")?;
        }
        if let Some(class) = self.class() {
            write!(formatter, ".{class}")?;
        }
        if let Some(pseudo) = self.pseudo() {
            write!(formatter, ":{pseudo}")?;
        }
        if let Some(id) = self.id() {
            write!(formatter, "#{id}")?;
        }
        Ok(())
    }
}
