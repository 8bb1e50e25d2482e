//! Matching a [`Selector`] against a tree position.

use doctree::{Doctree, DoctreeNode};

use crate::Selector;

impl Selector {
    /// Match against the element at the current position of `tree`.
    ///
    /// A tree without a current element matches nothing.
    pub fn matches(&self, tree: &dyn Doctree) -> bool {
        tree.top().is_some_and(|node| self.matches_node(node))
    }

    /// Match against a single element. Every set part must match; unset parts
    /// match vacuously.
    pub fn matches_node(&self, node: &DoctreeNode) -> bool {
        if self
            .element
            .is_some_and(|element| element != node.element())
        {
            return false;
        }
        if self
            .class()
            .is_some_and(|class| !node.has_class(class))
        {
            return false;
        }
        part_matches(self.pseudo(), node.pseudo()) && part_matches(self.id(), node.id())
    }
}

/// An unset `wanted` part matches anything. A set one needs an equal value,
/// compared ASCII case-insensitively.
fn part_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|expected| {
        actual.is_some_and(|value| value.eq_ignore_ascii_case(expected))
    })
}
