//! Minimal document-tree interface consulted by the style cascade.
//!
//! The cascade never walks a real DOM. It asks a [`Doctree`] for the element
//! currently being styled and, through [`Doctree::parent`], for the chain of
//! open ancestors above it.

#![forbid(unsafe_code)]

mod arena;
mod tags;

pub use arena::{DocumentTree, NodeKey};
pub use tags::TagId;

use indextree::NodeId;
use smallvec::SmallVec;
use std::sync::Arc;

/// One element as seen by selector matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctreeNode {
    /// Number of open ancestors above this element (the root has depth 0).
    depth: usize,
    /// Interned element type.
    element: TagId,
    /// Whitespace-separated tokens of the `class` attribute.
    classes: SmallVec<Arc<str>, 4>,
    /// Active pseudo-state (`link`, `visited`, `hover`, ...), decided by the tree owner.
    pseudo: Option<Arc<str>>,
    /// Value of the `id` attribute.
    id: Option<Arc<str>>,
    /// Arena slot, set once the node is stored in a [`DocumentTree`].
    slot: Option<NodeId>,
}

impl DoctreeNode {
    /// Create a node for an element without class, id or pseudo-state.
    pub fn new(element: TagId) -> Self {
        Self {
            depth: 0,
            element,
            classes: SmallVec::new(),
            pseudo: None,
            id: None,
            slot: None,
        }
    }

    /// Create a node for the element named `tag`.
    pub fn for_tag(tag: &str) -> Self {
        Self::new(TagId::intern(tag))
    }

    #[must_use]
    pub fn with_class_attribute(mut self, value: &str) -> Self {
        self.set_class_attribute(value);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(Arc::from(id));
        self
    }

    #[must_use]
    pub fn with_pseudo(mut self, pseudo: &str) -> Self {
        self.pseudo = Some(Arc::from(pseudo));
        self
    }

    /// Replace the class token set with the tokens of a raw `class` attribute value.
    pub fn set_class_attribute(&mut self, value: &str) {
        self.classes = value
            .split_ascii_whitespace()
            .map(Arc::<str>::from)
            .collect();
    }

    pub fn set_id(&mut self, id: Option<&str>) {
        self.id = id.map(Arc::from);
    }

    /// Set or clear the active pseudo-state, e.g. when a link becomes visited.
    pub fn set_pseudo(&mut self, pseudo: Option<&str>) {
        self.pseudo = pseudo.map(Arc::from);
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn element(&self) -> TagId {
        self.element
    }

    #[inline]
    pub fn classes(&self) -> &[Arc<str>] {
        &self.classes
    }

    /// Return true if the class token set contains `class_name` (ASCII case-insensitive).
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes
            .iter()
            .any(|token| token.eq_ignore_ascii_case(class_name))
    }

    #[inline]
    pub fn pseudo(&self) -> Option<&str> {
        self.pseudo.as_deref()
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Traversal state against which selectors are evaluated.
pub trait Doctree {
    /// The element currently being styled, or `None` before the first element is opened.
    fn top(&self) -> Option<&DoctreeNode>;

    /// Parent of `node`, or `None` for the root element.
    fn parent(&self, node: &DoctreeNode) -> Option<&DoctreeNode>;
}

/// Iterator over the current element followed by each of its ancestors.
pub struct Ancestors<'tree> {
    tree: &'tree dyn Doctree,
    next: Option<&'tree DoctreeNode>,
}

impl<'tree> Ancestors<'tree> {
    pub fn new(tree: &'tree dyn Doctree) -> Self {
        Self {
            tree,
            next: tree.top(),
        }
    }
}

impl<'tree> Iterator for Ancestors<'tree> {
    type Item = &'tree DoctreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
