//! Arena-backed document tree that tracks the element currently being styled.

use indextree::{Arena, Node, NodeId};

use crate::{Doctree, DoctreeNode};

/// Stable handle to an element stored in a [`DocumentTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey(NodeId);

/// Document tree built the way a parser walks markup.
///
/// Elements are opened with [`DocumentTree::push`] and closed with
/// [`DocumentTree::pop`]; closed elements stay in the arena. The most recently
/// opened element that is still open is the tree position used for matching.
#[derive(Debug, Default)]
pub struct DocumentTree {
    arena: Arena<DoctreeNode>,
    open: Vec<NodeId>,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `node` as the last child of the current element and make it current.
    pub fn push(&mut self, mut node: DoctreeNode) -> NodeKey {
        node.depth = self.open.len();
        let parent = self.open.last().copied();
        let id = self.arena.new_node(node);
        if let Some(stored) = self.arena.get_mut(id) {
            stored.get_mut().slot = Some(id);
        }
        if let Some(parent) = parent {
            parent.append(id, &mut self.arena);
        }
        self.open.push(id);
        NodeKey(id)
    }

    /// Close the current element; its parent becomes current again.
    pub fn pop(&mut self) -> Option<NodeKey> {
        self.open.pop().map(NodeKey)
    }

    /// Mutable access to the current element, for attributes and pseudo-state
    /// that become known after the element was opened.
    pub fn top_mut(&mut self) -> Option<&mut DoctreeNode> {
        let id = *self.open.last()?;
        self.arena.get_mut(id).map(Node::get_mut)
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn get(&self, key: NodeKey) -> Option<&DoctreeNode> {
        self.arena.get(key.0).map(Node::get)
    }

    /// Children of `key` in document order.
    pub fn children(&self, key: NodeKey) -> impl Iterator<Item = NodeKey> + '_ {
        key.0.children(&self.arena).map(NodeKey)
    }
}

impl Doctree for DocumentTree {
    fn top(&self) -> Option<&DoctreeNode> {
        let id = *self.open.last()?;
        self.arena.get(id).map(Node::get)
    }

    fn parent(&self, node: &DoctreeNode) -> Option<&DoctreeNode> {
        let parent = self.arena.get(node.slot?)?.parent()?;
        self.arena.get(parent).map(Node::get)
    }
}
