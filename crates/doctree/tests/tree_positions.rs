#![cfg(test)]

use doctree::{Ancestors, Doctree, DoctreeNode, DocumentTree, TagId};

/// Build `<html><body><div class="warn" id="main"><a>` with every element left open.
fn open_chain() -> DocumentTree {
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("html"));
    tree.push(DoctreeNode::for_tag("body"));
    tree.push(
        DoctreeNode::for_tag("div")
            .with_class_attribute("warn")
            .with_id("main"),
    );
    tree.push(DoctreeNode::for_tag("a").with_pseudo("link"));
    tree
}

#[test]
fn top_is_last_opened_element() {
    let tree = open_chain();
    let top = tree.top();
    assert_eq!(top.map(DoctreeNode::element), Some(TagId::intern("a")));
    assert_eq!(top.and_then(DoctreeNode::pseudo), Some("link"));
    assert_eq!(top.map(DoctreeNode::depth), Some(3));
}

#[test]
fn ancestors_walk_to_root() {
    let tree = open_chain();
    let names: Vec<&str> = Ancestors::new(&tree)
        .map(|node| node.element().name())
        .collect();
    assert_eq!(names, ["a", "div", "body", "html"]);
}

#[test]
fn pop_restores_parent_as_current() {
    let mut tree = open_chain();
    assert!(tree.pop().is_some());
    let top = tree.top();
    assert_eq!(top.and_then(DoctreeNode::id), Some("main"));
    assert!(top.is_some_and(|node| node.has_class("warn")));
    assert_eq!(tree.depth(), 3);
}

#[test]
fn closed_siblings_stay_in_the_arena() {
    let mut tree = DocumentTree::new();
    let list = tree.push(DoctreeNode::for_tag("ul"));
    tree.push(DoctreeNode::for_tag("li"));
    tree.pop();
    tree.push(DoctreeNode::for_tag("li"));
    tree.pop();

    assert_eq!(tree.children(list).count(), 2);
    assert_eq!(
        tree.top().map(DoctreeNode::element),
        Some(TagId::intern("ul"))
    );
}

#[test]
fn empty_tree_has_no_position() {
    let mut tree = DocumentTree::new();
    assert!(tree.top().is_none());
    assert!(tree.top_mut().is_none());
    assert!(tree.pop().is_none());
    assert_eq!(Ancestors::new(&tree).count(), 0);
}

#[test]
fn pseudo_state_can_change_after_open() {
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("a").with_pseudo("link"));
    if let Some(node) = tree.top_mut() {
        node.set_pseudo(Some("visited"));
    }
    assert_eq!(tree.top().and_then(DoctreeNode::pseudo), Some("visited"));
}
