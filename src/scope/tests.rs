// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the scope module.

use std::sync::Arc;

use super::current;
use super::frame::ScopeFrame;

fn states(head: Option<&ScopeFrame>) -> Vec<String> {
    ScopeFrame::iter(head).map(|s| s.to_string()).collect()
}

#[test]
fn push_links_to_parent() {
    let a = ScopeFrame::push(None, Arc::new("A"));
    let b = ScopeFrame::push(Some(&a), Arc::new("B"));
    let c = ScopeFrame::push(Some(&b), Arc::new("C"));

    assert_eq!(c.parent(), Some(&b));
    assert_eq!(b.parent(), Some(&a));
    assert!(a.parent().is_none());
    assert_eq!(c.depth(), 3);
    assert_eq!(states(Some(&c)), ["C", "B", "A"]);
}

#[test]
fn frame_equality_is_provenance_based() {
    let a = ScopeFrame::push(None, Arc::new("same"));
    let b = ScopeFrame::push(None, Arc::new("same"));

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_ne!(a.frame_id(), b.frame_id());
}

#[test]
fn pop_to_returns_parent_of_target() {
    let a = ScopeFrame::push(None, Arc::new("A"));
    let b = ScopeFrame::push(Some(&a), Arc::new("B"));
    let c = ScopeFrame::push(Some(&b), Arc::new("C"));

    let head = ScopeFrame::pop_to(Some(c), b.frame_id());
    assert_eq!(head.as_ref(), Some(&a));
}

#[test]
fn pop_to_missing_target_exhausts_chain() {
    let a = ScopeFrame::push(None, Arc::new("A"));
    let b = ScopeFrame::push(Some(&a), Arc::new("B"));
    let unrelated = ScopeFrame::push(None, Arc::new("elsewhere"));

    let head = ScopeFrame::pop_to(Some(b), unrelated.frame_id());
    assert!(head.is_none());
}

#[test]
fn pop_to_on_empty_chain_is_a_no_op() {
    let orphan = ScopeFrame::push(None, Arc::new("orphan"));
    assert!(ScopeFrame::pop_to(None, orphan.frame_id()).is_none());
}

#[test]
fn iter_restarts_on_each_call() {
    let a = ScopeFrame::push(None, Arc::new("A"));
    let b = ScopeFrame::push(Some(&a), Arc::new("B"));

    assert_eq!(states(Some(&b)), ["B", "A"]);
    // A second traversal sees the same chain from the top.
    assert_eq!(states(Some(&b)), ["B", "A"]);
    assert!(states(None).is_empty());
}

#[test]
fn sibling_branches_share_ancestors() {
    let root = ScopeFrame::push(None, Arc::new("root"));
    let left = ScopeFrame::push(Some(&root), Arc::new("left"));
    let right = ScopeFrame::push(Some(&root), Arc::new("right"));

    assert_eq!(states(Some(&left)), ["left", "root"]);
    assert_eq!(states(Some(&right)), ["right", "root"]);
    assert_eq!(left.parent(), right.parent());
}

#[test]
fn current_head_starts_empty_and_replaces() {
    // Each test runs on its own thread, so the slot starts fresh.
    assert!(current::head().is_none());

    let a = ScopeFrame::push(None, Arc::new("A"));
    current::set_head(Some(a.clone()));
    assert_eq!(current::head().as_ref(), Some(&a));

    let prior = current::replace_head(None);
    assert_eq!(prior, Some(a));
    assert!(current::head().is_none());
}
