// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-flow current chain head.
//!
//! Each thread owns one mutable slot holding the innermost active
//! [`ScopeFrame`], or `None` for an empty chain. The slot is the only mutable
//! piece of scope state; frames themselves are immutable and shared
//! read-only. A fresh thread starts with an empty chain.
//!
//! Get and set are O(1) and never block. Flows that want a child to inherit
//! the chain snapshot the head before the fork and install it inside the
//! child:
//!
//! ```rust
//! use std::sync::Arc;
//! use scopelog::scope::{self, ScopeFrame};
//!
//! scope::current::set_head(Some(ScopeFrame::push(None, Arc::new("job 7"))));
//!
//! let snapshot = scope::current::head();
//! std::thread::spawn(move || {
//!     scope::current::set_head(snapshot);
//!     // this thread now sees "job 7"; its own pushes stay local to it
//! })
//! .join()
//! .unwrap();
//! ```
//!
//! For async flows, [`ApplyScopes`](crate::scope::ApplyScopes) does the
//! snapshot-and-install dance around every poll.

use std::cell::Cell;

use super::frame::ScopeFrame;

thread_local! {
    static HEAD: Cell<Option<ScopeFrame>> = const { Cell::new(None) };
}

/// Returns this flow's current chain head, or `None` for an empty chain.
#[inline]
pub fn head() -> Option<ScopeFrame> {
    HEAD.with(|cell| {
        //safety: we never hand out a mutable reference to the cell's interior
        unsafe { &*cell.as_ptr() }.clone()
    })
}

/// Installs `head` as this flow's current chain head.
#[inline]
pub fn set_head(head: Option<ScopeFrame>) {
    HEAD.with(|cell| cell.set(head));
}

/// Installs `head` and returns the previous head.
#[inline]
pub fn replace_head(head: Option<ScopeFrame>) -> Option<ScopeFrame> {
    HEAD.with(|cell| cell.replace(head))
}
