// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-flow scope chains.
//!
//! A scope is a nested context value associated with a span of log calls.
//! Open scopes form a chain: an immutable, singly-linked stack of
//! [`ScopeFrame`]s, one chain per logical execution flow, read innermost
//! first. This module owns the chain itself; [`Logger`](crate::Logger) owns
//! the policy of when frames are created (see
//! [`Logger::begin_scope`](crate::Logger::begin_scope)).
//!
//! # Pieces
//!
//! - [`ScopeFrame`]: one node, holding a state value, a parent link, and an
//!   identity.
//!   Push allocates; release unwinds by identity, so handles released out of
//!   nesting order never fail.
//! - [`current`]: the one mutable slot per flow holding the innermost active
//!   frame (the chain head).
//! - [`ApplyScopes`]: a [`Future`](std::future::Future) wrapper that forks
//!   the chain for a child task, with copy-on-fork semantics.
//!
//! # The chain is a lineage tree
//!
//! Pushing never mutates existing frames, so flows forked from a common
//! ancestor share the ancestor's frames read-only while extending their own
//! branches. Following parent links always terminates: frames are created
//! only by pushing onto the chain that was current at creation time, so
//! cycles cannot be formed.
//!
//! ```rust
//! use std::sync::Arc;
//! use scopelog::scope::{self, ScopeFrame};
//!
//! let outer = ScopeFrame::push(None, Arc::new("session"));
//! scope::current::set_head(Some(outer.clone()));
//!
//! let inner = ScopeFrame::push(scope::current::head().as_ref(), Arc::new("request"));
//! scope::current::set_head(Some(inner.clone()));
//!
//! // Innermost first.
//! let states: Vec<String> = ScopeFrame::iter(scope::current::head().as_ref())
//!     .map(|s| s.to_string())
//!     .collect();
//! assert_eq!(states, ["request", "session"]);
//!
//! // Release by identity, tolerant of ordering.
//! let head = ScopeFrame::pop_to(scope::current::head(), outer.frame_id());
//! scope::current::set_head(head);
//! assert!(scope::current::head().is_none());
//! ```

mod apply_scopes;
pub mod current;
mod frame;

#[cfg(test)]
mod tests;

pub use apply_scopes::ApplyScopes;
pub use frame::{FrameId, ScopeFrame, ScopeIter};
