// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope frames and the chain operations over them.

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::state::State;

pub(crate) static FRAME_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a scope frame.
///
/// A frame's identity, not its position: release is "unwind until this frame
/// is found", which is what makes out-of-order release safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub(crate) u64);

/// Internal frame data.
///
/// Immutable once created; only the per-flow head pointer ever moves.
#[derive(Debug)]
pub(crate) struct FrameInner {
    pub(crate) state: State,
    pub(crate) parent: Option<ScopeFrame>,
    pub(crate) frame_id: u64,
}

/// One node in a scope chain.
///
/// Frames form a singly-linked stack from innermost to outermost. A frame
/// holds its scope's state and a structural link to its parent; the chain is
/// a lineage tree shared read-only by every flow that forked from a common
/// ancestor. Frames are cheap to clone (Arc-based) and thread-safe.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use scopelog::scope::ScopeFrame;
///
/// let outer = ScopeFrame::push(None, Arc::new("outer"));
/// let inner = ScopeFrame::push(Some(&outer), Arc::new("inner"));
///
/// let states: Vec<String> = ScopeFrame::iter(Some(&inner))
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(states, ["inner", "outer"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScopeFrame {
    pub(crate) inner: Arc<FrameInner>,
}

impl PartialEq for ScopeFrame {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ScopeFrame {}

impl Hash for ScopeFrame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl Display for ScopeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.state)
    }
}

impl ScopeFrame {
    /// Allocates a new frame whose parent is `head`.
    ///
    /// The frame does not itself mutate any shared head; the caller installs
    /// it as the new current head (see
    /// [`scope::current`](crate::scope::current)).
    pub fn push(head: Option<&ScopeFrame>, state: State) -> ScopeFrame {
        ScopeFrame {
            inner: Arc::new(FrameInner {
                state,
                parent: head.cloned(),
                frame_id: FRAME_ID.fetch_add(1, Ordering::Relaxed),
            }),
        }
    }

    /// Unwinds `head` down to and past the frame identified by `target`.
    ///
    /// Walks from `head` toward the root and returns the head that should
    /// become current: the parent of `target` if it is found, or `None` if
    /// the chain is exhausted without finding it. Disposal order of
    /// concurrently-held scope handles is not guaranteed by callers, so an
    /// already-released enclosing frame is not an error; the walk simply
    /// passes over whatever is left.
    pub fn pop_to(head: Option<ScopeFrame>, target: FrameId) -> Option<ScopeFrame> {
        let mut current = head;
        while let Some(frame) = current {
            let parent = frame.inner.parent.clone();
            if frame.frame_id() == target {
                return parent;
            }
            current = parent;
        }
        None
    }

    /// Lazy, innermost-first traversal of the chain starting at `head`.
    ///
    /// Each call restarts from `head`; consuming only a prefix costs only
    /// that prefix (one Arc clone per step).
    pub fn iter(head: Option<&ScopeFrame>) -> ScopeIter {
        ScopeIter {
            next: head.cloned(),
        }
    }

    /// The unique identity of this frame.
    #[inline]
    pub fn frame_id(&self) -> FrameId {
        FrameId(self.inner.frame_id)
    }

    /// The scope state held by this frame.
    #[inline]
    pub fn state(&self) -> &State {
        &self.inner.state
    }

    /// The enclosing frame, if any.
    #[inline]
    pub fn parent(&self) -> Option<&ScopeFrame> {
        self.inner.parent.as_ref()
    }

    /// Number of frames from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(parent) = &current.inner.parent {
            depth += 1;
            current = parent;
        }
        depth
    }
}

/// Iterator over the states of a scope chain, innermost first.
///
/// Created by [`ScopeFrame::iter`] and
/// [`Logger::current_scopes`](crate::Logger::current_scopes).
#[derive(Debug, Clone)]
pub struct ScopeIter {
    next: Option<ScopeFrame>,
}

impl Iterator for ScopeIter {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let frame = self.next.take()?;
        self.next = frame.inner.parent.clone();
        Some(frame.inner.state.clone())
    }
}

/*
Boilerplate notes.

# ScopeFrame

Clone is cheap and essential (Arc).
PartialEq/Eq/Hash are provenance-based (Arc pointer), matching how handles
refer to frames: two frames with equal states are still different scopes.
Ord makes no sense.
Display renders the state, since that's what a writer wants from a frame.
Default is not sensible; a frame always carries state.
Send/Sync hold because State is Send + Sync and the chain is immutable.

# FrameId

Plain Copy value type; full derive set minus Ord, which would leak the
allocation order as if it meant something.
*/
