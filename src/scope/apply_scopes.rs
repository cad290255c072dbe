// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope-chain preservation across async boundaries.

use std::future::Future;
use std::pin::Pin;
use std::task::Poll;

use super::current;
use super::frame::ScopeFrame;

/// A [`Future`] wrapper giving a child task its own copy of the scope chain.
///
/// Thread-local state does not follow a future between polls: executors move
/// futures across threads, and sibling tasks interleave on the same thread.
/// `ApplyScopes` carries the chain head in the wrapper itself, so the wrapped
/// future behaves like a forked flow:
///
/// - the child starts from the head that was current when the wrapper was
///   built (the fork point);
/// - scopes the child enters and leaves persist across its own polls;
/// - nothing the child does to the chain is visible to the parent or to
///   sibling tasks, and nothing the parent does after the fork is visible to
///   the child.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use scopelog::scope::{self, ApplyScopes, ScopeFrame};
///
/// # async fn example() {
/// scope::current::set_head(Some(ScopeFrame::push(None, Arc::new("request"))));
///
/// // Forks here: the child will see "request" no matter what the parent
/// // does afterwards.
/// let child = ApplyScopes::new(async {
///     scope::current::head().map(|h| h.state().to_string())
/// });
///
/// scope::current::set_head(None);
/// assert_eq!(child.await.as_deref(), Some("request"));
/// # }
/// ```
///
/// Each poll saves the polling flow's head, installs the wrapper's own head,
/// polls the inner future, then stashes the (possibly mutated) head back in
/// the wrapper and restores the polling flow's head.
#[derive(Debug)]
pub struct ApplyScopes<F> {
    head: Option<ScopeFrame>,
    future: F,
}

impl<F> ApplyScopes<F> {
    /// Wraps `future` with a snapshot of the current head as its fork point.
    pub fn new(future: F) -> Self {
        Self {
            head: current::head(),
            future,
        }
    }

    /// Wraps `future` with an explicit fork point.
    ///
    /// Useful when the snapshot was taken on a different flow than the one
    /// constructing the wrapper.
    pub fn with_head(head: Option<ScopeFrame>, future: F) -> Self {
        Self { head, future }
    }
}

impl<F> Future for ApplyScopes<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        //safety: we never move `future` out of the wrapper
        let this = unsafe { self.get_unchecked_mut() };
        let prior = current::replace_head(this.head.take());
        let r = unsafe { Pin::new_unchecked(&mut this.future) }.poll(cx);
        this.head = current::replace_head(prior);
        r
    }
}
