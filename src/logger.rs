// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging front end: per-call orchestration and scope handles.

use std::error::Error;
use std::sync::Arc;

use crate::error::WriteError;
use crate::gate::LogGate;
use crate::log_record::{EventId, LogRecord};
use crate::scope::{FrameId, ScopeFrame, ScopeIter, current};
use crate::state::StateValue;
use crate::writer::Writer;
use crate::Level;

/// A structured-logging front end bound to one writer.
///
/// The logger does three things per accepted call: filters by severity,
/// captures the calling flow's scope chain, and hands a finished
/// [`LogRecord`] to the writer synchronously. Scope entry and exit go
/// through [`begin_scope`](Logger::begin_scope), which keys the chain to the
/// calling flow so concurrent flows sharing one logger never see each
/// other's scopes.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use scopelog::{EventId, InMemoryWriter, Level, Logger};
///
/// let writer = Arc::new(InMemoryWriter::new());
/// let logger = Logger::new(writer.clone());
///
/// let _request = logger.begin_scope("request 42");
/// logger
///     .log(Level::Info, EventId::from(1), "accepted", None, |state, _| {
///         format!("connection {}", state)
///     })
///     .unwrap();
///
/// let rendered = writer.drain_rendered();
/// assert_eq!(rendered, "INFO 1: connection accepted (in request 42)");
/// ```
#[derive(Debug)]
pub struct Logger {
    writer: Arc<dyn Writer>,
    gate: LogGate,
}

impl Logger {
    /// Creates a logger dispatching to `writer`, with the default gate
    /// (minimum [`Level::Info`], scope tracking requested).
    pub fn new(writer: Arc<dyn Writer>) -> Self {
        Self {
            writer,
            gate: LogGate::default(),
        }
    }

    /// Creates a logger with an explicit minimum level.
    pub fn with_minimum_level(writer: Arc<dyn Writer>, minimum: Level) -> Self {
        Self {
            writer,
            gate: LogGate::new(minimum),
        }
    }

    /// True iff a log call at `level` would reach the writer.
    ///
    /// Callers with expensive state construction can check this first;
    /// message formatting is already deferred and needs no such guard.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.gate.is_enabled(level)
    }

    /// Sets the minimum severity. Affects future calls only.
    pub fn set_minimum_level(&self, minimum: Level) {
        self.gate.set_minimum_level(minimum);
    }

    pub fn minimum_level(&self) -> Level {
        self.gate.minimum_level()
    }

    /// Requests scope tracking on or off.
    ///
    /// Only effective before this logger's first log call or scope begin;
    /// after that the decision is frozen and further sets are silently
    /// ignored.
    pub fn set_include_scopes(&self, include: bool) {
        self.gate.set_include_scopes(include);
    }

    /// Issues a log call.
    ///
    /// Below the gate this returns immediately: no allocation, no scope
    /// read, no formatter run, no writer. Above it, a record carrying the
    /// state, the calling flow's scope chain (if tracking is on), the
    /// optional causing error, and the deferred `formatter` goes to the
    /// writer on this flow. A writer failure comes back unmodified; the core
    /// neither wraps nor retries it.
    pub fn log<S, F>(
        &self,
        level: Level,
        event_id: EventId,
        state: S,
        exception: Option<Arc<dyn Error + Send + Sync>>,
        formatter: F,
    ) -> Result<(), WriteError>
    where
        S: StateValue + 'static,
        F: Fn(&dyn StateValue, Option<&(dyn Error + Send + Sync)>) -> String
            + Send
            + Sync
            + 'static,
    {
        if !self.gate.is_enabled(level) {
            return Ok(());
        }
        let scopes = if self.gate.lock_and_get_include_scopes() {
            current::head()
        } else {
            None
        };
        let record = LogRecord::new(level, event_id, Arc::new(state), exception, scopes, formatter);
        self.writer.write(record)
    }

    /// Enters a scope, making `state` part of every record logged on this
    /// flow until the returned handle ends.
    ///
    /// Locks the include-scopes decision on first use. When scope tracking
    /// is off the returned handle is inert: no frame is allocated and ending
    /// it does nothing.
    ///
    /// The handle ends the scope when [`end`](ScopeHandle::end)ed or
    /// dropped. Handles may end out of nesting order; see
    /// [`ScopeFrame::pop_to`] for the unwinding rule.
    pub fn begin_scope<S>(&self, state: S) -> ScopeHandle
    where
        S: StateValue + 'static,
    {
        if !self.gate.lock_and_get_include_scopes() {
            return ScopeHandle { frame: None };
        }
        let head = current::head();
        let frame = ScopeFrame::push(head.as_ref(), Arc::new(state));
        current::set_head(Some(frame.clone()));
        ScopeHandle { frame: Some(frame) }
    }

    /// The calling flow's open scope states, innermost first.
    ///
    /// Primarily for writers that render scope context and for test
    /// tooling. Locks the include-scopes decision; empty when tracking is
    /// off.
    pub fn current_scopes(&self) -> ScopeIter {
        if !self.gate.lock_and_get_include_scopes() {
            return ScopeFrame::iter(None);
        }
        ScopeFrame::iter(current::head().as_ref())
    }
}

/// An open scope, ended by [`end`](ScopeHandle::end) or by dropping.
///
/// The handle is a capability bound to one frame's identity, not to a stack
/// position: ending it unwinds the calling flow's chain down to and past
/// that frame, wherever it sits. If an enclosing scope already ended out of
/// order the frame may no longer be reachable, in which case the chain
/// unwinds to empty and nothing fails.
#[derive(Debug)]
#[must_use = "dropping the handle ends the scope immediately"]
pub struct ScopeHandle {
    frame: Option<ScopeFrame>,
}

impl ScopeHandle {
    /// Ends the scope.
    ///
    /// Equivalent to dropping the handle; spelled out for call sites where
    /// the end of the scope should be visible.
    pub fn end(self) {
        // Drop does the work.
    }

    /// The frame this handle is bound to; `None` for an inert handle.
    pub fn frame_id(&self) -> Option<FrameId> {
        self.frame.as_ref().map(|f| f.frame_id())
    }
}

impl Drop for ScopeHandle {
    fn drop(&mut self) {
        if let Some(frame) = self.frame.take() {
            let head = ScopeFrame::pop_to(current::head(), frame.frame_id());
            current::set_head(head);
        }
    }
}

/*
Boilerplate notes.

# Logger

Clone is deliberately absent; share with Arc<Logger> so the gate's latch is
one decision per logger instance, not per copy.
PartialEq/Eq/Hash/Ord make no sense for a front end.
Default is absent: a logger without a writer can't exist.

# ScopeHandle

Not Clone: two owners of one frame would pop it twice.
Send is automatic (ScopeFrame is Send); a handle may legitimately end on a
different flow than the one that began it, and the unwind then applies to
the ending flow's chain.
*/
