// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the scopelog front end.
//!
//! This module defines [`LogRecord`], the fully-formed entry handed to a
//! [`Writer`](crate::Writer), plus the small types it carries: [`EventId`]
//! and the internal lazily-rendered message.
//!
//! # Design Philosophy
//!
//! A record is built once per accepted log call and consumed exactly once by
//! the writer. Two costs are deferred past construction:
//!
//! - the message: formatting runs only if the writer asks for the text, and
//!   at most once; writers that filter further or buffer raw state never
//!   pay it;
//! - the scope sequence: the record holds the captured chain head, and
//!   [`LogRecord::scopes`] walks it lazily, innermost first, allocating
//!   nothing beyond the prefix the writer actually reads.

use std::error::Error;
use std::fmt::{Debug, Display};
use std::sync::{Arc, OnceLock};

use crate::Level;
use crate::scope::{ScopeFrame, ScopeIter};
use crate::state::State;

/// Identifies the event being logged.
///
/// A numeric id, optionally paired with a stable name. Display prefers the
/// name when one is present.
///
/// ```rust
/// use scopelog::EventId;
///
/// const CACHE_MISS: EventId = EventId::new(12, "cache_miss");
/// assert_eq!(CACHE_MISS.to_string(), "cache_miss");
/// assert_eq!(EventId::from(12).to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventId {
    id: u64,
    name: Option<&'static str>,
}

impl EventId {
    pub const fn new(id: u64, name: &'static str) -> Self {
        Self {
            id,
            name: Some(name),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self { id, name: None }
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A message rendered on demand, at most once.
struct LazyMessage {
    format: Box<dyn Fn() -> String + Send + Sync>,
    rendered: OnceLock<String>,
}

impl LazyMessage {
    fn get(&self) -> &str {
        self.rendered.get_or_init(|| (self.format)())
    }
}

impl Debug for LazyMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug must not force the formatting cost.
        match self.rendered.get() {
            Some(rendered) => write!(f, "LazyMessage({:?})", rendered),
            None => f.write_str("LazyMessage(<unrendered>)"),
        }
    }
}

/// A fully-formed log entry.
///
/// Carries severity, event identity, the opaque state value, the captured
/// scope chain (empty if scope tracking was disabled or no scopes were
/// open), an optional causing error, and the deferred message.
///
/// Records are immutable once built. The core hands each record to the
/// writer synchronously on the calling flow; whatever the writer does with
/// it is out of the core's hands.
#[derive(Debug)]
pub struct LogRecord {
    level: Level,
    event_id: EventId,
    state: State,
    scopes: Option<ScopeFrame>,
    exception: Option<Arc<dyn Error + Send + Sync>>,
    message: LazyMessage,
}

impl LogRecord {
    /// Assembles a record.
    ///
    /// `scopes` is the chain head captured at the log call, or `None` when
    /// scope tracking is off. `formatter` receives the state and the
    /// exception and runs only when [`message`](LogRecord::message) is first
    /// called.
    pub fn new<F>(
        level: Level,
        event_id: EventId,
        state: State,
        exception: Option<Arc<dyn Error + Send + Sync>>,
        scopes: Option<ScopeFrame>,
        formatter: F,
    ) -> Self
    where
        F: Fn(&dyn crate::StateValue, Option<&(dyn Error + Send + Sync)>) -> String
            + Send
            + Sync
            + 'static,
    {
        let message_state = state.clone();
        let message_exception = exception.clone();
        Self {
            level,
            event_id,
            state,
            scopes,
            exception,
            message: LazyMessage {
                format: Box::new(move || {
                    formatter(message_state.as_ref(), message_exception.as_deref())
                }),
                rendered: OnceLock::new(),
            },
        }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// The opaque state attached to the log call.
    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The captured scope states, innermost first.
    ///
    /// Lazy and restartable; an empty iterator when scope tracking was off
    /// or no scopes were open.
    pub fn scopes(&self) -> ScopeIter {
        ScopeFrame::iter(self.scopes.as_ref())
    }

    #[inline]
    pub fn exception(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.exception.as_deref()
    }

    /// The message text, formatting it on first call.
    pub fn message(&self) -> &str {
        self.message.get()
    }
}

impl Display for LogRecord {
    /// A reference rendering: level, event, message, scopes innermost-first,
    /// then the causing error.
    ///
    /// Writers that want different output read the fields instead.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.level, self.event_id, self.message())?;
        let mut scopes = self.scopes();
        if let Some(first) = scopes.next() {
            write!(f, " (in {}", first)?;
            for state in scopes {
                write!(f, " < {}", state)?;
            }
            write!(f, ")")?;
        }
        if let Some(exception) = self.exception() {
            write!(f, " caused by: {}", exception)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

- Debug: derived; LazyMessage reports whether it has been rendered rather
  than rendering.
- Display: implemented as a reference rendering for writers and tests.
- Clone: NOT implemented. A record is consumed exactly once by one writer;
  duplicating the deferred formatter would also duplicate the at-most-once
  rendering guarantee.
- PartialEq/Eq/Hash: NOT implemented; two records are never meaningfully
  equal (the deferred message has no identity).
- Default: NOT implemented; a record without a formatter makes no sense.
- Send: automatic, every field is Send. Sync likewise (OnceLock, Arc).
*/
