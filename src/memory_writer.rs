// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Writer
//!
//! A writer that captures records in memory instead of emitting them,
//! for:
//!
//! - unit testing code that logs through a [`Logger`](crate::Logger)
//! - asserting on captured scope sequences and deferred messages
//! - capturing output where stderr is redirected or unavailable
//!
//! ## Architecture
//!
//! Records are kept whole behind a `Mutex<Vec<LogRecord>>`, so tests can
//! inspect levels, event ids, scope sequences, and exceptions rather than
//! string output. Rendering stays deferred until a test asks for it, which
//! keeps the at-most-once message guarantee observable.

use std::sync::Mutex;

use crate::error::WriteError;
use crate::log_record::LogRecord;
use crate::writer::Writer;

/// A writer that stores records in a `Vec`.
///
/// Thread-safe; share it with `Arc` and hand a clone to the logger while the
/// test keeps one for assertions.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use scopelog::{EventId, InMemoryWriter, Level, Logger};
///
/// let writer = Arc::new(InMemoryWriter::new());
/// let logger = Logger::new(writer.clone());
///
/// logger
///     .log(Level::Warning, EventId::from(7), "slow", None, |state, _| {
///         format!("operation was {}", state)
///     })
///     .unwrap();
///
/// let records = writer.drain_records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level(), Level::Warning);
/// assert_eq!(records[0].message(), "operation was slow");
/// ```
#[derive(Debug)]
pub struct InMemoryWriter {
    records: Mutex<Vec<LogRecord>>,
}

// Boilerplate: Default implemented (empty buffer); Clone NOT implemented -
// a capture buffer is a unique resource; PartialEq/Eq/Hash NOT implemented -
// records carry no equality; Send/Sync automatic via the Mutex.

impl Default for InMemoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWriter {
    /// Creates a writer with an empty capture buffer.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Takes all captured records, clearing the buffer.
    pub fn drain_records(&self) -> Vec<LogRecord> {
        let mut records = self.records.lock().unwrap();
        std::mem::take(&mut *records)
    }

    /// Renders all captured records to a newline-joined string, clearing the
    /// buffer.
    ///
    /// Forces each record's deferred message; use
    /// [`drain_records`](Self::drain_records) when a test cares about that
    /// cost.
    pub fn drain_rendered(&self) -> String {
        let records = self.drain_records();
        records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of records captured so far.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Writer for InMemoryWriter {
    fn write(&self, record: LogRecord) -> Result<(), WriteError> {
        let mut records = self.records.lock().unwrap();
        records.push(record);
        Ok(())
    }
}
