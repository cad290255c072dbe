// SPDX-License-Identifier: MIT OR Apache-2.0
use std::io::Write as _;

use crate::error::WriteError;
use crate::log_record::LogRecord;
use crate::writer::Writer;

/**
A reference writer that writes one line per record to stderr.

Uses the record's reference rendering: level, event, message, open scopes
innermost-first, causing error. An I/O failure on stderr surfaces through
[`Logger::log`](crate::Logger::log).
 */
#[derive(Debug, Clone)]
pub struct StdErrWriter {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdErrWriter trait implementations:
//
// - Debug/Clone: derived - appropriate for a zero-sized struct
// - Copy: implemented - safe for a zero-sized struct with no heap allocation
// - PartialEq/Eq: implemented - all instances are equivalent (zero-sized)
// - Hash: implemented - consistent with Eq
// - Default: implemented - convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: automatic - zero-sized struct is always thread-safe

impl Copy for StdErrWriter {}

impl PartialEq for StdErrWriter {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StdErrWriter {}

impl std::hash::Hash for StdErrWriter {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StdErrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Writer for StdErrWriter {
    fn write(&self, record: LogRecord) -> Result<(), WriteError> {
        let mut lock = std::io::stderr().lock();
        writeln!(lock, "{}", record)?;
        Ok(())
    }
}
