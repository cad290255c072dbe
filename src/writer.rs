// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

use crate::error::WriteError;
use crate::log_record::LogRecord;

/// Consumes finished log records.
///
/// The only collaborator the core depends on. A writer is invoked
/// synchronously on the flow that issued the log call, once per accepted
/// record, with no retry and no buffering on the core's side; a returned
/// error propagates to the log caller unmodified.
pub trait Writer: Debug + Send + Sync {
    /**
        Records or forwards the finished log record.

        Formatting, transport, persistence, and fan-out are all the writer's
        business; the core has already done its part by the time this runs.
    */
    fn write(&self, record: LogRecord) -> Result<(), WriteError>;
}

/*
Boilerplate notes.

# Writer

Clone on Writer doesn't make sense; writers hold unique resources.
PartialEq/Eq are possible but it's unclear whether we'd mean data equality or
provenance, so we avoid both.
Default is not sensible since writer construction varies (file path, buffer,
and so on).
Send/Sync are required: one logger instance is shared across flows and every
flow dispatches into the same writer.
Debug is required so Logger can derive it.
*/
