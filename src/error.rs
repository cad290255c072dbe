// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration surface and the writer boundary.
//!
//! The core raises errors in exactly one place of its own: configuration
//! values that arrive as raw numbers or strings and fall outside the defined
//! severity range. Everything else is either silently tolerated (logging at a
//! disabled level, out-of-order scope release, setting the include-scopes
//! flag after it has locked) or belongs to the writer: a failing
//! [`Writer::write`](crate::Writer::write) propagates to the caller of the
//! log call unmodified, with no retry, wrapping, or fallback.

use thiserror::Error;

/// Error type carried by a failing writer.
///
/// The core never constructs one of these itself; they pass through
/// [`Logger::log`](crate::Logger::log) untouched.
pub type WriteError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A configuration value was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A raw severity value outside the defined level range.
    #[error("severity value {0} is outside the defined level range")]
    InvalidLevel(u8),
    /// A severity name that doesn't correspond to any level.
    #[error("unknown severity level name {0:?}")]
    UnknownLevel(String),
}
