// SPDX-License-Identifier: MIT OR Apache-2.0

//! The opaque state value attached to log records and scopes.
//!
//! The core does not interpret state; it only carries it from the log call
//! (or scope begin) through to the writer. Writers render state however they
//! like, which is why the trait asks for both [`Display`](std::fmt::Display)
//! (human rendering) and [`Debug`](std::fmt::Debug) (diagnostics).

use std::fmt::{Debug, Display};
use std::sync::Arc;

/// An opaque state value.
///
/// Anything printable and shareable across threads qualifies; the blanket
/// impl means callers never implement this by hand.
///
/// ```rust
/// use scopelog::StateValue;
///
/// fn takes_state(_s: &dyn StateValue) {}
///
/// takes_state(&"request 42");
/// takes_state(&7u64);
/// ```
pub trait StateValue: Debug + Display + Send + Sync {}

impl<T> StateValue for T where T: Debug + Display + Send + Sync {}

/// Shared handle to an opaque state value, as stored in frames and records.
pub type State = Arc<dyn StateValue>;
