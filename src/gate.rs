// SPDX-License-Identifier: MIT OR Apache-2.0

//! The severity gate and the include-scopes latch.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::Level;

/// Decides whether a log call proceeds, and whether scopes are tracked.
///
/// The gate holds two pieces of configuration:
///
/// - the minimum severity, mutable at any time; changing it affects future
///   [`is_enabled`](LogGate::is_enabled) answers, never past ones;
/// - the include-scopes flag, mutable only until first use. The first log
///   call or scope begin locks it, so enabling or disabling scope tracking
///   is a one-time decision rather than a per-call branch.
///
/// All fields are atomics; no operation blocks.
#[derive(Debug)]
pub struct LogGate {
    minimum: AtomicU8,
    include_scopes: AtomicBool,
    scopes_locked: AtomicBool,
}

impl LogGate {
    /// Creates a gate with the given minimum level.
    ///
    /// Scope tracking starts requested and unlocked.
    pub fn new(minimum: Level) -> Self {
        Self {
            minimum: AtomicU8::new(minimum as u8),
            include_scopes: AtomicBool::new(true),
            scopes_locked: AtomicBool::new(false),
        }
    }

    /// The current minimum severity.
    pub fn minimum_level(&self) -> Level {
        // The slot only ever holds values stored from a Level.
        Level::from_raw(self.minimum.load(Ordering::Relaxed)).unwrap_or(Level::Off)
    }

    /// Sets the minimum severity.
    ///
    /// [`Level::Off`] is a valid minimum and disables all logging.
    pub fn set_minimum_level(&self, minimum: Level) {
        self.minimum.store(minimum as u8, Ordering::Relaxed);
    }

    /// True iff a message at `level` would pass the gate.
    ///
    /// [`Level::Off`] itself never passes, whatever the minimum.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_loggable() && self.minimum_level() <= level
    }

    /// Requests scope tracking on or off.
    ///
    /// Silently ignored once the latch has locked.
    pub fn set_include_scopes(&self, include: bool) {
        if self.scopes_locked.load(Ordering::Acquire) {
            return;
        }
        self.include_scopes.store(include, Ordering::Release);
    }

    /// Locks the include-scopes flag and returns its frozen value.
    ///
    /// Idempotent. Must be called before any scope push, pop, or
    /// scope-sequence read; every such path in [`Logger`](crate::Logger)
    /// does so.
    pub fn lock_and_get_include_scopes(&self) -> bool {
        let _ = self
            .scopes_locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire);
        self.include_scopes.load(Ordering::Acquire)
    }
}

impl Default for LogGate {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_semantics() {
        let gate = LogGate::new(Level::Warning);
        assert!(!gate.is_enabled(Level::Info));
        assert!(gate.is_enabled(Level::Warning));
        assert!(gate.is_enabled(Level::Critical));
        assert!(!gate.is_enabled(Level::Off));
    }

    #[test]
    fn minimum_off_disables_everything() {
        let gate = LogGate::new(Level::Off);
        assert!(!gate.is_enabled(Level::Critical));
        assert!(!gate.is_enabled(Level::Off));
    }

    #[test]
    fn changing_minimum_affects_future_answers() {
        let gate = LogGate::default();
        assert!(gate.is_enabled(Level::Info));
        gate.set_minimum_level(Level::Error);
        assert!(!gate.is_enabled(Level::Info));
        gate.set_minimum_level(Level::Trace);
        assert!(gate.is_enabled(Level::Trace));
    }

    #[test]
    fn include_scopes_freezes_on_first_use() {
        let gate = LogGate::default();
        gate.set_include_scopes(false);
        assert!(!gate.lock_and_get_include_scopes());

        // Locked now; later sets are no-ops.
        gate.set_include_scopes(true);
        assert!(!gate.lock_and_get_include_scopes());
    }

    #[test]
    fn lock_is_idempotent() {
        let gate = LogGate::default();
        assert!(gate.lock_and_get_include_scopes());
        assert!(gate.lock_and_get_include_scopes());
    }
}
