// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ConfigError;

/// Log severity.
///
/// Levels are totally ordered from least to most severe. [`Level::Off`] is a
/// sentinel: it may be used as a minimum level to disable all logging, but no
/// message can be logged at it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed debugging
    Trace = 0,
    /// Print-style debugging
    Debug = 1,
    /// Normal operation
    Info = 2,
    /// Suspicious condition
    Warning = 3,
    /// Runtime error
    Error = 4,
    /// Unrecoverable failure
    Critical = 5,
    /// Upper-bound sentinel; never a message severity
    Off = 6,
}

impl Level {
    /// Whether a message at this level can ever be logged.
    ///
    /// False only for the [`Level::Off`] sentinel.
    #[inline]
    pub fn is_loggable(self) -> bool {
        self < Level::Off
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Off => "OFF",
        }
    }

    pub(crate) const fn from_raw(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warning),
            4 => Some(Level::Error),
            5 => Some(Level::Critical),
            6 => Some(Level::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = ConfigError;

    fn try_from(raw: u8) -> Result<Self, ConfigError> {
        Level::from_raw(raw).ok_or(ConfigError::InvalidLevel(raw))
    }
}

impl std::str::FromStr for Level {
    type Err = ConfigError;

    /// Parses a level name, case-insensitively.  Useful for configuration
    /// sourced from strings (command lines, environment variables).
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let level = if s.eq_ignore_ascii_case("trace") {
            Level::Trace
        } else if s.eq_ignore_ascii_case("debug") {
            Level::Debug
        } else if s.eq_ignore_ascii_case("info") {
            Level::Info
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Level::Warning
        } else if s.eq_ignore_ascii_case("error") {
            Level::Error
        } else if s.eq_ignore_ascii_case("critical") {
            Level::Critical
        } else if s.eq_ignore_ascii_case("off") {
            Level::Off
        } else {
            return Err(ConfigError::UnknownLevel(s.to_string()));
        };
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::Off);
        assert!(!Level::Off.is_loggable());
        assert!(Level::Critical.is_loggable());
    }

    #[test]
    fn raw_roundtrip() {
        for raw in 0..=6u8 {
            let level = Level::try_from(raw).unwrap();
            assert_eq!(level as u8, raw);
        }
        assert_eq!(Level::try_from(7), Err(ConfigError::InvalidLevel(7)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Critical".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("off".parse::<Level>().unwrap(), Level::Off);
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ConfigError::UnknownLevel("verbose".to_string()))
        );
    }
}
