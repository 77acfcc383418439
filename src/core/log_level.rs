//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Real levels are ordered `Trace < Debug < Info < Warning < Error < Fatal < Panic`
/// and comparison is the filtering rule: a line is emitted when its level is
/// greater than or equal to the backend threshold.
///
/// `Print` and `Invalid` are sentinels. `Print` asks the backend to substitute
/// its configured print-level; `Invalid` marks "not set" while options are
/// resolved. Neither is ever stored as a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
    Print = 7,
    Invalid = 8,
}

const INVALID_NAME: &str = "INVAL";

impl Level {
    /// Highest real (non-sentinel) level.
    pub const MAX: Level = Level::Panic;

    /// Fixed-width (five byte) name used in the `[LEVEL]` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => " INFO",
            Level::Warning => " WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
            Level::Print | Level::Invalid => INVALID_NAME,
        }
    }

    /// Converts a raw rank into a real level. Sentinels are not reachable this way.
    pub const fn from_u8(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warning),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            6 => Some(Level::Panic),
            _ => None,
        }
    }

    /// Fixed-width name for a raw rank, `INVAL` when it is out of range.
    pub const fn name_of(raw: u8) -> &'static str {
        match Level::from_u8(raw) {
            Some(level) => level.as_str(),
            None => INVALID_NAME,
        }
    }

    /// Clamps a signed request into the valid range.
    ///
    /// Returns `default` when `req` is negative or above [`Level::MAX`].
    pub fn normal(req: i64, default: Level) -> Level {
        u8::try_from(req)
            .ok()
            .and_then(Level::from_u8)
            .unwrap_or(default)
    }

    /// Unsigned counterpart of [`Level::normal`].
    pub fn normal_unsigned(req: u64, default: Level) -> Level {
        u8::try_from(req)
            .ok()
            .and_then(Level::from_u8)
            .unwrap_or(default)
    }

    /// True for `Print` and `Invalid`.
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Level::Print | Level::Invalid)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "PANIC" => Ok(Level::Panic),
            "PRINT" => Ok(Level::Print),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_fixed_width() {
        for raw in 0..=u8::MAX {
            assert_eq!(Level::name_of(raw).len(), 5, "raw level {raw}");
        }
        assert_eq!(Level::name_of(200), "INVAL");
        assert_eq!(Level::Info.to_string(), " INFO");
        assert_eq!(Level::Warning.as_str(), " WARN");
        assert_eq!(Level::Invalid.as_str(), "INVAL");
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
    }

    #[test]
    fn test_normal() {
        assert_eq!(Level::normal(0, Level::Info), Level::Trace);
        assert_eq!(Level::normal(6, Level::Info), Level::Panic);
        assert_eq!(Level::normal(7, Level::Info), Level::Info);
        assert_eq!(Level::normal(-1, Level::Error), Level::Error);
        assert_eq!(Level::normal(i64::MAX, Level::Debug), Level::Debug);
        assert_eq!(Level::normal_unsigned(3, Level::Info), Level::Warning);
        assert_eq!(Level::normal_unsigned(300, Level::Info), Level::Info);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warning));
        assert_eq!(" panic ".parse::<Level>(), Ok(Level::Panic));
        assert!("loud".parse::<Level>().is_err());
    }
}
