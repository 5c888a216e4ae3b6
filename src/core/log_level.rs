//! Log level and threshold filter definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

pub const ALL_LEVELS: [LogLevel; 6] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
];

impl LogLevel {
    /// Numeric severity rank. Lower rank means more severe: `Fatal` is 1,
    /// `Trace` is 6. Threshold checks compare ranks, so a message passes a
    /// configured level iff its rank is less than or equal to that level's.
    pub fn rank(&self) -> u8 {
        match self {
            LogLevel::Trace => 6,
            LogLevel::Debug => 5,
            LogLevel::Info => 4,
            LogLevel::Warn => 3,
            LogLevel::Error => 2,
            LogLevel::Fatal => 1,
        }
    }

    /// Uppercase label used in the bracketed line prefix, e.g. `"INFO"`.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Lowercase name used when expanding the `{level}` tag token.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// ANSI open/close escape pair wrapped around the bracketed label.
    ///
    /// Every level closes with the foreground reset (`\x1b[39m`) except
    /// `Trace`, which paints the background and closes with `\x1b[49m`.
    pub fn color_codes(&self) -> (&'static str, &'static str) {
        match self {
            LogLevel::Trace => ("\x1b[41m", "\x1b[49m"),
            LogLevel::Debug => ("\x1b[34m", "\x1b[39m"),
            LogLevel::Info => ("\x1b[32m", "\x1b[39m"),
            LogLevel::Warn => ("\x1b[33m", "\x1b[39m"),
            LogLevel::Error => ("\x1b[31m", "\x1b[39m"),
            LogLevel::Fatal => ("\x1b[35m", "\x1b[39m"),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Threshold configuration for a logger.
///
/// `Off` suppresses everything, `All` passes everything, and `Level(t)`
/// passes messages at least as severe as `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    Off,
    All,
    Level(LogLevel),
}

impl LevelFilter {
    /// Decide whether a message at `level` passes this filter.
    pub fn should_log(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::Off => false,
            LevelFilter::All => true,
            LevelFilter::Level(threshold) => level.rank() <= threshold.rank(),
        }
    }
}

impl Default for LevelFilter {
    /// Unspecified thresholds default to `Debug`.
    fn default() -> Self {
        LevelFilter::Level(LogLevel::Debug)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFilter::Off => write!(f, "OFF"),
            LevelFilter::All => write!(f, "ALL"),
            LevelFilter::Level(level) => write!(f, "{}", level),
        }
    }
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(LevelFilter::Off),
            "ALL" => Ok(LevelFilter::All),
            _ => s.parse::<LogLevel>().map(LevelFilter::Level),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::Level(level)
    }
}
