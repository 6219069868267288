//! Unified error type for the fallible edges of printlog (config loading, global install, sink I/O).
//! Emitting a log line never returns one of these.

use std::path::PathBuf;

/// Error type for printlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Unknown category key in config or on the command line.
    InvalidCategory(String),
    /// Unknown level string.
    InvalidLevel(String),
    /// Unknown timezone name in the `[timestamp]` section.
    InvalidTimezone(String),
    /// Timestamp pattern contains letters the formatter can't render.
    InvalidTimestampPattern(String),
    /// A global printer was already installed.
    AlreadyInstalled,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidCategory(s) => write!(f, "unknown category: {s}"),
            Self::InvalidLevel(s) => write!(f, "unknown level: {s}"),
            Self::InvalidTimezone(s) => write!(f, "unknown timezone: {s}"),
            Self::InvalidTimestampPattern(s) => write!(f, "unsupported timestamp pattern: {s}"),
            Self::AlreadyInstalled => write!(f, "a global printer is already installed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
