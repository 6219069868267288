//! Serde schema of `printlog.toml`. Every section is defaulted so an empty file is valid.

use serde::Deserialize;
use std::collections::HashMap;

/// Identity overrides for the `log` forwarding sink.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Replaces the detected process identity (executable name) as the `log` target.
    pub identity: Option<String>,
    /// Replaces the detected process display name.
    pub name: Option<String>,
}

/// Which metadata fragments appear on each line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub category: bool,
    pub level: bool,
    pub date: bool,
    pub thread: bool,
    pub file: bool,
    pub line: bool,
    pub function: bool,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            category: true,
            level: false,
            date: false,
            thread: true,
            file: true,
            line: true,
            function: true,
        }
    }
}

/// Allow/deny lists as category keys. `enabled = None` means every category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    pub enabled: Option<Vec<String>>,
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Unicode date pattern, e.g. `yyyy-MM-dd HH:mm:ss.SSS`.
    pub format: String,
    /// `local` or `utc`.
    pub timezone: String,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            format: super::timestamp::DEFAULT_PATTERN.to_string(),
            timezone: "local".to_string(),
        }
    }
}

/// Terminal sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub enabled: bool,
    pub colors: bool,
    /// Per-level `#RRGGBB` overrides keyed by level name (`debug`, `warning`, `error`).
    pub palette: HashMap<String, String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            palette: HashMap::new(),
        }
    }
}

/// Forwarding into the `log` crate facade.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
}
