//! `printlog.toml` loading, `source = "..."` include resolution, and conversion into [`Config`].
//!
//! Kept apart from the runtime [`Config`] so file I/O, cycle detection, and the merge rule
//! don't leak into the formatting path.

use super::structs::{
    CategoriesConfig, FieldsConfig, GeneralConfig, LogConfig, TerminalConfig, TimestampConfig,
};
use super::timestamp::{TimestampFormat, Zone};
use super::Config;
use crate::category::Category;
use crate::internal;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed `printlog.toml`. An empty file still yields a working printer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub general: GeneralConfig,
    pub fields: FieldsConfig,
    pub categories: CategoriesConfig,
    pub timestamp: TimestampConfig,
    pub terminal: TerminalConfig,
    pub log: LogConfig,
}

/// Scans raw TOML for `source = "..."` directives before deserialization, since serde
/// can't express includes. Returns the include paths and the remaining TOML.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let is_source = trimmed
            .split_once('=')
            .is_some_and(|(key, _)| key.trim() == "source");
        if is_source {
            if let Some(path) = trimmed.split_once('=').map(|(_, value)| source_value(value))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// Path of a `source` value: a quoted string up to its closing quote, or a bare
/// value up to a trailing `#` comment.
fn source_value(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest.split_once(quote).map_or(rest, |(inner, _)| inner);
        }
    }
    value.split_once('#').map_or(value, |(bare, _)| bare).trim()
}

impl FileConfig {
    /// Loads the user's config from the default location, resolving includes.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("Loading config from default location");
        let config_path = Self::default_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::debug(&format!("Config resolved from {}", config_path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text. `source` lines are ignored here since there is no base file.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands includes. `ancestors` holds the files on the
    /// current include chain, so a file reached along two branches loads twice but a
    /// file that includes itself (directly or not) is rejected.
    fn load_with_sources(
        path: &Path,
        ancestors: &mut HashSet<PathBuf>,
    ) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !ancestors.insert(canonical.clone()) {
            internal::warning(&format!("Cyclic include detected: {}", canonical.display()));
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let result = Self::parse_with_sources(path, ancestors);
        ancestors.remove(&canonical);
        result
    }

    fn parse_with_sources(
        path: &Path,
        ancestors: &mut HashSet<PathBuf>,
    ) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug(&format!("Processing source: {source_path}"));
            let source_file = resolve_source(path, &source_path);
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, ancestors)?;
                config.merge(source_config);
            } else {
                internal::warning(&format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included file into `self`. The including file keeps its toggles,
    /// allow list, and palette entries; deny lists accumulate so an include can only
    /// silence more.
    pub fn merge(&mut self, other: Self) {
        for (level, hex) in other.terminal.palette {
            self.terminal.palette.entry(level).or_insert(hex);
        }
        if self.categories.enabled.is_none() {
            self.categories.enabled = other.categories.enabled;
        }
        for key in other.categories.disabled {
            if !self.categories.disabled.contains(&key) {
                self.categories.disabled.push(key);
            }
        }
        if self.general.identity.is_none() {
            self.general.identity = other.general.identity;
        }
        if self.general.name.is_none() {
            self.general.name = other.general.name;
        }
    }

    /// `<config_dir>/printlog/printlog.toml` per the platform's XDG conventions.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "printlog")
            .map(|dirs| dirs.config_dir().join("printlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Converts the file's string-typed sections into a [`Config`].
    ///
    /// # Errors
    /// Unknown category keys or timezone names. An unrenderable timestamp pattern is
    /// only warned about; the date fragment then drops out of every line.
    pub fn settings(&self) -> Result<Config, crate::Error> {
        let enabled = match &self.categories.enabled {
            Some(keys) => parse_categories(keys)?,
            None => Category::all(),
        };
        let disabled = parse_categories(&self.categories.disabled)?;

        let zone: Zone = self.timestamp.timezone.parse()?;
        let timestamp = TimestampFormat::new(self.timestamp.format.as_str()).zone(zone);
        if !timestamp.is_renderable() {
            internal::warning(&format!(
                "Timestamp pattern '{}' can't be rendered, date will be omitted",
                self.timestamp.format
            ));
        }

        let fields = &self.fields;
        Ok(Config::builder()
            .show_category(fields.category)
            .show_level(fields.level)
            .show_date(fields.date)
            .show_thread_name(fields.thread)
            .show_file_name(fields.file)
            .show_line_number(fields.line)
            .show_function_name(fields.function)
            .enabled_categories(enabled)
            .disabled_categories(disabled)
            .timestamp(timestamp)
            .build())
    }
}

/// `~` is expanded; relative paths are taken from the including file's directory.
fn resolve_source(including: &Path, source: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(source).as_ref());
    if expanded.is_absolute() {
        return expanded;
    }
    match including.parent() {
        Some(dir) => dir.join(expanded),
        None => expanded,
    }
}

fn parse_categories(keys: &[String]) -> Result<Vec<Category>, crate::Error> {
    keys.iter()
        .map(|key| key.parse::<Category>().map_err(crate::Error::from))
        .collect()
}
