//! Formatting and filtering settings.
//!
//! [`Config`] is the immutable bundle a [`Printer`](crate::Printer) is built from. It can be
//! assembled in code through [`ConfigBuilder`] or loaded from `printlog.toml` through
//! [`FileConfig`], which also carries sink settings.

mod file;
mod structs;
pub mod timestamp;

pub use file::{FileConfig, extract_sources};
pub use structs::{
    CategoriesConfig, FieldsConfig, GeneralConfig, LogConfig, TerminalConfig, TimestampConfig,
};
pub use timestamp::{TimestampFormat, Zone};

use crate::category::Category;

/// Which fragments to render, which categories may emit, and how to print the date.
///
/// No setters: once built, a `Config` is read-only for the lifetime of its printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    show_category: bool,
    show_level: bool,
    show_date: bool,
    show_thread_name: bool,
    show_file_name: bool,
    show_line_number: bool,
    show_function_name: bool,
    enabled_categories: Vec<Category>,
    disabled_categories: Vec<Category>,
    timestamp: TimestampFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_category: true,
            show_level: false,
            show_date: false,
            show_thread_name: true,
            show_file_name: true,
            show_line_number: true,
            show_function_name: true,
            enabled_categories: Category::all(),
            disabled_categories: Vec::new(),
            timestamp: TimestampFormat::default(),
        }
    }
}

impl Config {
    /// Builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads `printlog.toml` from the default location and extracts the formatting settings.
    ///
    /// # Errors
    /// Fails on unreadable or malformed config, or unknown category/timezone names.
    pub fn load() -> Result<Self, crate::Error> {
        FileConfig::load()?.settings()
    }

    /// Builder seeded with this config's values, for deriving a variant.
    #[must_use]
    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder {
            config: self.clone(),
        }
    }

    /// A category may emit only if it is allowed and not denied. Deny wins.
    #[must_use]
    pub fn is_enabled(&self, category: &Category) -> bool {
        self.enabled_categories.contains(category) && !self.disabled_categories.contains(category)
    }

    /// Whether the category label leads the line.
    #[must_use]
    pub const fn show_category(&self) -> bool {
        self.show_category
    }

    /// Whether the `[Level]` fragment is rendered.
    #[must_use]
    pub const fn show_level(&self) -> bool {
        self.show_level
    }

    /// Whether the timestamp fragment is rendered.
    #[must_use]
    pub const fn show_date(&self) -> bool {
        self.show_date
    }

    /// Whether the `[context]` fragment is rendered.
    #[must_use]
    pub const fn show_thread_name(&self) -> bool {
        self.show_thread_name
    }

    /// Whether the source file basename is rendered.
    #[must_use]
    pub const fn show_file_name(&self) -> bool {
        self.show_file_name
    }

    /// Whether the source line is rendered.
    #[must_use]
    pub const fn show_line_number(&self) -> bool {
        self.show_line_number
    }

    /// Whether the enclosing function path is rendered.
    #[must_use]
    pub const fn show_function_name(&self) -> bool {
        self.show_function_name
    }

    /// Allow list. Categories missing from it never emit.
    #[must_use]
    pub fn enabled_categories(&self) -> &[Category] {
        &self.enabled_categories
    }

    /// Deny list. Wins over the allow list.
    #[must_use]
    pub fn disabled_categories(&self) -> &[Category] {
        &self.disabled_categories
    }

    /// Pattern and zone for the date fragment.
    #[must_use]
    pub const fn timestamp(&self) -> &TimestampFormat {
        &self.timestamp
    }
}

/// Stepwise construction of a [`Config`]. Every option starts at its documented default.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Same as [`Config::builder`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the leading category label. On by default.
    #[must_use]
    pub const fn show_category(mut self, show: bool) -> Self {
        self.config.show_category = show;
        self
    }

    /// Toggles the `[Level]` fragment. Off by default.
    #[must_use]
    pub const fn show_level(mut self, show: bool) -> Self {
        self.config.show_level = show;
        self
    }

    /// Toggles the timestamp fragment. Off by default.
    #[must_use]
    pub const fn show_date(mut self, show: bool) -> Self {
        self.config.show_date = show;
        self
    }

    /// Toggles the `[context]` fragment. On by default.
    #[must_use]
    pub const fn show_thread_name(mut self, show: bool) -> Self {
        self.config.show_thread_name = show;
        self
    }

    /// Toggles the file basename. On by default.
    #[must_use]
    pub const fn show_file_name(mut self, show: bool) -> Self {
        self.config.show_file_name = show;
        self
    }

    /// Toggles the line number. On by default.
    #[must_use]
    pub const fn show_line_number(mut self, show: bool) -> Self {
        self.config.show_line_number = show;
        self
    }

    /// Toggles the function path. On by default.
    #[must_use]
    pub const fn show_function_name(mut self, show: bool) -> Self {
        self.config.show_function_name = show;
        self
    }

    /// Replaces the allow list. Categories missing from it never emit.
    #[must_use]
    pub fn enabled_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.config.enabled_categories = categories.into_iter().collect();
        self
    }

    /// Replaces the deny list. Overrides the allow list.
    #[must_use]
    pub fn disabled_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.config.disabled_categories = categories.into_iter().collect();
        self
    }

    /// Replaces pattern and zone together.
    #[must_use]
    pub fn timestamp(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp = format;
        self
    }

    /// Replaces the pattern, keeping the current time zone.
    #[must_use]
    pub fn timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        let zone = self.config.timestamp.time_zone();
        self.config.timestamp = TimestampFormat::new(pattern).zone(zone);
        self
    }

    /// Freezes the settings.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
