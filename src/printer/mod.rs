//! The logging facade. A [`Printer`] owns an immutable [`Config`], a set of sinks,
//! and the platform collaborator; each call filters by category, composes one line,
//! and fans it out to every sink.

mod builder;
mod from_config;
mod global;

pub use builder::{PrinterBuilder, TerminalBuilder};
pub use global::{global, install};

use crate::category::Category;
use crate::compose::{CallSite, Record, compose};
use crate::config::Config;
use crate::context::Platform;
use crate::level::Level;
use crate::sink::{Entry, Sink};

/// Immutable after build, so a shared `&Printer` logs from any thread without locks.
pub struct Printer {
    config: Config,
    sinks: Vec<Box<dyn Sink>>,
    platform: Box<dyn Platform>,
}

impl Default for Printer {
    /// Default config, terminal output.
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Printer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl Printer {
    /// `config` with a terminal sink.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::builder().config(config).terminal().done().build()
    }

    /// Starts from default config, no sinks, and the `std::thread` platform.
    #[must_use]
    pub fn builder() -> PrinterBuilder {
        PrinterBuilder::new()
    }

    /// The settings this printer was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a statement in `category` would be emitted.
    #[must_use]
    pub fn is_enabled(&self, category: &Category) -> bool {
        self.config.is_enabled(category)
    }

    /// Emits at debug level.
    ///
    /// File and line come from the caller; the function fragment stays empty because
    /// Rust exposes no caller-function intrinsic. Use [`debug!`](crate::debug) to get it.
    #[track_caller]
    pub fn debug(&self, message: &str, category: Category) {
        self.log_at(Level::Debug, message, category, CallSite::caller());
    }

    /// Emits at warning level. Same call-site rules as [`debug`](Self::debug).
    #[track_caller]
    pub fn warning(&self, message: &str, category: Category) {
        self.log_at(Level::Warning, message, category, CallSite::caller());
    }

    /// Emits at error level. Same call-site rules as [`debug`](Self::debug).
    #[track_caller]
    pub fn error(&self, message: &str, category: Category) {
        self.log_at(Level::Error, message, category, CallSite::caller());
    }

    /// Emits at `level`. Same call-site rules as [`debug`](Self::debug).
    #[track_caller]
    pub fn log(&self, level: Level, message: &str, category: Category) {
        self.log_at(level, message, category, CallSite::caller());
    }

    /// Emits with explicitly supplied call-site metadata. Never fails; sink errors are dropped.
    pub fn log_at(&self, level: Level, message: &str, category: Category, site: CallSite<'_>) {
        if !self.is_enabled(&category) {
            return;
        }

        let record = Record {
            level,
            category,
            message,
            site,
        };
        let line = self.render(&record);
        let entry = Entry {
            level,
            category,
            line: &line,
        };

        for sink in &self.sinks {
            let _ = sink.write(&entry);
        }
    }

    /// The line `record` would produce right now, or `None` if its category is filtered out.
    #[must_use]
    pub fn format(&self, record: &Record<'_>) -> Option<String> {
        self.is_enabled(&record.category)
            .then(|| self.render(record))
    }

    fn render(&self, record: &Record<'_>) -> String {
        let now = self.config.timestamp().now();
        let context = if self.config.show_thread_name() {
            self.platform.current_context().describe()
        } else {
            String::new()
        };
        compose(record, &self.config, &now, &context)
    }

    /// Flushes every sink.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}
