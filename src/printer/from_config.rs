//! Printer construction from `printlog.toml`.

use super::{Printer, PrinterBuilder};
use crate::config::{Config, FileConfig};
use crate::context::ProcessIdentity;
use crate::internal;
use crate::level::Level;
use crate::sink::Color;

impl Printer {
    /// Printer from the default config file. Load or conversion errors fall back to
    /// defaults with a warning, so logging setup never aborts the program.
    #[must_use]
    pub fn from_default_config() -> Self {
        internal::debug("Building printer from config");
        let file = FileConfig::load().unwrap_or_else(|e| {
            internal::warning(&format!("Config load failed, using defaults: {e}"));
            FileConfig::default()
        });
        Self::from_file_config(&file).unwrap_or_else(|e| {
            internal::warning(&format!("Invalid config, using defaults: {e}"));
            Self::default()
        })
    }

    /// Builds the formatting config and sinks described by `file`.
    ///
    /// # Errors
    /// Unknown category keys or timezone names.
    pub fn from_file_config(file: &FileConfig) -> Result<Self, crate::Error> {
        let config = file.settings()?;
        Ok(Self::builder_from_file(file, config).build())
    }

    /// Builder with `file`'s sinks but an explicitly supplied formatting config.
    #[must_use]
    pub fn builder_from_file(file: &FileConfig, config: Config) -> PrinterBuilder {
        let mut builder = Self::builder().config(config);
        let mut sinks: Vec<&str> = Vec::new();

        if file.terminal.enabled {
            let mut terminal = builder.terminal().colors(file.terminal.colors);
            for (name, hex) in &file.terminal.palette {
                match (name.parse::<Level>(), Color::from_hex(hex)) {
                    (Ok(level), Some(color)) => terminal = terminal.level_color(level, color),
                    _ => internal::warning(&format!("Ignoring palette entry {name} = {hex}")),
                }
            }
            builder = terminal.done();
            sinks.push("terminal");
        }

        if file.log.enabled {
            let detected = builder.process_identity();
            let identity = ProcessIdentity {
                id: file.general.identity.clone().unwrap_or(detected.id),
                name: file.general.name.clone().unwrap_or(detected.name),
            };
            internal::debug(&format!("Forwarding to log facade as {}", identity.id));
            builder = builder.forward_to_log_as(identity);
            sinks.push("log");
        }

        if sinks.is_empty() {
            internal::warning("No sinks enabled");
        } else {
            internal::debug(&format!("Sinks enabled: [{}]", sinks.join(", ")));
        }

        builder
    }
}
