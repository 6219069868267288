//! Hands lines to whatever backend the application installed behind the `log` crate.
//! The process id becomes the record target and the display name its module path.

use super::{Entry, Sink};
use crate::context::ProcessIdentity;
use crate::level::Level;

/// Forwards composed lines into the `log` facade.
#[derive(Debug, Clone)]
pub struct LogSink {
    identity: ProcessIdentity,
}

impl LogSink {
    /// Sink that tags every record with `identity`.
    #[must_use]
    pub const fn new(identity: ProcessIdentity) -> Self {
        Self { identity }
    }

    /// Identity used as the record target and module path.
    #[must_use]
    pub const fn identity(&self) -> &ProcessIdentity {
        &self.identity
    }

    const fn map_level(level: Level) -> ::log::Level {
        match level {
            Level::Debug => ::log::Level::Debug,
            Level::Warning => ::log::Level::Warn,
            Level::Error => ::log::Level::Error,
        }
    }
}

impl Sink for LogSink {
    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error> {
        let level = Self::map_level(entry.level);
        let target = self.identity.id.as_str();
        if !::log::log_enabled!(target: target, level) {
            return Ok(());
        }
        ::log::logger().log(
            &::log::Record::builder()
                .level(level)
                .target(target)
                .module_path(Some(self.identity.name.as_str()))
                .args(format_args!("{}", entry.line))
                .build(),
        );
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        ::log::logger().flush();
        Ok(())
    }
}
