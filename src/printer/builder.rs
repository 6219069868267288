//! Stepwise construction of a [`Printer`]. Terminal options live on a sub-builder so
//! the main builder stays about config, sinks, and platform.

use super::Printer;
use crate::config::Config;
use crate::context::{Platform, ProcessIdentity, StdPlatform};
use crate::level::Level;
use crate::sink::{Color, LogSink, Sink, TerminalSink};

pub struct PrinterBuilder {
    config: Config,
    sinks: Vec<Box<dyn Sink>>,
    platform: Box<dyn Platform>,
}

impl Default for PrinterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrinterBuilder {
    /// Default config, no sinks, `std::thread` platform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            sinks: Vec::new(),
            platform: Box::new(StdPlatform),
        }
    }

    /// Formatting and filtering settings.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Swaps the thread/process lookups, e.g. for a fake in tests.
    #[must_use]
    pub fn platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    /// Adds a sink. Lines reach sinks in the order they were added.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Opens the terminal sub-builder; `done()` attaches the sink.
    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            sink: TerminalSink::new(),
        }
    }

    /// Forwards into the `log` crate, targeted at the platform's process identity.
    #[must_use]
    pub fn forward_to_log(self) -> Self {
        let identity = self.platform.process_identity();
        self.forward_to_log_as(identity)
    }

    /// Forwards into the `log` crate under an explicit identity.
    #[must_use]
    pub fn forward_to_log_as(self, identity: ProcessIdentity) -> Self {
        self.sink(LogSink::new(identity))
    }

    /// Identity the platform reports; used by `forward_to_log`.
    #[must_use]
    pub fn process_identity(&self) -> ProcessIdentity {
        self.platform.process_identity()
    }

    /// Freezes config, sinks, and platform into a printer.
    #[must_use]
    pub fn build(self) -> Printer {
        Printer {
            config: self.config,
            sinks: self.sinks,
            platform: self.platform,
        }
    }
}

pub struct TerminalBuilder {
    parent: PrinterBuilder,
    sink: TerminalSink,
}

impl TerminalBuilder {
    /// Piped output and CI logs can't render ANSI escapes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.sink = self.sink.colors(enabled);
        self
    }

    /// Overrides the color used for `level`.
    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.sink = self.sink.level_color(level, color);
        self
    }

    /// Returns to the parent builder with the terminal sink attached.
    #[must_use]
    pub fn done(self) -> PrinterBuilder {
        self.parent.sink(self.sink)
    }
}
