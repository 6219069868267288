//! Terminal is the default destination: debug lines on stdout, warnings and errors on
//! stderr so they survive `> /dev/null`.

use super::color::{Color, colorize};
use super::{Entry, Sink};
use crate::level::Level;

use std::collections::HashMap;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct TerminalSink {
    /// Piped output and CI logs can't render ANSI escapes.
    colors_enabled: bool,
    level_colors: HashMap<Level, Color>,
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSink {
    /// Colored output with the default level palette.
    #[must_use]
    pub fn new() -> Self {
        let mut level_colors = HashMap::new();
        level_colors.insert(Level::Debug, Color::purple());
        level_colors.insert(Level::Warning, Color::yellow());
        level_colors.insert(Level::Error, Color::red());

        Self {
            colors_enabled: true,
            level_colors,
        }
    }

    /// Turns ANSI coloring on or off.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Overrides the color used for `level`.
    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// The exact bytes written for `entry`, minus the newline.
    #[must_use]
    pub fn render(&self, entry: &Entry<'_>) -> String {
        if !self.colors_enabled {
            return entry.line.to_string();
        }
        let color = self
            .level_colors
            .get(&entry.level)
            .copied()
            .unwrap_or(Color::white());
        colorize(entry.line, color)
    }
}

impl Sink for TerminalSink {
    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error> {
        let rendered = self.render(entry);
        match entry.level {
            Level::Debug => writeln!(io::stdout(), "{rendered}")?,
            Level::Warning | Level::Error => writeln!(io::stderr(), "{rendered}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
