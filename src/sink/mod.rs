//! Where composed lines go. The [`Sink`] trait lets callers plug in their own
//! destination; the built-in ones cover the terminal, the `log` crate facade, and
//! in-memory capture.

mod color;
mod forward;
mod memory;
mod terminal;

pub use color::{Color, colorize};
pub use forward::LogSink;
pub use memory::{Captured, MemorySink};
pub use terminal::TerminalSink;

use crate::category::Category;
use crate::level::Level;

/// A composed line plus the facts a sink needs to route it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub level: Level,
    pub category: Category,
    /// The finished line, without a trailing newline.
    pub line: &'a str,
}

/// `Send + Sync` so a shared printer can log from any thread without locking around sinks.
pub trait Sink: Send + Sync {
    /// Delivers one line. The sink picks the severity-appropriate channel from `entry.level`.
    ///
    /// # Errors
    /// I/O errors from the underlying destination. The printer discards them.
    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), crate::Error>;
}
