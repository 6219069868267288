//! Captures lines in memory. Tests assert on it; apps can use it to surface recent
//! log lines in a diagnostics screen.

use super::{Entry, Sink};
use crate::category::Category;
use crate::level::Level;

use std::sync::{Arc, Mutex, PoisonError};

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub level: Level,
    pub category: Category,
    pub line: String,
}

/// Cloning shares the buffer, so a test can keep a handle after moving the sink into a printer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<Captured>>>,
}

impl MemorySink {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Captured> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Just the line text, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|c| c.line).collect()
    }

    /// Number of lines captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops everything captured, for reuse between test phases.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Captured {
                level: entry.level,
                category: entry.category,
                line: entry.line.to_string(),
            });
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
