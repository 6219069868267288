//! printlog's own diagnostic channel, used while loading config and building printers.
//!
//! Uses `OnceLock` so the diagnostic printer is initialized exactly once, even if
//! several entry points (CLI, tests) race to call `init`. Before init every call
//! is a no-op. Messages are emitted under [`Category::System`], so a config that
//! disables `system` also silences them.

use crate::category::Category;
use crate::compose::CallSite;
use crate::config::FileConfig;
use crate::level::Level;
use crate::printer::Printer;
use std::sync::OnceLock;

static INTERNAL_PRINTER: OnceLock<Printer> = OnceLock::new();

/// Enables diagnostics with default formatting on the terminal.
pub fn init() {
    init_with_config(&FileConfig::default());
}

/// Enables diagnostics, reusing the already-loaded config for filters and colors.
pub fn init_with_config(file: &FileConfig) {
    let was_init = is_initialized();
    INTERNAL_PRINTER.get_or_init(|| build_internal_printer(file));
    if !was_init {
        debug("Internal diagnostics ready");
    }
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_PRINTER.get().is_some()
}

fn build_internal_printer(file: &FileConfig) -> Printer {
    let config = file.settings().unwrap_or_default();
    let config = crate::Config::builder()
        .show_level(true)
        .show_function_name(false)
        .enabled_categories(config.enabled_categories().iter().copied())
        .disabled_categories(config.disabled_categories().iter().copied())
        .build();

    Printer::builder()
        .config(config)
        .terminal()
        .colors(file.terminal.colors)
        .done()
        .build()
}

#[track_caller]
fn log(level: Level, msg: &str) {
    if let Some(printer) = INTERNAL_PRINTER.get() {
        printer.log_at(level, msg, Category::System, CallSite::caller());
    }
}

/// Logs a diagnostic at debug level.
#[track_caller]
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Logs a diagnostic at warning level.
#[track_caller]
pub fn warning(msg: &str) {
    log(Level::Warning, msg);
}

/// Logs a diagnostic at error level.
#[track_caller]
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
