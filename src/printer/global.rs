//! Process-wide printer used by the argument-less macro forms.

use super::Printer;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Printer> = OnceLock::new();

/// Installs `printer` as the process-wide printer. Only the first call succeeds.
///
/// # Errors
/// [`crate::Error::AlreadyInstalled`] if a printer was installed, or the default was
/// already materialized by an earlier [`global`] call.
pub fn install(printer: Printer) -> Result<(), crate::Error> {
    GLOBAL
        .set(printer)
        .map_err(|_| crate::Error::AlreadyInstalled)
}

/// The installed printer, or a default terminal printer if none was installed.
#[must_use]
pub fn global() -> &'static Printer {
    GLOBAL.get_or_init(Printer::default)
}
