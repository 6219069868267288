//! Helpers shared by CLI commands.

use crate::config::FileConfig;
use std::path::Path;

/// Explicit `--config` path, or the default location.
///
/// # Errors
/// Unreadable or malformed config files, or cyclic includes.
pub fn load_file_config(path: Option<&Path>) -> Result<FileConfig, crate::Error> {
    match path {
        Some(p) => FileConfig::load_from(p),
        None => FileConfig::load(),
    }
}
