//! Lists the taxonomy so users can find the right key for config files.

use crate::category::Category;
use crate::config::Config;
use std::process::ExitCode;

/// Prints one row per category: key, filter state, label.
#[must_use]
pub fn cmd_categories(config: &Config) -> ExitCode {
    for category in Category::all() {
        let state = if config.is_enabled(&category) {
            "enabled"
        } else {
            "disabled"
        };
        println!("{:<14} {:<8} {}", category.key(), state, category.label());
    }
    ExitCode::SUCCESS
}
