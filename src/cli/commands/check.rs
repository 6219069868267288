//! Lets scripts skip expensive work when a category is filtered out.

use crate::category::Category;
use crate::config::Config;
use std::process::ExitCode;

/// Exit status reports the filter state: 0 enabled, 1 disabled, 2 unknown key.
#[must_use]
pub fn cmd_check(config: &Config, category: &str) -> ExitCode {
    match category.parse::<Category>() {
        Ok(c) if config.is_enabled(&c) => {
            println!("{c}: enabled");
            ExitCode::SUCCESS
        }
        Ok(c) => {
            println!("{c}: disabled");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
