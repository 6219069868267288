//! Prints the effective settings after includes and defaults are applied.

use crate::category::Category;
use crate::config::Config;
use std::process::ExitCode;

fn keys(categories: &[Category]) -> String {
    categories
        .iter()
        .copied()
        .map(Category::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints `config` as TOML-like sections.
#[must_use]
pub fn cmd_config(config: &Config) -> ExitCode {
    println!("[fields]");
    println!("category = {}", config.show_category());
    println!("level = {}", config.show_level());
    println!("date = {}", config.show_date());
    println!("thread = {}", config.show_thread_name());
    println!("file = {}", config.show_file_name());
    println!("line = {}", config.show_line_number());
    println!("function = {}", config.show_function_name());
    println!();
    println!("[categories]");
    println!("enabled = [{}]", keys(config.enabled_categories()));
    println!("disabled = [{}]", keys(config.disabled_categories()));
    println!();
    println!("[timestamp]");
    println!("format = \"{}\"", config.timestamp().pattern());
    println!("timezone = \"{}\"", config.timestamp().time_zone().as_str());
    ExitCode::SUCCESS
}
