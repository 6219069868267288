//! `printlog` binary: emit and inspect category-filtered log lines from scripts.
//!
//! Usage:
//!   printlog log <level> [-c <category>] [--file F --line N --function NAME] <msg...>
//!   printlog categories
//!   printlog check <category>
//!   printlog config

use clap::Parser;
use printlog::cli::{
    Cli, Command, ScriptSite, cmd_categories, cmd_check, cmd_config, cmd_log, load_file_config,
};
use printlog::config::{Config, FileConfig};
use printlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics have to be live before config loading to report include problems
    if cli.verbose {
        internal::init();
    }

    let file = match load_file_config(cli.config.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Log {
            level,
            category,
            file: source_file,
            line,
            function,
            message,
        } => {
            let site = ScriptSite {
                file: source_file,
                line,
                function,
            };
            cmd_log(&file, level.into(), &category, &site, &message)
        }
        Command::Categories => with_settings(&file, cmd_categories),
        Command::Check { category } => with_settings(&file, |c| cmd_check(c, &category)),
        Command::Config => with_settings(&file, cmd_config),
    }
}

fn with_settings(file: &FileConfig, run: impl FnOnce(&Config) -> ExitCode) -> ExitCode {
    match file.settings() {
        Ok(config) => run(&config),
        Err(e) => {
            eprintln!("Invalid config: {e}");
            ExitCode::FAILURE
        }
    }
}
