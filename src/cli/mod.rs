//! Command-line interface for emitting and inspecting printlog output from shell scripts.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    #[value(alias = "warn")]
    Warning,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
        }
    }
}

/// printlog - category-filtered log lines from the command line.
#[derive(Parser)]
#[command(name = "printlog", version, about = "Category-filtered log lines from the command line")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print printlog's own diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Emit one log line.
    Log {
        #[arg(value_enum)]
        level: LogLevel,
        /// Category key, e.g. `network` or `api.error`
        #[arg(short, long, default_value = "logic")]
        category: String,
        /// Source file to report (hidden when omitted)
        #[arg(long)]
        file: Option<String>,
        /// Source line to report
        #[arg(long)]
        line: Option<u32>,
        /// Function name to report
        #[arg(long)]
        function: Option<String>,
        /// Message words
        message: Vec<String>,
    },
    /// List every category with its label and whether it is enabled.
    Categories,
    /// Exit 0 if the category is enabled, 1 otherwise.
    Check {
        category: String,
    },
    /// Show the effective configuration.
    Config,
}

pub use commands::{ScriptSite, cmd_categories, cmd_check, cmd_config, cmd_log};
pub use util::load_file_config;
