//! `printlog` - category-filtered logging facade with call-site metadata.
//!
//! Every statement carries a [`Level`] and a [`Category`]. The [`Printer`] drops it
//! unless the category is allowed (and not denied) by its [`Config`], then composes
//! one line from the enabled fields and hands it to its sinks:
//!
//! ```text
//! 📲 APP LIFECYCLE [main] [main.rs:12] my_app::main App launched
//! ```
//!
//! # Example
//!
//! ```
//! use printlog::{ApiOutcome, Category, Config, Printer};
//!
//! let printer = Printer::new(
//!     Config::builder()
//!         .show_level(true)
//!         .disabled_categories([Category::Api(ApiOutcome::Info)])
//!         .build(),
//! );
//!
//! printlog::debug!(printer: printer, "App launched", Category::AppLifecycle);
//! printlog::warning!(printer: printer, "Cache miss", Category::Cache);
//! printlog::error!(printer: printer, "Request failed", Category::Api(ApiOutcome::Error));
//! printer.debug("Tapped retry", Category::Ui);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `printlog` command-line tool

pub mod category;
pub mod compose;
pub mod config;
pub mod context;
pub mod error;
pub mod internal;
pub mod level;
mod macros;
pub mod printer;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use category::{ApiOutcome, Category};
pub use compose::{CallSite, Record, compose};
pub use config::{Config, ConfigBuilder, FileConfig, TimestampFormat, Zone};
pub use context::{ExecutionContext, Platform, ProcessIdentity, StdPlatform};
pub use error::Error;
pub use level::Level;
pub use printer::{Printer, PrinterBuilder, global, install};
pub use sink::{Entry, LogSink, MemorySink, Sink, TerminalSink};
