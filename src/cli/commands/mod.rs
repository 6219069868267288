//! One file per subcommand keeps the dispatch in `main` thin.

mod categories;
mod check;
mod config;
mod emit;

pub use categories::cmd_categories;
pub use check::cmd_check;
pub use config::cmd_config;
pub use emit::{ScriptSite, cmd_log};
