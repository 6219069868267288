//! Emits a single line, so shell scripts can log with the same format and filters as the app.

use crate::category::Category;
use crate::compose::CallSite;
use crate::config::FileConfig;
use crate::level::Level;
use crate::printer::Printer;
use std::process::ExitCode;

/// Call-site metadata a script passes explicitly (e.g. `--file "$0" --line "$LINENO"`).
#[derive(Debug, Default)]
pub struct ScriptSite {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

/// Composes and writes one line through the sinks `file` configures.
#[must_use]
pub fn cmd_log(
    file: &FileConfig,
    level: Level,
    category: &str,
    site: &ScriptSite,
    message: &[String],
) -> ExitCode {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut settings = match file.settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Fields the script didn't supply would only render as placeholders
    settings = settings
        .to_builder()
        .show_file_name(settings.show_file_name() && site.file.is_some())
        .show_line_number(settings.show_line_number() && site.line.is_some())
        .show_function_name(settings.show_function_name() && site.function.is_some())
        .build();

    let printer = Printer::builder_from_file(file, settings).build();

    let call_site = CallSite::new(
        site.file.as_deref().unwrap_or_default(),
        site.line.unwrap_or_default(),
        site.function.as_deref().unwrap_or_default(),
    );
    printer.log_at(level, &message.join(" "), category, call_site);
    let _ = printer.flush();
    ExitCode::SUCCESS
}
