//! Assembles the final log line from a record and the enabled metadata fields.
//!
//! Fragment order is fixed: category, date, `[level]`, `[context]`, `[file:line]`,
//! function, message. Disabled or empty fragments leave no separator behind.

use crate::category::Category;
use crate::config::Config;
use crate::level::Level;
use chrono::{DateTime, FixedOffset};

/// Where a log statement was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
    /// Enclosing function path. Empty when the capture mechanism can't see it.
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    /// Explicit call site, for callers that track their own metadata.
    #[must_use]
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// File and line of the caller. Requires `#[track_caller]` up the chain to be useful.
    #[must_use]
    #[track_caller]
    pub fn caller() -> CallSite<'static> {
        let location = std::panic::Location::caller();
        CallSite::new(location.file(), location.line(), "")
    }
}

/// One log statement, borrowed for the duration of a single call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub category: Category,
    pub message: &'a str,
    pub site: CallSite<'a>,
}

/// Builds the line for `record`. `context` is the already-described execution context
/// (see [`ExecutionContext::describe`](crate::context::ExecutionContext::describe)).
#[must_use]
pub fn compose(
    record: &Record<'_>,
    config: &Config,
    now: &DateTime<FixedOffset>,
    context: &str,
) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(7);

    if config.show_category() {
        fragments.push(record.category.label().to_string());
    }

    if config.show_date()
        && let Some(date) = config.timestamp().format(now)
    {
        fragments.push(date);
    }

    if config.show_level() {
        fragments.push(format!("[{}]", record.level.label()));
    }

    if config.show_thread_name() && !context.is_empty() {
        fragments.push(format!("[{context}]"));
    }

    if let Some(location) = location_fragment(&record.site, config) {
        fragments.push(location);
    }

    if config.show_function_name() && !record.site.function.is_empty() {
        fragments.push(record.site.function.to_string());
    }

    if !record.message.is_empty() {
        fragments.push(record.message.to_string());
    }

    fragments.retain(|f| !f.is_empty());
    fragments.join(" ")
}

fn location_fragment(site: &CallSite<'_>, config: &Config) -> Option<String> {
    match (config.show_file_name(), config.show_line_number()) {
        (true, true) => Some(format!("[{}:{}]", basename(site.file), site.line)),
        (true, false) => Some(format!("[{}]", basename(site.file))),
        (false, true) => Some(format!("[{}]", site.line)),
        (false, false) => None,
    }
}

/// Strips any directory prefix, accepting both `/` and `\` separators.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Trims the helper-function suffix and closure segments off a `type_name` path.
#[doc(hidden)]
#[must_use]
pub fn clean_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the path of the enclosing function, e.g. `my_app::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::compose::clean_function_name(type_name_of(__f))
    }};
}

/// Captures the full call site (file, line, enclosing function) at the macro's expansion point.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::compose::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .and_then(|tz| tz.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single())
            .unwrap()
    }

    fn record(message: &str) -> Record<'_> {
        Record {
            level: Level::Warning,
            category: Category::Network,
            message,
            site: CallSite::new("src/net/client.rs", 42, "app::net::connect"),
        }
    }

    #[test]
    fn basename_strips_both_separators() {
        assert_eq!(basename("src/net/client.rs"), "client.rs");
        assert_eq!(basename(r"C:\code\main.rs"), "main.rs");
        assert_eq!(basename("main.rs"), "main.rs");
    }

    #[test]
    fn default_config_line() {
        let line = compose(&record("retrying"), &Config::default(), &now(), "worker");
        assert_eq!(
            line,
            "🌐 NETWORK [worker] [client.rs:42] app::net::connect retrying"
        );
    }

    #[test]
    fn every_fragment_in_order() {
        let config = Config::builder()
            .show_level(true)
            .show_date(true)
            .timestamp(crate::config::TimestampFormat::default().zone(crate::config::Zone::Utc))
            .build();
        let line = compose(&record("retrying"), &config, &now(), "main");
        assert_eq!(
            line,
            "🌐 NETWORK 2024-01-02 03:04:05.000 [Warning] [main] [client.rs:42] app::net::connect retrying"
        );
    }

    #[test]
    fn unrenderable_date_is_omitted() {
        let config = Config::builder()
            .show_date(true)
            .timestamp_pattern("QQQ")
            .show_thread_name(false)
            .build();
        let line = compose(&record("x"), &config, &now(), "main");
        assert_eq!(line, "🌐 NETWORK [client.rs:42] app::net::connect x");
    }

    #[test]
    fn empty_function_is_skipped() {
        let mut r = record("x");
        r.site.function = "";
        let line = compose(&r, &Config::default(), &now(), "main");
        assert_eq!(line, "🌐 NETWORK [main] [client.rs:42] x");
    }

    #[test]
    fn function_names_are_cleaned() {
        assert_eq!(clean_function_name("a::b::__f"), "a::b");
        assert_eq!(clean_function_name("a::b::{{closure}}::__f"), "a::b");
        assert!(function_name!().ends_with("function_names_are_cleaned"));
    }
}
