//! Tests for line composition.

use chrono::{DateTime, FixedOffset, TimeZone};
use printlog::{CallSite, Category, Config, Level, Record, TimestampFormat, Zone, compose};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(2025, 6, 30, 23, 59, 58).single())
        .unwrap()
}

fn record(message: &str) -> Record<'_> {
    Record {
        level: Level::Debug,
        category: Category::AppLifecycle,
        message,
        site: CallSite::new("/home/dev/app/src/main.rs", 12, "app::main"),
    }
}

fn file_line_config(file: bool, line: bool) -> Config {
    Config::builder()
        .show_category(false)
        .show_thread_name(false)
        .show_function_name(false)
        .show_file_name(file)
        .show_line_number(line)
        .build()
}

#[test]
fn file_and_line() {
    let out = compose(&record("m"), &file_line_config(true, true), &now(), "main");
    assert_eq!(out, "[main.rs:12] m");
}

#[test]
fn file_only() {
    let out = compose(&record("m"), &file_line_config(true, false), &now(), "main");
    assert_eq!(out, "[main.rs] m");
}

#[test]
fn line_only() {
    let out = compose(&record("m"), &file_line_config(false, true), &now(), "main");
    assert_eq!(out, "[12] m");
}

#[test]
fn neither_file_nor_line() {
    let out = compose(&record("m"), &file_line_config(false, false), &now(), "main");
    assert_eq!(out, "m");
}

#[test]
fn default_config_scenario() {
    let out = compose(&record("App launched"), &Config::default(), &now(), "main");
    assert!(out.starts_with("📲 APP LIFECYCLE"));
    assert_eq!(out, "📲 APP LIFECYCLE [main] [main.rs:12] app::main App launched");
}

#[test]
fn empty_message_leaves_no_trailing_separator() {
    let out = compose(&record(""), &Config::default(), &now(), "main");
    assert_eq!(out, "📲 APP LIFECYCLE [main] [main.rs:12] app::main");
    assert!(!out.ends_with(' '));
}

#[test]
fn everything_hidden_and_empty_message_is_empty() {
    let config = Config::builder()
        .show_category(false)
        .show_thread_name(false)
        .show_file_name(false)
        .show_line_number(false)
        .show_function_name(false)
        .build();
    assert_eq!(compose(&record(""), &config, &now(), "main"), "");
}

#[test]
fn composition_is_deterministic() {
    let config = Config::builder().show_level(true).show_date(true).build();
    let first = compose(&record("same"), &config, &now(), "worker");
    let second = compose(&record("same"), &config, &now(), "worker");
    assert_eq!(first, second);
}

#[test]
fn date_and_level_sit_between_category_and_context() {
    let config = Config::builder()
        .show_level(true)
        .show_date(true)
        .timestamp(TimestampFormat::new("HH:mm:ss").zone(Zone::Utc))
        .build();
    let out = compose(&record("x"), &config, &now(), "io");
    assert_eq!(
        out,
        "📲 APP LIFECYCLE 21:59:58 [Debug] [io] [main.rs:12] app::main x"
    );
}

#[test]
fn unrenderable_timestamp_drops_only_the_date() {
    let config = Config::builder()
        .show_date(true)
        .show_level(true)
        .timestamp_pattern("yyyy QQQ")
        .build();
    let out = compose(&record("x"), &config, &now(), "main");
    assert_eq!(
        out,
        "📲 APP LIFECYCLE [Debug] [main] [main.rs:12] app::main x"
    );
}

#[test]
fn windows_paths_are_reduced_to_basename() {
    let r = Record {
        site: CallSite::new(r"C:\src\app\lib.rs", 3, ""),
        ..record("x")
    };
    let out = compose(&r, &file_line_config(true, true), &now(), "main");
    assert_eq!(out, "[lib.rs:3] x");
}
