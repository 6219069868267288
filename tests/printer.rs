//! Tests for the printer facade.

use printlog::sink::Captured;
use printlog::{
    ApiOutcome, CallSite, Category, Config, Entry, ExecutionContext, Level, MemorySink, Platform,
    Printer, ProcessIdentity, Record, Sink,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

struct FakePlatform;

impl Platform for FakePlatform {
    fn current_context(&self) -> ExecutionContext {
        ExecutionContext {
            is_main: true,
            ..ExecutionContext::default()
        }
    }

    fn process_identity(&self) -> ProcessIdentity {
        ProcessIdentity {
            id: "com.example.fake".to_string(),
            name: "Fake".to_string(),
        }
    }
}

/// Counts every call so tests can prove the sink was never touched.
#[derive(Clone, Default)]
struct CountingSink(Arc<AtomicUsize>);

impl Sink for CountingSink {
    fn write(&self, _entry: &Entry<'_>) -> Result<(), printlog::Error> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn flush(&self) -> Result<(), printlog::Error> {
        Ok(())
    }
}

struct FailingSink;

impl Sink for FailingSink {
    fn write(&self, _entry: &Entry<'_>) -> Result<(), printlog::Error> {
        Err(std::io::Error::other("disk gone").into())
    }

    fn flush(&self) -> Result<(), printlog::Error> {
        Err(std::io::Error::other("disk gone").into())
    }
}

fn printer_with(config: Config, sink: &MemorySink) -> Printer {
    Printer::builder()
        .config(config)
        .platform(FakePlatform)
        .sink(sink.clone())
        .build()
}

#[test]
fn builder_default_has_no_sinks() {
    let printer = Printer::builder().build();
    assert_eq!(printer.sink_count(), 0);
    assert_eq!(printer.config(), &Config::default());
}

#[test]
fn new_attaches_terminal() {
    assert_eq!(Printer::new(Config::default()).sink_count(), 1);
}

#[test]
fn builder_multiple_sinks() {
    let printer = Printer::builder()
        .terminal()
        .colors(false)
        .done()
        .sink(MemorySink::new())
        .forward_to_log()
        .build();
    assert_eq!(printer.sink_count(), 3);
}

#[test]
fn app_launched_scenario() {
    let sink = MemorySink::new();
    let printer = printer_with(Config::default(), &sink);

    printer.debug("App launched", Category::AppLifecycle);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("📲 APP LIFECYCLE [main] [printer.rs:"));
    assert!(line.ends_with("] App launched"));
}

#[test]
fn filtered_category_never_reaches_sink() {
    let counter = CountingSink::default();
    let printer = Printer::builder()
        .config(Config::builder().enabled_categories([Category::Ui]).build())
        .platform(FakePlatform)
        .sink(counter.clone())
        .build();

    printer.warning("x", Category::Logic);

    assert_eq!(counter.0.load(Ordering::SeqCst), 0);
}

#[test]
fn deny_list_beats_full_allow_list() {
    let sink = MemorySink::new();
    let config = Config::builder()
        .enabled_categories(Category::all())
        .disabled_categories([Category::Api(ApiOutcome::Error)])
        .build();
    let printer = printer_with(config, &sink);

    assert!(!printer.is_enabled(&Category::Api(ApiOutcome::Error)));
    printer.error("boom", Category::Api(ApiOutcome::Error));
    printer.error("fine", Category::Api(ApiOutcome::Success));

    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].ends_with("fine"));
}

#[test]
fn entries_carry_level_and_category() {
    let sink = MemorySink::new();
    let printer = printer_with(Config::builder().show_file_name(false).show_line_number(false).build(), &sink);

    printer.warning("slow", Category::Network);

    assert_eq!(
        sink.entries(),
        vec![Captured {
            level: Level::Warning,
            category: Category::Network,
            line: "🌐 NETWORK [main] slow".to_string(),
        }]
    );
}

#[test]
fn log_at_uses_explicit_site() {
    let sink = MemorySink::new();
    let printer = printer_with(Config::default(), &sink);

    printer.log_at(
        Level::Error,
        "denied",
        Category::Auth,
        CallSite::new("src/auth/token.rs", 88, "app::auth::refresh"),
    );

    assert_eq!(
        sink.lines(),
        vec!["🔐 AUTH [main] [token.rs:88] app::auth::refresh denied".to_string()]
    );
}

#[test]
fn format_reports_filtered_records_as_none() {
    let printer = Printer::builder()
        .config(Config::builder().disabled_categories([Category::Cache]).build())
        .platform(FakePlatform)
        .build();
    let record = Record {
        level: Level::Debug,
        category: Category::Cache,
        message: "hit",
        site: CallSite::default(),
    };
    assert_eq!(printer.format(&record), None);
    let record = Record {
        category: Category::Storage,
        ..record
    };
    assert!(printer.format(&record).is_some());
}

#[test]
fn failing_sink_does_not_stop_others() {
    let sink = MemorySink::new();
    let printer = Printer::builder()
        .platform(FakePlatform)
        .sink(FailingSink)
        .sink(sink.clone())
        .build();

    printer.error("still logged", Category::Storage);

    assert_eq!(sink.len(), 1);
    assert!(printer.flush().is_err());
}

#[test]
fn concurrent_logging_from_many_threads() {
    let sink = MemorySink::new();
    let printer = Arc::new(printer_with(Config::default(), &sink));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let printer = Arc::clone(&printer);
            thread::spawn(move || {
                for _ in 0..25 {
                    printer.debug(&format!("worker {i}"), Category::Logic);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.len(), 200);
}

#[test]
fn std_platform_names_spawned_threads() {
    let sink = MemorySink::new();
    let printer = Arc::new(
        Printer::builder()
            .config(Config::builder().show_file_name(false).show_line_number(false).build())
            .sink(sink.clone())
            .build(),
    );

    let worker = Arc::clone(&printer);
    thread::Builder::new()
        .name("uploader".to_string())
        .spawn(move || worker.debug("sent", Category::Network))
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(sink.lines(), vec!["🌐 NETWORK [uploader] sent".to_string()]);
}
