//! Tests for the process-wide printer. Kept in one test so install order is deterministic.

use printlog::{
    Category, Config, Error, ExecutionContext, MemorySink, Platform, Printer, ProcessIdentity,
};

struct Main;

impl Platform for Main {
    fn current_context(&self) -> ExecutionContext {
        ExecutionContext {
            is_main: true,
            ..ExecutionContext::default()
        }
    }

    fn process_identity(&self) -> ProcessIdentity {
        ProcessIdentity {
            id: "global".to_string(),
            name: "global".to_string(),
        }
    }
}

#[test]
fn install_routes_argumentless_macros() {
    let sink = MemorySink::new();
    let printer = Printer::builder()
        .config(
            Config::builder()
                .show_file_name(false)
                .show_line_number(false)
                .disabled_categories([Category::Cache])
                .build(),
        )
        .platform(Main)
        .sink(sink.clone())
        .build();

    printlog::install(printer).unwrap();

    printlog::debug!("booted", Category::AppLifecycle);
    printlog::warning!("plain");
    printlog::error!();
    printlog::debug!("hidden", Category::Cache);
    printlog::global().warning("method form", Category::Ui);

    assert_eq!(
        sink.lines(),
        vec![
            "📲 APP LIFECYCLE [main] global::install_routes_argumentless_macros booted".to_string(),
            "🧠 LOGIC [main] global::install_routes_argumentless_macros plain".to_string(),
            "🧠 LOGIC [main] global::install_routes_argumentless_macros".to_string(),
            "🎨 UI [main] method form".to_string(),
        ]
    );

    let again = printlog::install(Printer::default());
    assert!(matches!(again, Err(Error::AlreadyInstalled)));
}
