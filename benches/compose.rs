use chrono::{FixedOffset, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use printlog::{
    ApiOutcome, CallSite, Category, Config, Level, MemorySink, Printer, Record, TimestampFormat,
    compose,
};
use std::hint::black_box;

fn record() -> Record<'static> {
    Record {
        level: Level::Warning,
        category: Category::Network,
        message: "Connection timed out after 3 retries",
        site: CallSite::new("src/net/client.rs", 214, "app::net::Client::connect"),
    }
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let now = FixedOffset::east_opt(0)
        .and_then(|tz| tz.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).single())
        .unwrap();

    let defaults = Config::default();
    group.bench_function("defaults", |b| {
        b.iter(|| compose(black_box(&record()), &defaults, &now, "main"));
    });

    let everything = Config::builder().show_level(true).show_date(true).build();
    group.bench_function("all_fields", |b| {
        b.iter(|| compose(black_box(&record()), &everything, &now, "main"));
    });

    group.finish();
}

fn bench_timestamp(c: &mut Criterion) {
    let format = TimestampFormat::default();
    let now = format.now();
    c.bench_function("TimestampFormat::format", |b| {
        b.iter(|| format.format(black_box(&now)));
    });
    c.bench_function("TimestampFormat::new", |b| {
        b.iter(|| TimestampFormat::new(black_box("EEEE, d MMMM yyyy 'at' HH:mm:ss.SSS ZZZZZ")));
    });
}

fn bench_filter(c: &mut Criterion) {
    let config = Config::builder()
        .disabled_categories([Category::Api(ApiOutcome::Error), Category::Cache])
        .build();
    c.bench_function("Config::is_enabled", |b| {
        b.iter(|| config.is_enabled(black_box(&Category::Api(ApiOutcome::Error))));
    });

    let printer = Printer::builder().config(config).sink(MemorySink::new()).build();
    c.bench_function("Printer::debug filtered", |b| {
        b.iter(|| printer.debug(black_box("dropped"), Category::Cache));
    });
}

criterion_group!(benches, bench_compose, bench_timestamp, bench_filter);
criterion_main!(benches);
