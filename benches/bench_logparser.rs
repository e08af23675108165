// bench_logparser.rs
//
// benchmark functions of `lslib::readers::logparser::LogParser` and the
// renderers
//

extern crate lslib;

use lslib::data::logentry::LogEntries;
use lslib::readers::logparser::LogParser;
use lslib::readers::summary::{
    summarize,
    Summary,
};
use lslib::report::ExportType;

extern crate criterion;
use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// count of entries in the generated log
const ENTRIES: usize = 2000;

/// Generate a log of `ENTRIES` entries, every fifth an `ERROR` with a
/// three-line trace.
fn generate_log() -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(ENTRIES * 2);
    for at in 0..ENTRIES {
        let ts = format!("2024-01-01 10:{:02}:{:02},{:03}", (at / 60) % 60, at % 60, at % 1000);
        match at % 5 {
            0 => {
                lines.push(format!("{} ERROR db - Connection failed: attempt {}", ts, at));
                lines.push(String::from("Traceback (most recent call last):"));
                lines.push(String::from("  File \"db.py\", line 10, in connect"));
                lines.push(String::from("    raise TimeoutError()"));
            }
            1 => lines.push(format!("{} WARNING cache - Cache miss: key {}", ts, at)),
            _ => lines.push(format!("{} INFO api - Request served in {}ms", ts, at % 300)),
        }
    }

    lines
}

#[inline(never)]
fn logparser_parse_lines(lines: &[String]) {
    let mut logparser = LogParser::new();
    let entries: LogEntries = logparser.parse_lines(lines);

    black_box(entries);
}

#[inline(never)]
fn render(
    export_type: ExportType,
    summary: &Summary,
) {
    let bytes = export_type.render(summary, "bench.log");

    black_box(bytes.is_ok());
}

// criterion runners

fn criterion_benchmark(c: &mut Criterion) {
    let lines: Vec<String> = generate_log();
    let mut logparser = LogParser::new();
    let summary: Summary = summarize(&logparser.parse_lines(&lines));

    let mut bg = c.benchmark_group("LogParser");
    bg.bench_function("logparser_parse_lines", |b| b.iter(|| logparser_parse_lines(&lines)));
    bg.finish();

    let mut bg = c.benchmark_group("render");
    for export_type in ExportType::ALL.iter() {
        if !export_type.is_available() {
            continue;
        }
        bg.bench_function(export_type.extension(), |b| b.iter(|| render(*export_type, &summary)));
    }
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
