// tests/logsense_tests.rs

//! End-to-end tests of the _logsense_ program.

#![allow(non_snake_case)]

extern crate lslib;

use std::path::{
    Path,
    PathBuf,
};
use std::process::{
    Command,
    Output,
};

use ::lslib::readers::logparser::parse_str;
use ::lslib::readers::summary::summarize;
use ::lslib::report::json::from_json;
use ::lslib::report::ExportType;
use ::tempfile::TempDir;

const LOG_APP: &str = "\
2024-01-01 10:00:00,000 INFO api - Request served
2024-01-01 10:00:01,000 ERROR db - Connection failed: timeout
Traceback (most recent call last):
  File \"db.py\", line 10, in connect
2024-01-01 10:00:02,000 WARNING cache - Cache miss: key 7
2024-01-01 10:00:03,000 ERROR db - Connection failed: refused
";

fn write_log(
    dir: &TempDir,
    name: &str,
    data: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();

    path
}

fn run_logsense(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logsense"))
        .args(args)
        .arg("--color=never")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_logsense_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.log", LOG_APP);
    let output = run_logsense(&[path_str(&path), "-e", "json"]);
    assert!(output.status.success(), "{:?}", output);

    let path_report = dir.path().join("app_report.json");
    let report = from_json(&std::fs::read(&path_report).unwrap()).unwrap();
    assert_eq!(report.source_file, path_str(&path));
    assert_eq!(report.summary, summarize(&parse_str(LOG_APP)));
    assert_eq!(report.summary.total_entries, 4);
    assert_eq!(report.summary.error_types, vec![(String::from("Connection failed"), 2)]);
    assert_eq!(
        report.summary.errors[0].stacktrace.as_deref(),
        Some("Traceback (most recent call last):\nFile \"db.py\", line 10, in connect")
    );
}

#[test]
fn test_logsense_many_reports() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.log", LOG_APP);
    let output = run_logsense(&[path_str(&path), "-e", "html", "--export", "csv", "-e", "json", "-e", "html"]);
    assert!(output.status.success(), "{:?}", output);
    for export_type in [ExportType::Html, ExportType::Csv, ExportType::Json] {
        let path_report = export_type.report_path(&path);
        assert!(path_report.is_file(), "missing {:?}", path_report);
    }
}

#[test]
fn test_logsense_pdf_report() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.log", LOG_APP);
    let output = run_logsense(&[path_str(&path), "-e", "pdf", "-e", "csv"]);
    let path_pdf = dir.path().join("app_report.pdf");
    // the other report is written either way
    assert!(dir.path().join("app_report.csv").is_file());
    if ExportType::Pdf.is_available() {
        assert!(output.status.success(), "{:?}", output);
        let bytes = std::fs::read(&path_pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    } else {
        assert!(!output.status.success());
        assert!(!path_pdf.exists());
    }
}

#[test]
fn test_logsense_empty_log() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "empty.log", "no headers here\n\n");
    let output = run_logsense(&[path_str(&path), "-e", "csv", "--summary"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("entries         : 0"), "{}", stdout);
    let text = std::fs::read_to_string(dir.path().join("empty_report.csv")).unwrap();
    assert!(text.contains("Total Entries,0\n"));
    assert!(text.contains("Time Range Start,N/A\n"));
}

#[test]
fn test_logsense_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.txt", LOG_APP);
    let output = run_logsense(&[path_str(&path), "-e", "json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".log"), "{}", stderr);
    assert!(!dir.path().join("app_report.json").exists());
}

#[test]
fn test_logsense_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.log");
    let output = run_logsense(&[path_str(&path), "-e", "json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "{}", stderr);
}

#[test]
fn test_logsense_unsupported_export() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.log", LOG_APP);
    let output = run_logsense(&[path_str(&path), "-e", "xml"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("app_report.xml").exists());
}

#[test]
fn test_logsense_export_required() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "app.log", LOG_APP);
    let output = run_logsense(&[path_str(&path)]);
    assert!(!output.status.success());
}
