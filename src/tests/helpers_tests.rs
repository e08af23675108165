// src/tests/helpers_tests.rs

//! tests for `readers/helpers.rs` functions

#![allow(non_snake_case)]

use crate::common::FPath;
use crate::debug::helpers::{
    create_temp_file_with_suffix,
    create_temp_log,
    ntf_fpath,
    tempdir,
};
use crate::readers::helpers::{
    has_log_extension,
    read_log_file,
    report_path,
    validate_log_path,
    UsageError,
};

use std::path::{
    Path,
    PathBuf,
};

use ::test_case::test_case;

#[test_case("app.log", true)]
#[test_case("/var/log/app.log", true; "absolute")]
#[test_case("app.prod.log", true; "dotted stem")]
#[test_case("app.LOG", false; "uppercase")]
#[test_case("app.log.gz", false; "compressed")]
#[test_case("app.txt", false)]
#[test_case("log", false; "no dot")]
#[test_case(".log", true; "only extension")]
#[test_case("logs/.log", true; "only extension in dir")]
#[test_case("logs/", false; "directory")]
fn test_has_log_extension(
    path: &str,
    expect: bool,
) {
    assert_eq!(has_log_extension(Path::new(path)), expect);
}

#[test_case("logs/app.log", "html", "logs/app_report.html")]
#[test_case("app.log", "json", "app_report.json")]
#[test_case("app.prod.log", "csv", "app.prod_report.csv"; "dotted stem")]
#[test_case(".log", "html", "_report.html"; "only extension")]
#[test_case("logs/.log", "pdf", "logs/_report.pdf"; "only extension in dir")]
fn test_report_path(
    input: &str,
    extension: &str,
    expect: &str,
) {
    assert_eq!(report_path(Path::new(input), extension), PathBuf::from(expect));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_validate_log_path_ok() {
    let ntf = create_temp_log("2024-01-01 10:00:00,000 INFO a - b\n");
    let path: FPath = ntf_fpath(&ntf);
    assert_eq!(validate_log_path(&path), Ok(PathBuf::from(&path)));
}

/// A file named just `.log` is a log file.
#[test]
fn test_validate_log_path_only_extension() {
    let dir = tempdir().unwrap();
    let path_log = dir.path().join(".log");
    std::fs::write(&path_log, "2024-01-01 10:00:00,000 INFO a - b\n").unwrap();
    let path: FPath = FPath::from(path_log.to_str().unwrap());
    assert_eq!(validate_log_path(&path), Ok(path_log.clone()));
    assert_eq!(report_path(&path_log, "json"), dir.path().join("_report.json"));
}

#[test]
fn test_validate_log_path_missing_extension() {
    let ntf = create_temp_file_with_suffix("data", ".txt");
    let path: FPath = ntf_fpath(&ntf);
    assert_eq!(validate_log_path(&path), Err(UsageError::MissingExtension(path.clone())));
}

/// The extension is checked before the file is looked for.
#[test]
fn test_validate_log_path_missing_extension_and_not_found() {
    let path = FPath::from("/nonexistent/dir/app.txt");
    assert_eq!(validate_log_path(&path), Err(UsageError::MissingExtension(path.clone())));
}

#[test]
fn test_validate_log_path_not_found() {
    let path = FPath::from("/nonexistent/dir/app.log");
    assert_eq!(validate_log_path(&path), Err(UsageError::NotFound(path.clone())));
}

#[test]
fn test_validate_log_path_not_a_file() {
    let dir = tempdir().unwrap();
    let path_dir = dir.path().join("dir.log");
    std::fs::create_dir(&path_dir).unwrap();
    let path: FPath = FPath::from(path_dir.to_str().unwrap());
    assert_eq!(validate_log_path(&path), Err(UsageError::NotAFile(path.clone())));
}

#[test]
fn test_read_log_file_lossy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.log");
    std::fs::write(&path, b"2024-01-01 10:00:00,000 INFO a - caf\xe9\n").unwrap();
    let text = read_log_file(&path).unwrap();
    assert_eq!(text, "2024-01-01 10:00:00,000 INFO a - caf\u{FFFD}\n");
}

#[test]
fn test_read_log_file_not_found() {
    assert!(read_log_file(Path::new("/nonexistent/dir/app.log")).is_err());
}

#[test]
fn test_UsageError_display() {
    let err = UsageError::MissingExtension(FPath::from("app.txt"));
    assert_eq!(err.to_string(), "file name must end with \".log\": \"app.txt\"");
    let err = UsageError::UnsupportedExport(String::from("xml"));
    assert!(err.to_string().contains("html, csv, json, pdf"));
}
