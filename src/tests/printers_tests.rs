// src/tests/printers_tests.rs

//! tests for `src/printer/printers.rs` and `src/printer/summary.rs`

#![allow(non_snake_case)]

use crate::readers::logparser::LogParser;
use crate::readers::summary::{
    summarize,
    Summary,
};
use crate::printer::printers::{
    color_level,
    print_colored,
    Color,
    COLOR_DEFAULT,
    COLOR_ERROR,
    COLOR_INFO,
    COLOR_WARNING,
};
use crate::printer::summary::print_summary;
use crate::tests::common::log_mixed_lines;

use ::termcolor::Buffer;
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("ERROR", COLOR_ERROR)]
#[test_case("WARNING", COLOR_WARNING)]
#[test_case("INFO", COLOR_INFO)]
#[test_case("DEBUG", COLOR_DEFAULT)]
fn test_color_level(
    level: &str,
    expect: Color,
) {
    assert_eq!(color_level(level), expect);
}

#[test]
fn test_print_colored_no_color() {
    let mut buffer = Buffer::no_color();
    print_colored(COLOR_ERROR, b"hello", &mut buffer).unwrap();
    assert_eq!(buffer.as_slice(), b"hello");
}

#[test]
fn test_print_colored_ansi() {
    let mut buffer = Buffer::ansi();
    print_colored(COLOR_ERROR, b"hello", &mut buffer).unwrap();
    let text = String::from_utf8_lossy(buffer.as_slice()).into_owned();
    assert!(text.contains("hello"));
    assert!(text.starts_with('\x1b'), "expected an escape sequence {:?}", text);
}

fn print_summary_string(
    summary: &Summary,
    with_parser: Option<&LogParser>,
) -> String {
    let mut buffer = Buffer::no_color();
    let slp = with_parser.map(|logparser| logparser.summary());
    print_summary(&mut buffer, summary, "mixed.log", slp.as_ref()).unwrap();

    String::from_utf8(buffer.into_inner()).unwrap()
}

#[test]
fn test_print_summary() {
    let lines = log_mixed_lines();
    let mut logparser = LogParser::new();
    let entries = logparser.parse_lines(&lines);
    let summary: Summary = summarize(&entries);
    let text = print_summary_string(&summary, Some(&logparser));
    assert!(text.starts_with("Summary of \"mixed.log\"\n"), "{}", text);
    assert!(text.contains("entries         : 7\n"), "{}", text);
    assert!(text.contains("ERROR           : 3 (42.9%)\n"));
    assert!(text.contains("modules         : 5\n"));
    assert!(text.contains("time range      : 2024-03-05 08:00:00,001 … 2024-03-05 08:00:06,007\n"));
    assert!(text.contains(" 1. Connection failed (2)\n"));
    assert!(text.contains("lines           : 12 (blank 1, trace 3, dropped 1)\n"));
}

#[test]
fn test_print_summary_empty() {
    let summary: Summary = summarize(&[]);
    let text = print_summary_string(&summary, None);
    assert!(text.contains("entries         : 0\n"));
    assert!(text.contains("time range      : N/A\n"));
    assert!(text.contains("top errors      : (none)\n"));
    assert!(text.contains("top warnings    : (none)\n"));
    assert!(!text.contains("lines"));
}
