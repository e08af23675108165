// src/report/html.rs

//! HTML report; one self-contained document with inline CSS.
//!
//! Content, in order:
//!
//! * summary statistic cards (total, errors, warnings, info, time range)
//! * level distribution table
//! * module activity table
//! * top error types table
//! * top warning types table
//! * all errors table, stack traces inline
//! * all warnings table, stack traces inline

use crate::common::Count;
use crate::data::logentry::LogEntry;
use crate::readers::summary::Summary;

use std::fmt::Write; // for `write!` to a `String`

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2em; color: #222; }
h1 { margin-bottom: 0.2em; }
.source { color: #666; margin-top: 0; }
.cards { display: flex; flex-wrap: wrap; gap: 1em; margin: 1.5em 0; }
.card { border: 1px solid #ddd; border-radius: 6px; padding: 0.8em 1.2em; min-width: 9em; }
.card .value { font-size: 1.6em; font-weight: bold; }
.card.error .value { color: #c0392b; }
.card.warning .value { color: #d68910; }
.card.info .value { color: #2471a3; }
table { border-collapse: collapse; margin-bottom: 2em; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.4em 0.6em; text-align: left; vertical-align: top; }
th { background: #f4f4f4; }
td.num { text-align: right; }
pre.trace { margin: 0; font-size: 0.85em; white-space: pre-wrap; }
.empty { color: #888; font-style: italic; }
"#;

/// Escape the five HTML special characters of `text`.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn card(
    out: &mut String,
    class: &str,
    label: &str,
    value: &str,
) {
    let _ = write!(
        out,
        "<div class=\"card {}\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
        class,
        html_escape(label),
        html_escape(value),
    );
}

fn table_head(
    out: &mut String,
    title: &str,
    columns: &[&str],
) {
    let _ = write!(out, "<h2>{}</h2>\n<table>\n<tr>", html_escape(title));
    for column in columns.iter() {
        let _ = write!(out, "<th>{}</th>", html_escape(column));
    }
    out.push_str("</tr>\n");
}

fn table_empty_row(
    out: &mut String,
    columns: usize,
    text: &str,
) {
    let _ = write!(out, "<tr><td class=\"empty\" colspan=\"{}\">{}</td></tr>\n", columns, html_escape(text));
}

fn count_table(
    out: &mut String,
    summary: &Summary,
    title: &str,
    key_column: &str,
    rows: &[(&str, Count)],
) {
    table_head(out, title, &[key_column, "Count", "Percentage"]);
    if rows.is_empty() {
        table_empty_row(out, 3, "No entries");
    }
    for (key, count) in rows.iter() {
        let _ = write!(
            out,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            html_escape(key),
            count,
            summary.percent_string(*count),
        );
    }
    out.push_str("</table>\n");
}

fn ranked_table(
    out: &mut String,
    title: &str,
    key_column: &str,
    rows: &[(String, Count)],
) {
    table_head(out, title, &["Rank", key_column, "Count"]);
    if rows.is_empty() {
        table_empty_row(out, 3, "None found");
    }
    for (rank, (key, count)) in rows.iter().enumerate() {
        let _ = write!(
            out,
            "<tr><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td></tr>\n",
            rank + 1,
            html_escape(key),
            count,
        );
    }
    out.push_str("</table>\n");
}

fn entry_table(
    out: &mut String,
    title: &str,
    entries: &[LogEntry],
    empty_text: &str,
) {
    table_head(out, title, &["Timestamp", "Module", "Message", "Stack Trace"]);
    if entries.is_empty() {
        table_empty_row(out, 4, empty_text);
    }
    for entry in entries.iter() {
        let trace: String = match &entry.stacktrace {
            Some(trace) => format!("<pre class=\"trace\">{}</pre>", html_escape(trace)),
            None => String::new(),
        };
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(&entry.timestamp),
            html_escape(&entry.module),
            html_escape(&entry.message),
            trace,
        );
    }
    out.push_str("</table>\n");
}

/// Render `summary` as an HTML document.
pub fn render(
    summary: &Summary,
    source_file: &str,
) -> Vec<u8> {
    defn!();
    let mut out = String::with_capacity(8192);
    let source = html_escape(source_file);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(out, "<title>Log Report: {}</title>\n", source);
    let _ = write!(out, "<style>{}</style>\n</head>\n<body>\n", STYLE);
    out.push_str("<h1>Log Analysis Report</h1>\n");
    let _ = write!(out, "<p class=\"source\">Source: {}</p>\n", source);

    out.push_str("<div class=\"cards\">\n");
    card(&mut out, "total", "Total Entries", &summary.total_entries.to_string());
    card(&mut out, "error", "Errors", &summary.error_count.to_string());
    card(&mut out, "warning", "Warnings", &summary.warning_count.to_string());
    card(&mut out, "info", "Info", &summary.info_count.to_string());
    card(&mut out, "time", "First Entry", summary.time_range.start());
    card(&mut out, "time", "Last Entry", summary.time_range.end());
    out.push_str("</div>\n");

    count_table(&mut out, summary, "Level Distribution", "Level", &summary.levels_by_count());
    count_table(&mut out, summary, "Module Activity", "Module", &summary.modules_by_count());
    ranked_table(&mut out, "Top Error Types", "Error Type", &summary.error_types);
    ranked_table(&mut out, "Top Warning Types", "Warning Type", &summary.warning_types);
    entry_table(&mut out, "All Errors", &summary.errors, "No errors found");
    entry_table(&mut out, "All Warnings", &summary.warnings, "No warnings found");

    out.push_str("</body>\n</html>\n");
    defx!("out.len() {}", out.len());

    out.into_bytes()
}
