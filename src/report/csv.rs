// src/report/csv.rs

//! CSV report.
//!
//! A sequence of labeled sections. Each section is a label row, a header row,
//! then data rows. A blank line separates sections.
//!
//! 1. `Summary`
//! 2. `Level Distribution`
//! 3. `Module Activity`
//! 4. `Top Error Types`
//! 5. `Top Warning Types`
//! 6. `All Errors`
//! 7. `All Warnings`
//!
//! Rows differ in length so the [`csv::Writer`] is `flexible`. Fields are
//! quoted only when needed.
//!
//! [`csv::Writer`]: https://docs.rs/csv/1.3.1/csv/struct.Writer.html

use crate::common::Count;
use crate::data::logentry::LogEntry;
use crate::readers::summary::Summary;
use crate::report::RenderError;

use std::io::Write; // for `Vec<u8>.write_all`

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

type CsvWriter = ::csv::Writer<Vec<u8>>;

/// Start a new section; a blank line (unless first), then the label row
/// and header row.
fn section(
    w: &mut CsvWriter,
    first: bool,
    label: &str,
    header: &[&str],
) -> Result<(), RenderError> {
    if !first {
        // `csv::Writer` buffers; flush before writing to the inner `Vec`
        w.flush()?;
        w.get_mut().write_all(b"\n")?;
    }
    w.write_record([label])?;
    w.write_record(header)?;

    Ok(())
}

fn count_rows(
    w: &mut CsvWriter,
    summary: &Summary,
    rows: &[(&str, Count)],
) -> Result<(), RenderError> {
    for (key, count) in rows.iter() {
        w.write_record([key.to_string(), count.to_string(), summary.percent_string(*count)])?;
    }

    Ok(())
}

fn ranked_rows(
    w: &mut CsvWriter,
    rows: &[(String, Count)],
) -> Result<(), RenderError> {
    for (key, count) in rows.iter() {
        w.write_record([key.as_str(), count.to_string().as_str()])?;
    }

    Ok(())
}

fn entry_rows(
    w: &mut CsvWriter,
    entries: &[LogEntry],
    with_stacktrace: bool,
) -> Result<(), RenderError> {
    for entry in entries.iter() {
        if with_stacktrace {
            w.write_record([
                entry.timestamp.as_str(),
                entry.module.as_str(),
                entry.message.as_str(),
                entry.stacktrace_str(),
            ])?;
        } else {
            w.write_record([entry.timestamp.as_str(), entry.module.as_str(), entry.message.as_str()])?;
        }
    }

    Ok(())
}

/// Render `summary` as CSV.
pub fn render(
    summary: &Summary,
    source_file: &str,
) -> Result<Vec<u8>, RenderError> {
    defn!();
    let mut w: CsvWriter = ::csv::WriterBuilder::new()
        .flexible(true)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(4096));

    section(&mut w, true, "Summary", &["Metric", "Value"])?;
    w.write_record(["Source File", source_file])?;
    w.write_record(["Total Entries", summary.total_entries.to_string().as_str()])?;
    w.write_record(["Errors", summary.error_count.to_string().as_str()])?;
    w.write_record(["Warnings", summary.warning_count.to_string().as_str()])?;
    w.write_record(["Info", summary.info_count.to_string().as_str()])?;
    w.write_record(["Time Range Start", summary.time_range.start()])?;
    w.write_record(["Time Range End", summary.time_range.end()])?;

    section(&mut w, false, "Level Distribution", &["Level", "Count", "Percentage"])?;
    count_rows(&mut w, summary, &summary.levels_by_count())?;

    section(&mut w, false, "Module Activity", &["Module", "Count", "Percentage"])?;
    count_rows(&mut w, summary, &summary.modules_by_count())?;

    section(&mut w, false, "Top Error Types", &["Error Type", "Count"])?;
    ranked_rows(&mut w, &summary.error_types)?;

    section(&mut w, false, "Top Warning Types", &["Warning Type", "Count"])?;
    ranked_rows(&mut w, &summary.warning_types)?;

    section(&mut w, false, "All Errors", &["Timestamp", "Module", "Message", "Stack Trace"])?;
    entry_rows(&mut w, &summary.errors, true)?;

    section(&mut w, false, "All Warnings", &["Timestamp", "Module", "Message"])?;
    entry_rows(&mut w, &summary.warnings, false)?;

    let bytes: Vec<u8> = w
        .into_inner()
        .map_err(|err| RenderError::Io(err.into_error()))?;
    defx!("bytes.len() {}", bytes.len());

    Ok(bytes)
}
