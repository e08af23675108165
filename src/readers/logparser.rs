// src/readers/logparser.rs

//! Implements a [`LogParser`], the driver of deriving [`LogEntry`s] from
//! lines of text.
//!
//! The parser has two phases per entry:
//!
//! 1. _seeking a header_; blank lines are skipped, a non-blank line that is
//!    not a header line is dropped.
//! 2. _collecting a trace_; after a header line, every following line up to
//!    the next line that begins with a date is trace content of that header's
//!    entry.
//!
//! The date-prefix check that ends phase 2 is deliberately looser than the
//! full header pattern. A malformed line like
//! `"2024-01-01 10:00:00 broken"` ends the trace and is then dropped by
//! phase 1. Otherwise one malformed header would swallow the rest of the
//! file as trace content.
//!
//! [`LogEntry`s]: crate::data::logentry::LogEntry

#![allow(non_snake_case)]

use crate::common::Count;
use crate::data::logentry::{
    LogEntries,
    LogEntry,
};
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::fmt;

use ::lazy_static::lazy_static;
use ::more_asserts::debug_assert_le;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// header matching
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Regular expression of a header line.
///
/// Capture groups are, in order, timestamp, level, module, message.
pub const HEADER_PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2},\d{3})\s+(\w+)\s+(\w+)\s+-\s+(.+)$";

/// Regular expression of the date prefix that ends a trace.
pub const DATE_PREFIX_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}";

/// Regular expression of a line ending; `"\r\n"`, a lone `"\r"`, or `"\n"`.
pub const LINE_END_PATTERN: &str = r"\r\n|\r|\n";

lazy_static! {
    static ref REGEX_HEADER: Regex = Regex::new(HEADER_PATTERN).unwrap();
    static ref REGEX_DATE_PREFIX: Regex = Regex::new(DATE_PREFIX_PATTERN).unwrap();
    static ref REGEX_LINE_END: Regex = Regex::new(LINE_END_PATTERN).unwrap();
}

/// Match a trimmed `line` as a header line, returning a new [`LogEntry`]
/// without a stack trace.
///
/// [`LogEntry`]: crate::data::logentry::LogEntry
pub fn parse_header(line: &str) -> Option<LogEntry> {
    let captures = REGEX_HEADER.captures(line)?;
    // all four groups are non-optional in `HEADER_PATTERN`
    let timestamp = captures.get(1)?.as_str();
    let level = captures.get(2)?.as_str();
    let module = captures.get(3)?.as_str();
    let message = captures.get(4)?.as_str();

    Some(LogEntry::new(timestamp, level, module, message))
}

/// Does the trimmed `line` begin with a `YYYY-MM-DD` date?
pub fn is_date_prefixed(line: &str) -> bool {
    REGEX_DATE_PREFIX.is_match(line)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogParser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Derives [`LogEntry`s] from lines of text and counts what happened to each
/// line.
///
/// A `LogParser` does no I/O; the caller reads the file.
///
/// [`LogEntry`s]: crate::data::logentry::LogEntry
#[derive(Default)]
pub struct LogParser {
    /// count of lines passed in
    lines: Count,
    /// count of blank lines, in either phase
    lines_blank: Count,
    /// count of non-blank lines that were neither header nor trace
    lines_dropped: Count,
    /// count of lines absorbed into a stack trace
    lines_trace: Count,
    /// count of `LogEntry` created
    entries: Count,
}

impl fmt::Debug for LogParser {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LogParser")
            .field("lines", &self.lines)
            .field("lines_blank", &self.lines_blank)
            .field("lines_dropped", &self.lines_dropped)
            .field("lines_trace", &self.lines_trace)
            .field("entries", &self.entries)
            .finish()
    }
}

impl LogParser {
    pub fn new() -> LogParser {
        LogParser::default()
    }

    /// Derive the [`LogEntries`] from `lines`, in order.
    ///
    /// Lines that match no header and follow no header are dropped.
    /// Never fails; zero headers returns an empty `LogEntries`.
    ///
    /// [`LogEntries`]: crate::data::logentry::LogEntries
    pub fn parse_lines<S: AsRef<str>>(
        &mut self,
        lines: &[S],
    ) -> LogEntries {
        defn!("(lines.len() {})", lines.len());
        let mut entries = LogEntries::new();
        let mut at: usize = 0;
        self.lines += lines.len() as Count;

        while at < lines.len() {
            let line: &str = lines[at].as_ref().trim();
            if line.is_empty() {
                self.lines_blank += 1;
                at += 1;
                continue;
            }
            let entry: LogEntry = match parse_header(line) {
                Some(entry) => entry,
                None => {
                    defo!("drop line {} {:?}", at, str_to_String_noraw(line));
                    self.lines_dropped += 1;
                    at += 1;
                    continue;
                }
            };
            // collect the trace; `at_next` stops on the next date-prefixed
            // line, which is not consumed
            let mut trace: Vec<&str> = Vec::new();
            let mut at_next: usize = at + 1;
            while at_next < lines.len() {
                let line_next: &str = lines[at_next].as_ref().trim();
                if is_date_prefixed(line_next) {
                    break;
                }
                if line_next.is_empty() {
                    self.lines_blank += 1;
                } else {
                    trace.push(line_next);
                }
                at_next += 1;
            }
            defo!("entry at line {}, {} trace lines", at, trace.len());
            self.lines_trace += trace.len() as Count;
            self.entries += 1;
            entries.push(entry.with_trace_lines(&trace));
            at = at_next;
        }
        debug_assert_le!(
            self.lines_blank + self.lines_dropped + self.lines_trace + self.entries,
            self.lines,
            "more lines accounted for than passed in"
        );
        defx!("return {} entries", entries.len());

        entries
    }

    /// Statistics of all lines this `LogParser` has processed.
    pub fn summary(&self) -> SummaryLogParser {
        SummaryLogParser {
            LogParser_lines: self.lines,
            LogParser_lines_blank: self.lines_blank,
            LogParser_lines_dropped: self.lines_dropped,
            LogParser_lines_trace: self.lines_trace,
            LogParser_entries: self.entries,
        }
    }
}

/// Summarized statistics of a [`LogParser`], for CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SummaryLogParser {
    pub LogParser_lines: Count,
    pub LogParser_lines_blank: Count,
    pub LogParser_lines_dropped: Count,
    pub LogParser_lines_trace: Count,
    pub LogParser_entries: Count,
}

/// Derive the [`LogEntries`] from `lines`. See [`LogParser::parse_lines`].
///
/// [`LogEntries`]: crate::data::logentry::LogEntries
pub fn parse<S: AsRef<str>>(lines: &[S]) -> LogEntries {
    LogParser::new().parse_lines(lines)
}

/// Split `text` into lines at each [`LINE_END_PATTERN`].
///
/// A final line ending does not begin another line, so `"a\nb\n"` is two
/// lines, same as `"a\nb"`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = REGEX_LINE_END.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    defñ!("{} lines", lines.len());

    lines
}

/// [`split_lines`] of `text` then [`parse`] them.
pub fn parse_str(text: &str) -> LogEntries {
    let lines: Vec<&str> = split_lines(text);

    parse(&lines)
}
