// src/data/logentry.rs

//! Implements a [`LogEntry`] struct.
//!
//! [`LogEntry`]: crate::data::logentry::LogEntry

use crate::common::{
    LEVEL_ERROR,
    LEVEL_INFO,
    LEVEL_WARNING,
    NLc,
};

use std::fmt;

use ::serde::{
    Deserialize,
    Serialize,
};

/// Sequence of [`LogEntry`] in file order.
pub type LogEntries = Vec<LogEntry>;

// --------
// LogEntry

/// A `LogEntry` is one structured event of an application log; one header
/// line and the trace lines that followed it.
///
/// The `timestamp` is kept as the exact text of the header, e.g.
/// `"2024-01-01 10:00:00,000"`. It is never parsed into a datetime.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp text, `YYYY-MM-DD HH:MM:SS,mmm`.
    pub timestamp: String,
    /// Level word, e.g. `ERROR`. Any word is accepted.
    pub level: String,
    /// Module word naming the emitting component.
    pub module: String,
    /// Remainder of the header line after the `" - "` separator.
    pub message: String,
    /// Trace lines joined by newline. `None` if no trace lines followed the
    /// header; never `Some("")`.
    pub stacktrace: Option<String>,
}

impl LogEntry {
    /// Create a `LogEntry` without a stack trace.
    pub fn new(
        timestamp: &str,
        level: &str,
        module: &str,
        message: &str,
    ) -> LogEntry {
        LogEntry {
            timestamp: String::from(timestamp),
            level: String::from(level),
            module: String::from(module),
            message: String::from(message),
            stacktrace: None,
        }
    }

    /// Attach the `lines` as the stack trace.
    ///
    /// An empty `lines` leaves the stack trace absent.
    pub fn with_trace_lines(
        mut self,
        lines: &[&str],
    ) -> LogEntry {
        if lines.is_empty() {
            self.stacktrace = None;
        } else {
            self.stacktrace = Some(lines.join("\n"));
        }

        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LEVEL_ERROR
    }

    pub fn is_warning(&self) -> bool {
        self.level == LEVEL_WARNING
    }

    pub fn is_info(&self) -> bool {
        self.level == LEVEL_INFO
    }

    pub fn has_stacktrace(&self) -> bool {
        self.stacktrace.is_some()
    }

    /// Count of trace lines, zero if there is no stack trace.
    pub fn count_trace_lines(&self) -> usize {
        match &self.stacktrace {
            Some(trace) => trace.split(NLc).count(),
            None => 0,
        }
    }

    /// The stack trace as a `str`, empty if absent.
    pub fn stacktrace_str(&self) -> &str {
        match &self.stacktrace {
            Some(trace) => trace.as_str(),
            None => "",
        }
    }
}

/// Reconstructs the header line, e.g.
/// `2024-01-01 10:00:00,000 ERROR db - Crash`.
/// The stack trace is not included.
impl fmt::Display for LogEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{} {} {} - {}", self.timestamp, self.level, self.module, self.message)
    }
}
