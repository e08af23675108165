// src/tests/common.rs

//! Log file contents shared by several test modules.

/// Two entries, no traces.
pub const LOG_TWO_ENTRIES: &str = "\
2024-01-01 10:00:00,000 ERROR db - Connection failed: timeout
2024-01-01 10:00:01,000 INFO api - Request served
";

/// An `ERROR` with a two-line trace followed by an `INFO` without a trace.
pub const LOG_TRACE: &str = "\
2024-01-01 10:00:00,000 ERROR db - Crash
  at foo()
  at bar()
2024-01-01 10:00:01,000 INFO x - ok
";

/// A mix of levels, modules, traces, blank lines, and junk lines.
///
/// 7 entries: 3 `ERROR`, 2 `WARNING`, 1 `INFO`, 1 `DEBUG`.
pub const LOG_MIXED: &str = "\
preamble line before any header
2024-03-05 08:00:00,001 INFO app - Starting service
2024-03-05 08:00:01,002 DEBUG config - Loaded 12 keys
2024-03-05 08:00:02,003 WARNING cache - Cache miss: key user:42
2024-03-05 08:00:03,004 ERROR db - Connection failed: timeout after 30s
Traceback (most recent call last):
  File \"db.py\", line 10, in connect

    raise TimeoutError()
2024-03-05 08:00:04,005 ERROR db - Connection failed: refused
2024-03-05 08:00:05,006 WARNING api - Slow response - 2300ms
2024-03-05 08:00:06,007 ERROR api - KeyError: 'user_id'
";

/// Lines of [`LOG_MIXED`].
pub fn log_mixed_lines() -> Vec<&'static str> {
    LOG_MIXED.lines().collect()
}
