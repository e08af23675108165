// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ile `Path` as passed by the user
pub type FPath = String;

/// Required ending of an input log file name.
pub const LOG_DOT_EXTENSION: &str = ".log";

/// Appended to the input file name without [`LOG_DOT_EXTENSION`] to create
/// an output report file name,
/// e.g. `app.log` becomes `app_report.html`.
pub const REPORT_SUFFIX: &str = "_report";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// counting and text
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// General-purpose counting type, e.g. count of entries per level.
pub type Count = u64;

/// NewLine as char
#[allow(non_upper_case_globals)]
pub const NLc: char = '\n';

/// Level token of an error entry.
pub const LEVEL_ERROR: &str = "ERROR";
/// Level token of a warning entry.
pub const LEVEL_WARNING: &str = "WARNING";
/// Level token of an informational entry.
pub const LEVEL_INFO: &str = "INFO";

/// Default size of the `error_types` and `warning_types` breakdowns.
pub const TOP_N_DEFAULT: usize = 10;

/// Stand-in for a timestamp when there are no entries.
///
/// Never a valid timestamp; consumers must not try to parse it.
pub const NOT_AVAILABLE: &str = "N/A";

/// Percentage of `count` to `total`.
///
/// Returns `0.0` if `total` is zero.
pub fn percent64(
    count: Count,
    total: Count,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

/// Format a percentage with one decimal place and a trailing `%`,
/// e.g. `"33.3%"`.
pub fn percent_string(
    count: Count,
    total: Count,
) -> String {
    format!("{:.1}%", percent64(count, total))
}
