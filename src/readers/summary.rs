// src/readers/summary.rs

//! Implements the [`Summary`] aggregate of [`LogEntry`s] and the
//! [`summarize`] fold that derives it.
//!
//! [`LogEntry`s]: crate::data::logentry::LogEntry

use crate::common::{
    percent64,
    percent_string,
    Count,
    LEVEL_ERROR,
    LEVEL_INFO,
    LEVEL_WARNING,
    NOT_AVAILABLE,
    TOP_N_DEFAULT,
};
use crate::data::logentry::{
    LogEntries,
    LogEntry,
};
use crate::data::serde_utils::{
    deserialize_ranked,
    serialize_ranked,
    RankedCounts,
};

use std::collections::{
    BTreeMap,
    HashMap,
};

use ::itertools::Itertools; // for `sorted_by`
use ::more_asserts::debug_assert_le;
use ::serde::{
    Deserialize,
    Serialize,
};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Map of a key (level, module) to the count of entries with that key.
///
/// Ordered by key so every rendering lists keys the same way.
pub type MapCounts = BTreeMap<String, Count>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TimeRange
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Timestamps of the first and last entry, in file order.
///
/// Serializes as `{"start": …, "end": …}`; [`NotAvailable`] serializes both
/// ends as [`NOT_AVAILABLE`].
///
/// [`NotAvailable`]: TimeRange::NotAvailable
/// [`NOT_AVAILABLE`]: crate::common::NOT_AVAILABLE
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "TimeRangeRepr", into = "TimeRangeRepr")]
pub enum TimeRange {
    /// There were no entries.
    #[default]
    NotAvailable,
    Available {
        start: String,
        end: String,
    },
}

#[derive(Clone, Serialize, Deserialize)]
struct TimeRangeRepr {
    start: String,
    end: String,
}

impl From<TimeRange> for TimeRangeRepr {
    fn from(time_range: TimeRange) -> TimeRangeRepr {
        match time_range {
            TimeRange::NotAvailable => TimeRangeRepr {
                start: String::from(NOT_AVAILABLE),
                end: String::from(NOT_AVAILABLE),
            },
            TimeRange::Available { start, end } => TimeRangeRepr { start, end },
        }
    }
}

impl From<TimeRangeRepr> for TimeRange {
    fn from(repr: TimeRangeRepr) -> TimeRange {
        if repr.start == NOT_AVAILABLE || repr.end == NOT_AVAILABLE {
            return TimeRange::NotAvailable;
        }
        TimeRange::Available {
            start: repr.start,
            end: repr.end,
        }
    }
}

impl TimeRange {
    /// `TimeRange` of the first and last of `entries`.
    pub fn from_entries(entries: &[LogEntry]) -> TimeRange {
        match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => TimeRange::Available {
                start: first.timestamp.clone(),
                end: last.timestamp.clone(),
            },
            _ => TimeRange::NotAvailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TimeRange::Available { .. })
    }

    /// Start timestamp, or [`NOT_AVAILABLE`].
    ///
    /// [`NOT_AVAILABLE`]: crate::common::NOT_AVAILABLE
    pub fn start(&self) -> &str {
        match self {
            TimeRange::Available { start, .. } => start.as_str(),
            TimeRange::NotAvailable => NOT_AVAILABLE,
        }
    }

    /// End timestamp, or [`NOT_AVAILABLE`].
    ///
    /// [`NOT_AVAILABLE`]: crate::common::NOT_AVAILABLE
    pub fn end(&self) -> &str {
        match self {
            TimeRange::Available { end, .. } => end.as_str(),
            TimeRange::NotAvailable => NOT_AVAILABLE,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Aggregate statistics of one file's [`LogEntry`s].
///
/// Derived once by [`summarize`] and never changed afterwards. Every
/// report renderer reads the same `Summary`.
///
/// [`LogEntry`s]: crate::data::logentry::LogEntry
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_entries: Count,
    pub level_counts: MapCounts,
    pub module_counts: MapCounts,
    pub error_count: Count,
    pub warning_count: Count,
    pub info_count: Count,
    /// Top error message prefixes, highest count first.
    #[serde(serialize_with = "serialize_ranked", deserialize_with = "deserialize_ranked")]
    pub error_types: RankedCounts,
    /// Top warning message prefixes, highest count first.
    #[serde(serialize_with = "serialize_ranked", deserialize_with = "deserialize_ranked")]
    pub warning_types: RankedCounts,
    pub time_range: TimeRange,
    /// Every `ERROR` entry, unrestricted.
    pub errors: LogEntries,
    /// Every `WARNING` entry, unrestricted.
    pub warnings: LogEntries,
}

impl Summary {
    /// Percentage of `count` to `total_entries`; `0.0` when there are no
    /// entries.
    pub fn percent(
        &self,
        count: Count,
    ) -> f64 {
        percent64(count, self.total_entries)
    }

    /// [`percent`] formatted as e.g. `"66.7%"`.
    ///
    /// [`percent`]: Summary::percent
    pub fn percent_string(
        &self,
        count: Count,
    ) -> String {
        percent_string(count, self.total_entries)
    }

    /// Count of entries with `level`, zero if none.
    pub fn level_count(
        &self,
        level: &str,
    ) -> Count {
        self.level_counts
            .get(level)
            .copied()
            .unwrap_or(0)
    }

    /// `level_counts` highest count first, ties in key order.
    pub fn levels_by_count(&self) -> Vec<(&str, Count)> {
        by_count_desc(&self.level_counts)
    }

    /// `module_counts` highest count first, ties in key order.
    pub fn modules_by_count(&self) -> Vec<(&str, Count)> {
        by_count_desc(&self.module_counts)
    }
}

fn by_count_desc(map: &MapCounts) -> Vec<(&str, Count)> {
    map.iter()
        .map(|(key, count)| (key.as_str(), *count))
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// summarizing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The `error_types` key of an error `message`; the text before the first
/// `':'`, or the whole message. Trimmed.
pub fn error_type_of(message: &str) -> &str {
    match message.find(':') {
        Some(at) => message[..at].trim(),
        None => message.trim(),
    }
}

/// The `warning_types` key of a warning `message`; the text before the first
/// `':'`, else before the first `'-'`, else the whole message. Trimmed.
pub fn warning_type_of(message: &str) -> &str {
    match message.find(':').or_else(|| message.find('-')) {
        Some(at) => message[..at].trim(),
        None => message.trim(),
    }
}

/// Count occurrences of each key, keeping first-seen order, then keep the
/// `top_n` highest counts.
///
/// The sort is stable so tied counts stay in first-seen order.
fn rank_counts<'a, I>(
    keys: I,
    top_n: usize,
) -> RankedCounts
where
    I: Iterator<Item = &'a str>,
{
    let mut counts = RankedCounts::new();
    let mut key_to_at: HashMap<&'a str, usize> = HashMap::new();
    for key in keys {
        match key_to_at.get(key) {
            Some(at) => counts[*at].1 += 1,
            None => {
                key_to_at.insert(key, counts.len());
                counts.push((String::from(key), 1));
            }
        }
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(top_n)
        .collect()
}

/// Fold `entries` into a [`Summary`] with breakdowns of at most `top_n`
/// keys.
pub fn summarize_top(
    entries: &[LogEntry],
    top_n: usize,
) -> Summary {
    defn!("(entries.len() {}, top_n {})", entries.len(), top_n);
    let mut level_counts = MapCounts::new();
    let mut module_counts = MapCounts::new();
    for entry in entries.iter() {
        *level_counts.entry(entry.level.clone()).or_insert(0) += 1;
        *module_counts.entry(entry.module.clone()).or_insert(0) += 1;
    }

    let errors: LogEntries = entries
        .iter()
        .filter(|entry| entry.is_error())
        .cloned()
        .collect();
    let warnings: LogEntries = entries
        .iter()
        .filter(|entry| entry.is_warning())
        .cloned()
        .collect();

    let error_types = rank_counts(errors.iter().map(|entry| error_type_of(&entry.message)), top_n);
    let warning_types = rank_counts(warnings.iter().map(|entry| warning_type_of(&entry.message)), top_n);
    debug_assert_le!(error_types.len(), top_n);
    debug_assert_le!(warning_types.len(), top_n);

    let summary = Summary {
        total_entries: entries.len() as Count,
        error_count: level_counts.get(LEVEL_ERROR).copied().unwrap_or(0),
        warning_count: level_counts.get(LEVEL_WARNING).copied().unwrap_or(0),
        info_count: level_counts.get(LEVEL_INFO).copied().unwrap_or(0),
        level_counts,
        module_counts,
        error_types,
        warning_types,
        time_range: TimeRange::from_entries(entries),
        errors,
        warnings,
    };
    defx!(
        "total_entries {}, error_count {}, warning_count {}",
        summary.total_entries,
        summary.error_count,
        summary.warning_count
    );

    summary
}

/// Fold `entries` into a [`Summary`] with the default top-10 breakdowns.
pub fn summarize(entries: &[LogEntry]) -> Summary {
    summarize_top(entries, TOP_N_DEFAULT)
}
