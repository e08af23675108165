// src/data/mod.rs

//! The `data` module is specialized data containers for [`LogEntry`s].
//!
//! ## Definitions of data
//!
//! ### Header line
//!
//! A "header line" is a line of text that:
//!
//! * begins with a timestamp `YYYY-MM-DD HH:MM:SS,mmm`.
//! * follows the timestamp with a level word, a module word, a `" - "`
//!   separator, and a message.
//!
//! For example
//!
//! ```text
//! 2024-01-01 10:00:00,000 ERROR db - Connection failed: timeout
//! ```
//!
//! ### Trace line
//!
//! A "trace line" is any non-blank line after a header line and before the
//! next line that begins with a date.
//!
//! ### Log Entry
//!
//! A "log entry" is one header line and zero or more trace lines.
//!
//! A log entry is represented by a [`LogEntry`] and found by the
//! [`logparser`].
//!
//! [`LogEntry`s]: crate::data::logentry::LogEntry
//! [`LogEntry`]: crate::data::logentry::LogEntry
//! [`logparser`]: crate::readers::logparser

pub mod logentry;
pub mod serde_utils;
