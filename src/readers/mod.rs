// src/readers/mod.rs

//! "Readers" for _lslib_.
//!
//! ## Overview of readers
//!
//! * [`read_log_file`] reads an entire file into memory.
//! * A [`LogParser`] derives [`LogEntry`s] from the lines of that file.
//! * [`summarize`] folds the `LogEntry`s into a [`Summary`].
//!
//! Each stage completes before the next begins. There is no streaming.
//!
//! _These are not rust "Readers"; these do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`read_log_file`]: crate::readers::helpers::read_log_file
//! [`LogParser`]: crate::readers::logparser::LogParser
//! [`LogEntry`s]: crate::data::logentry::LogEntry
//! [`summarize`]: crate::readers::summary::summarize
//! [`Summary`]: crate::readers::summary::Summary

pub mod helpers;
pub mod logparser;
pub mod summary;
