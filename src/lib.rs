// src/lib.rs

//! _lslib_ is the library behind the _logsense_ program.
//!
//! The pipeline is
//!
//! 1. [`parse`] raw text lines into [`LogEntry`s], absorbing the lines
//!    following a header into that entry's stack trace.
//! 2. [`summarize`] the entries into a [`Summary`].
//! 3. [`render`] the `Summary` as one of the [`ExportType`]s.
//!
//! No stage prints to the console; that is left to the _logsense_ binary.
//!
//! [`parse`]: crate::readers::logparser::parse
//! [`LogEntry`s]: crate::data::logentry::LogEntry
//! [`summarize`]: crate::readers::summary::summarize
//! [`Summary`]: crate::readers::summary::Summary
//! [`render`]: crate::report::ExportType::render
//! [`ExportType`]: crate::report::ExportType

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
pub mod report;
#[cfg(test)]
pub mod tests;
