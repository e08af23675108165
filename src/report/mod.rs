// src/report/mod.rs

//! The `report` module renders a [`Summary`] as one of the [`ExportType`]s.
//!
//! Every renderer is a pure function of the `Summary` and a source file
//! name. Rendering never writes; [`write_report`] writes the rendered bytes
//! so that a failed render leaves no partial file behind.
//!
//! Renderers only read the `Summary` so several may run at once on one
//! shared `Summary`.
//!
//! [`Summary`]: crate::readers::summary::Summary

use crate::readers::helpers::{
    report_path,
    UsageError,
};
use crate::readers::summary::Summary;

use std::fmt;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::str::FromStr;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::thiserror::Error;

pub mod csv;
pub mod html;
pub mod json;
pub mod pdf;

/// Errors of rendering or writing a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// This build cannot produce the export type. Not fatal to other
    /// export types.
    #[error("the {0} report backend is not available in this build")]
    BackendUnavailable(ExportType),

    #[error("CSV writing failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] ::serde_json::Error),

    #[error("writing report failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Is this a missing backend rather than a failure?
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, RenderError::BackendUnavailable(_))
    }
}

/// The kinds of report; a closed set.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ExportType {
    Html,
    Csv,
    Json,
    Pdf,
}

impl ExportType {
    pub const ALL: [ExportType; 4] = [
        ExportType::Html,
        ExportType::Csv,
        ExportType::Json,
        ExportType::Pdf,
    ];

    /// File name extension, also the CLI name.
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportType::Html => "html",
            ExportType::Csv => "csv",
            ExportType::Json => "json",
            ExportType::Pdf => "pdf",
        }
    }

    /// Can this build render this `ExportType`?
    pub const fn is_available(&self) -> bool {
        match self {
            ExportType::Pdf => pdf::BACKEND_AVAILABLE,
            _ => true,
        }
    }

    /// Render the `summary` of the log file named `source_file`.
    pub fn render(
        &self,
        summary: &Summary,
        source_file: &str,
    ) -> Result<Vec<u8>, RenderError> {
        defn!("({:?}, source_file {:?})", self, source_file);
        let result = match self {
            ExportType::Html => Ok(html::render(summary, source_file)),
            ExportType::Csv => csv::render(summary, source_file),
            ExportType::Json => json::render(summary, source_file),
            ExportType::Pdf => pdf::render(summary, source_file),
        };
        defx!("is_ok {}", result.is_ok());

        result
    }

    /// Path of the report file for the `input` log file.
    pub fn report_path(
        &self,
        input: &Path,
    ) -> PathBuf {
        report_path(input, self.extension())
    }
}

impl fmt::Display for ExportType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportType {
    type Err = UsageError;

    /// Case-insensitive, e.g. `"html"` or `"HTML"`.
    fn from_str(s: &str) -> Result<ExportType, UsageError> {
        let s_lower = s.trim().to_ascii_lowercase();
        for export_type in ExportType::ALL.iter() {
            if export_type.extension() == s_lower {
                return Ok(*export_type);
            }
        }

        Err(UsageError::UnsupportedExport(String::from(s)))
    }
}

/// Write the rendered `bytes` to `path`, replacing any existing file.
///
/// The `bytes` are written to a temporary file in the same directory which
/// is then renamed to `path`. A failed write leaves no partial report at
/// `path` and no temporary file behind.
pub fn write_report(
    path: &Path,
    bytes: &[u8],
) -> Result<(), RenderError> {
    defn!("({:?}, bytes.len() {})", path, bytes.len());
    let parent: &Path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut ntf = ::tempfile::NamedTempFile::new_in(parent)?;
    defo!("temporary {:?}", ntf.path());
    ntf.write_all(bytes)?;
    ntf.flush()?;
    // on failure the `PersistError` returns the temporary file which is
    // removed when dropped
    ntf.persist(path)
        .map_err(|err| err.error)?;
    defx!();

    Ok(())
}

/// Render the `summary` as `export_type` and write it to `path`.
///
/// Nothing is written if rendering fails.
pub fn render_to_path(
    export_type: ExportType,
    summary: &Summary,
    source_file: &str,
    path: &Path,
) -> Result<(), RenderError> {
    let bytes: Vec<u8> = export_type.render(summary, source_file)?;

    write_report(path, &bytes)
}
