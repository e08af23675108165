// src/report/json.rs

//! JSON report; the canonical machine-readable form of a [`Summary`].
//!
//! The `Summary` fields are written at the top level, after a
//! `"source_file"` field, with 2-space indentation.
//!
//! [`Summary`]: crate::readers::summary::Summary

use crate::report::RenderError;
use crate::readers::summary::Summary;

use ::serde::{
    Deserialize,
    Serialize,
};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

#[derive(Serialize)]
struct JsonReport<'a> {
    source_file: &'a str,
    #[serde(flatten)]
    summary: &'a Summary,
}

/// A parsed JSON report.
#[derive(Debug, Deserialize)]
pub struct JsonReportOwned {
    pub source_file: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Render `summary` as pretty-printed JSON with a trailing newline.
pub fn render(
    summary: &Summary,
    source_file: &str,
) -> Result<Vec<u8>, RenderError> {
    defn!();
    let report = JsonReport {
        source_file,
        summary,
    };
    let mut bytes: Vec<u8> = ::serde_json::to_vec_pretty(&report)?;
    bytes.push(b'\n');
    defx!("bytes.len() {}", bytes.len());

    Ok(bytes)
}

/// Parse the bytes of a JSON report back into its parts.
pub fn from_json(bytes: &[u8]) -> Result<JsonReportOwned, RenderError> {
    let report: JsonReportOwned = ::serde_json::from_slice(bytes)?;

    Ok(report)
}
