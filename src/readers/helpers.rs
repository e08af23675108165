// src/readers/helpers.rs

//! Miscellaneous helper functions for input and output paths, and for
//! reading an input file.

use crate::common::{
    FPath,
    LOG_DOT_EXTENSION,
    REPORT_SUFFIX,
};

use std::path::{
    Path,
    PathBuf,
};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::thiserror::Error;

/// A user passed something unusable. Reported before any log file is read.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum UsageError {
    #[error("file name must end with \".log\": {0:?}")]
    MissingExtension(FPath),

    #[error("file not found: {0:?}")]
    NotFound(FPath),

    #[error("not a file: {0:?}")]
    NotAFile(FPath),

    #[error("export type {0:?} is not supported; choose one of html, csv, json, pdf")]
    UnsupportedExport(String),
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &Path {
    Path::new(path)
}

/// Does the file name of `path` end with the literal `".log"`?
///
/// A file named just `.log` does.
pub fn has_log_extension(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => name
            .to_string_lossy()
            .ends_with(LOG_DOT_EXTENSION),
        None => false,
    }
}

/// Check the user-passed `path` is a readable-looking `.log` file.
///
/// Checks run in order; the first failing check is returned.
///
/// 1. the file name ends with `.log`
/// 2. the path exists
/// 3. the path is a file
pub fn validate_log_path(path: &FPath) -> Result<PathBuf, UsageError> {
    defn!("({:?})", path);
    let path_: &Path = fpath_to_path(path);
    if !has_log_extension(path_) {
        defx!("MissingExtension");
        return Err(UsageError::MissingExtension(path.clone()));
    }
    if !path_.exists() {
        defx!("NotFound");
        return Err(UsageError::NotFound(path.clone()));
    }
    if !path_.is_file() {
        defx!("NotAFile");
        return Err(UsageError::NotAFile(path.clone()));
    }
    defx!("Ok");

    Ok(path_.to_path_buf())
}

/// Read the entire file at `path` into a `String`.
///
/// Invalid UTF-8 is replaced with `U+FFFD` rather than failing the read.
pub fn read_log_file(path: &Path) -> std::io::Result<String> {
    defn!("({:?})", path);
    let bytes: Vec<u8> = std::fs::read(path)?;
    let text: String = String::from_utf8_lossy(&bytes).into_owned();
    defx!("read {} bytes", bytes.len());

    Ok(text)
}

/// Path of the report file for `input` and report `extension`; the input
/// file name without `.log` with `_report.<extension>` appended, in the same
/// directory.
///
/// For example, `"logs/app.log"` and `"html"` returns `"logs/app_report.html"`,
/// and `"logs/.log"` returns `"logs/_report.html"`.
pub fn report_path(
    input: &Path,
    extension: &str,
) -> PathBuf {
    let stem: String = match input.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            match name.strip_suffix(LOG_DOT_EXTENSION) {
                Some(stem) => String::from(stem),
                None => match input.file_stem() {
                    Some(stem) => stem.to_string_lossy().into_owned(),
                    None => String::new(),
                },
            }
        }
        None => String::new(),
    };
    let file_name: String = format!("{}{}.{}", stem, REPORT_SUFFIX, extension);

    input.with_file_name(file_name)
}
