// src/debug/mod.rs

//! The `debug` module is printer macros for errors and warnings, and helper
//! functions for tests.

// the binary's tests use these helpers so they cannot be `cfg(test)`
#[doc(hidden)]
pub mod helpers;

pub mod printers;
