// src/printer/mod.rs

//! The `printer` module is for printing user-facing messages and the
//! `--summary` overview to the console with color.

pub mod printers;
pub mod summary;
