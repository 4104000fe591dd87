//! Flat-file output for the curated lists and reports.
//!
//! Everything this crate persists is a flat text file: one record per line,
//! tab-delimited, newline-terminated, no header row, sorted lexicographically.
//! [`writer::ReportWriter`] is the single place that renders them.

pub mod writer;

pub use writer::ReportWriter;
