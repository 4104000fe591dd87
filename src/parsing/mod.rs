//! Parsers for the flat-file inputs of the curation pipeline.
//!
//! This module provides parsers for:
//!
//! - **Call-set tables**: Delimited text exports of the published fusion
//!   call-set sheet (TSV/CSV, optionally gzipped), yielding the raw
//!   `SYMBOL_A--SYMBOL_B` fusion fields
//! - **Identifier-pair files**: Blacklist category files with one
//!   tab-delimited gene-identifier pair per line
//! - **Display maps**: `identifier<TAB>display_name` files used to annotate
//!   reports
//!
//! All parsers skip malformed lines silently; a skipped line is data noise,
//! not an error.

pub mod pairs;
pub mod table;
