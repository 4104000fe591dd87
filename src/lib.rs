//! # fusion-curator
//!
//! A library for curating reference lists of known cancer gene-fusion pairs.
//!
//! The published TCGA fusion call set records fusions as free-text symbol
//! pairs (`TMPRSS2--ERG`). Symbols are ambiguous: one symbol may name several
//! loci, and many reported "fusions" are artifacts of genomically overlapping
//! genes, paralogs, or pseudogenes.
//!
//! `fusion-curator` turns the raw table into a clean identifier-pair list by
//! canonicalizing symbol pairs, expanding them to every combination of
//! resolved gene identifiers, and removing every pair that appears in one of
//! the named overlap/blacklist categories — with a per-category report of
//! what was removed and why.
//!
//! ## Features
//!
//! - **Canonical pairs**: Both orientations of a pair are one value; sets and
//!   intersections never depend on input order
//! - **Ambiguity-preserving expansion**: A symbol resolving to several
//!   identifiers expands to all candidate pairs; overlap filtering is the
//!   safety net, not resolver disambiguation
//! - **Provenance**: Every removed pair is recorded under the category that
//!   removed it, annotated with display names
//! - **Deterministic output**: All emitted lists are deduplicated and sorted
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use fusion_curator::core::pair::SymbolPair;
//! use fusion_curator::expand::expand_symbol_pairs;
//! use fusion_curator::filter::OverlapFilter;
//! use fusion_curator::resolve::SynonymIndex;
//!
//! let index = SynonymIndex::load(Path::new("db/synonyms.txt")).unwrap();
//!
//! let pairs = ["TMPRSS2--ERG", "EML4--ALK"]
//!     .iter()
//!     .filter_map(|field| SymbolPair::parse(field));
//! let candidates = expand_symbol_pairs(pairs, &index);
//!
//! let outcome = OverlapFilter::new("db").apply(&candidates).unwrap();
//! println!("{} pairs kept, {} removed", outcome.kept.len(), outcome.removed.len());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Canonical pair and category types
//! - [`parsing`]: Call-set table, pair-file, and display-map parsers
//! - [`resolve`]: Symbol-to-identifier resolution
//! - [`expand`]: Symbol-pair to identifier-pair expansion
//! - [`filter`]: Overlap classification and filtering
//! - [`output`]: Flat-file writers
//! - [`fetch`]: Source-table download
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod expand;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod parsing;
pub mod resolve;

// Re-export commonly used types for convenience
pub use crate::core::pair::{GenePair, SymbolPair};
pub use crate::core::types::{GeneId, Organism, OverlapCategory};
pub use crate::filter::{CategoryMatches, FilterOutcome, OverlapFilter};
pub use crate::output::ReportWriter;
pub use crate::resolve::{SymbolResolver, SynonymIndex};
