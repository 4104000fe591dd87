//! Overlap classification and filtering.
//!
//! Candidate identifier pairs are intersected against the named blacklist
//! categories ([`OverlapCategory`]) staged in the data directory. Every match
//! is recorded with its category for reporting and removed from the final
//! set; matches from the Ensembl-lineage categories are additionally
//! collected into a combined high-confidence report.
//!
//! Comparison is structural equality of canonical [`GenePair`]s, never a
//! rendered-string comparison, so on-disk orientation and formatting of the
//! blacklist files cannot affect matching.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fusion_curator::core::pair::GenePair;
//! use fusion_curator::core::types::GeneId;
//! use fusion_curator::filter::OverlapFilter;
//!
//! let candidates: Vec<GenePair> =
//!     GenePair::new(GeneId::new("ENSG1"), GeneId::new("ENSG2"))
//!         .into_iter()
//!         .collect();
//!
//! let outcome = OverlapFilter::new(".").apply(&candidates).unwrap();
//! println!("{} kept, {} removed", outcome.kept.len(), outcome.removed.len());
//! ```
//!
//! [`OverlapCategory`]: crate::core::types::OverlapCategory
//! [`GenePair`]: crate::core::pair::GenePair

pub mod engine;

pub use engine::{CategoryMatches, FilterOutcome, OverlapFilter};
