//! Core data types for fusion-pair curation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SymbolPair`]: A canonical, unordered pair of gene symbols parsed from
//!   the source table
//! - [`GenePair`]: A canonical, unordered pair of stable gene identifiers
//! - [`GeneId`], [`Organism`], [`OverlapCategory`]: Supporting metadata types
//!
//! ## Canonical Ordering
//!
//! Both pair types store their members in lexicographic order, so the two
//! orientations of an unordered pair construct the same value. All set
//! intersections downstream rely on this: a blacklist entry stored `B<TAB>A`
//! still removes a candidate `(A, B)`.
//!
//! [`SymbolPair`]: pair::SymbolPair
//! [`GenePair`]: pair::GenePair
//! [`GeneId`]: types::GeneId
//! [`Organism`]: types::Organism
//! [`OverlapCategory`]: types::OverlapCategory

pub mod pair;
pub mod types;
