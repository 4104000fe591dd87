use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::types::GeneId;

/// Separator between the two gene symbols in the source table
pub const FUSION_SEPARATOR: &str = "--";

/// Normalize a raw gene symbol: drop non-ASCII characters, trim surrounding
/// whitespace, uppercase.
#[must_use]
pub fn normalize_symbol(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .trim()
        .to_ascii_uppercase()
}

/// An unordered pair of gene symbols in canonical form.
///
/// The canonical form stores the lexicographically smaller symbol first, so
/// `ABC--XYZ` and `XYZ--ABC` construct the same value. Both symbols are
/// normalized, non-empty, and distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolPair {
    first: String,
    second: String,
}

impl SymbolPair {
    /// Build the canonical pair from two raw symbols.
    ///
    /// Returns `None` when either symbol normalizes to empty or both sides
    /// are equal after normalization.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let a = normalize_symbol(a);
        let b = normalize_symbol(b);
        if a.is_empty() || b.is_empty() || a == b {
            return None;
        }
        let (first, second) = if b < a { (b, a) } else { (a, b) };
        Some(Self { first, second })
    }

    /// Parse a raw `SYMBOL_A--SYMBOL_B` field from the source table.
    ///
    /// Splits on the first occurrence of the separator; anything after it
    /// belongs to the second symbol. Returns `None` for fields without a
    /// separator and for empty or self-referential pairs.
    pub fn parse(raw: &str) -> Option<Self> {
        let (a, b) = raw.split_once(FUSION_SEPARATOR)?;
        Self::new(a, b)
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl std::fmt::Display for SymbolPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.first, FUSION_SEPARATOR, self.second)
    }
}

/// An unordered pair of distinct gene identifiers in canonical form.
///
/// The smaller identifier is stored first. The derived `Ord` over
/// `(first, second)` is the ordering used for all emitted pair lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GenePair {
    first: GeneId,
    second: GeneId,
}

impl GenePair {
    /// Build the canonical pair; `None` when both identifiers are equal.
    pub fn new(a: GeneId, b: GeneId) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Equal => None,
            Ordering::Less => Some(Self { first: a, second: b }),
            Ordering::Greater => Some(Self { first: b, second: a }),
        }
    }

    #[must_use]
    pub fn first(&self) -> &GeneId {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &GeneId {
        &self.second
    }
}

impl std::fmt::Display for GenePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene_pair(a: &str, b: &str) -> Option<GenePair> {
        GenePair::new(GeneId::new(a), GeneId::new(b))
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("  tp53 "), "TP53");
        assert_eq!(normalize_symbol("Igh@"), "IGH@");
        // Non-ASCII characters are dropped, not replaced
        assert_eq!(normalize_symbol("ab\u{e9}c"), "ABC");
        assert_eq!(normalize_symbol("   "), "");
    }

    #[test]
    fn test_symbol_pair_is_commutative() {
        let ab = SymbolPair::new("ABC", "XYZ").unwrap();
        let ba = SymbolPair::new("XYZ", "ABC").unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.first(), "ABC");
        assert_eq!(ab.second(), "XYZ");
    }

    #[test]
    fn test_symbol_pair_case_insensitive() {
        assert_eq!(
            SymbolPair::new("tmprss2", "ERG"),
            SymbolPair::new("TMPRSS2", "erg")
        );
        // Same symbol in different case is a self-pair
        assert!(SymbolPair::new("ALK", "alk").is_none());
    }

    #[test]
    fn test_symbol_pair_rejects_degenerate() {
        assert!(SymbolPair::new("", "XYZ").is_none());
        assert!(SymbolPair::new("ABC", "  ").is_none());
        assert!(SymbolPair::new("ABC", "ABC").is_none());
    }

    #[test]
    fn test_parse_fusion_field() {
        let pair = SymbolPair::parse("TMPRSS2--ERG").unwrap();
        assert_eq!(pair.first(), "ERG");
        assert_eq!(pair.second(), "TMPRSS2");

        assert_eq!(
            SymbolPair::parse("ABC--XYZ"),
            SymbolPair::parse("XYZ--ABC")
        );

        assert!(SymbolPair::parse("NOSEPARATOR").is_none());
        assert!(SymbolPair::parse("ABC--").is_none());
        assert!(SymbolPair::parse("--XYZ").is_none());
        assert!(SymbolPair::parse("ABC--ABC").is_none());
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        // Everything after the first separator is the second symbol
        let pair = SymbolPair::parse("A--B--C").unwrap();
        assert_eq!(pair.first(), "A");
        assert_eq!(pair.second(), "B--C");
    }

    #[test]
    fn test_gene_pair_canonical_order() {
        let ab = gene_pair("ENSG2", "ENSG1").unwrap();
        assert_eq!(ab.first().as_str(), "ENSG1");
        assert_eq!(ab.second().as_str(), "ENSG2");
        assert_eq!(ab, gene_pair("ENSG1", "ENSG2").unwrap());
        assert!(gene_pair("ENSG1", "ENSG1").is_none());
    }

    #[test]
    fn test_gene_pair_ordering_matches_rendered_lines() {
        let mut pairs = vec![
            gene_pair("ENSG10", "ENSG2").unwrap(),
            gene_pair("ENSG1", "ENSG3").unwrap(),
            gene_pair("ENSG1", "ENSG2").unwrap(),
        ];
        pairs.sort();

        let mut lines: Vec<String> = pairs.iter().map(ToString::to_string).collect();
        let rendered = lines.clone();
        lines.sort();
        assert_eq!(lines, rendered);
    }
}
