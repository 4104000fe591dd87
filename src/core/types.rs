use serde::{Deserialize, Serialize};

/// Stable gene identifier (e.g. an Ensembl gene id)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GeneId(pub String);

impl GeneId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organism the fusion list is built for.
///
/// Source data exists only for human; every other organism yields an empty
/// final list and no reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Organism {
    HomoSapiens,
    Other(String),
}

impl Organism {
    /// Parse an organism name (case-insensitive, e.g. "homo_sapiens")
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("homo_sapiens") {
            Self::HomoSapiens
        } else {
            Self::Other(s.to_lowercase())
        }
    }

    /// Whether source data exists for this organism
    #[must_use]
    pub fn has_source_data(&self) -> bool {
        matches!(self, Self::HomoSapiens)
    }
}

impl std::fmt::Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomoSapiens => write!(f, "homo_sapiens"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// A named source of gene pairs known to be overlapping or otherwise
/// blacklisted as fusion artifacts.
///
/// Each category is backed by a flat pair-list file staged in the data
/// directory. Categories are always processed in the order of [`Self::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapCategory {
    /// Fully overlapping gene pairs per the Ensembl annotation
    EnsemblFullyOverlapping,
    /// Partially overlapping, same-strand gene pairs per the Ensembl annotation
    EnsemblSameStrandOverlapping,
    /// Fully overlapping gene pairs per the GENCODE annotation
    GencodeFullyOverlapping,
    /// Partially overlapping, same-strand gene pairs per the GENCODE annotation
    GencodeSameStrandOverlapping,
    /// Fully overlapping gene pairs per the RefSeq annotation
    RefseqFullyOverlapping,
    /// Partially overlapping, same-strand gene pairs per the RefSeq annotation
    RefseqSameStrandOverlapping,
    /// Fully overlapping gene pairs per the UCSC annotation
    UcscFullyOverlapping,
    /// Partially overlapping, same-strand gene pairs per the UCSC annotation
    UcscSameStrandOverlapping,
    /// Gene/pseudogene pairs
    PseudogenePairs,
    /// Manually banned pairs
    Banned,
    /// Duplicated-gene-database pairs
    Dgd,
    /// Pairs also seen in healthy samples
    Healthy,
    /// Paralog pairs
    Paralogs,
}

impl OverlapCategory {
    /// Every category, in the fixed processing order
    pub const ALL: [OverlapCategory; 13] = [
        Self::EnsemblFullyOverlapping,
        Self::EnsemblSameStrandOverlapping,
        Self::GencodeFullyOverlapping,
        Self::GencodeSameStrandOverlapping,
        Self::RefseqFullyOverlapping,
        Self::RefseqSameStrandOverlapping,
        Self::UcscFullyOverlapping,
        Self::UcscSameStrandOverlapping,
        Self::PseudogenePairs,
        Self::Banned,
        Self::Dgd,
        Self::Healthy,
        Self::Paralogs,
    ];

    /// Name of the pair-list file backing this category
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::EnsemblFullyOverlapping => "ensembl_fully_overlapping_genes.txt",
            Self::EnsemblSameStrandOverlapping => "ensembl_same_strand_overlapping_genes.txt",
            Self::GencodeFullyOverlapping => "gencode_fully_overlapping_genes.txt",
            Self::GencodeSameStrandOverlapping => "gencode_same_strand_overlapping_genes.txt",
            Self::RefseqFullyOverlapping => "refseq_fully_overlapping_genes.txt",
            Self::RefseqSameStrandOverlapping => "refseq_same_strand_overlapping_genes.txt",
            Self::UcscFullyOverlapping => "ucsc_fully_overlapping_genes.txt",
            Self::UcscSameStrandOverlapping => "ucsc_same_strand_overlapping_genes.txt",
            Self::PseudogenePairs => "pairs_pseudogenes.txt",
            Self::Banned => "banned.txt",
            Self::Dgd => "dgd.txt",
            Self::Healthy => "healthy.txt",
            Self::Paralogs => "paralogs.txt",
        }
    }

    /// Whether this category comes from the Ensembl overlap annotation.
    ///
    /// Matches from these categories are additionally collected into the
    /// combined high-confidence report.
    #[must_use]
    pub fn is_ensembl_lineage(self) -> bool {
        matches!(
            self,
            Self::EnsemblFullyOverlapping | Self::EnsemblSameStrandOverlapping
        )
    }
}

impl std::fmt::Display for OverlapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stem = self.file_name().trim_end_matches(".txt");
        write!(f, "{stem}")
    }
}
