use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::pair::GenePair;
use crate::core::types::OverlapCategory;
use crate::parsing::pairs::{read_pair_file, PairFileError};

/// Candidate pairs matched by a single blacklist category.
#[derive(Debug, Clone)]
pub struct CategoryMatches {
    pub category: OverlapCategory,
    /// Matched candidates, in sorted order
    pub matches: Vec<GenePair>,
}

/// Outcome of the overlap-filtering stage.
///
/// Built once per run by a fold over the categories; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Candidates that survived every category, sorted
    pub kept: Vec<GenePair>,
    /// Candidates removed by at least one category, sorted
    pub removed: Vec<GenePair>,
    /// Candidates matched by the Ensembl-lineage categories, sorted
    pub ensembl_matches: Vec<GenePair>,
    /// Per-category matches, in the fixed category order
    pub categories: Vec<CategoryMatches>,
}

impl FilterOutcome {
    /// Outcome of a disabled filtering stage: every candidate is kept, no
    /// category contributes anything.
    #[must_use]
    pub fn passthrough(candidates: &[GenePair]) -> Self {
        Self {
            kept: candidates.to_vec(),
            ..Self::default()
        }
    }
}

/// Classifies candidate pairs against the category blacklists staged in a
/// data directory and removes every match.
pub struct OverlapFilter {
    data_dir: PathBuf,
}

impl OverlapFilter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Classify and filter candidates.
    ///
    /// Categories are processed in their fixed order. Each category's pairs
    /// are canonicalized on load, so removal is orientation-independent:
    /// a blacklist entry stored `(B, A)` removes a candidate `(A, B)`.
    /// Candidates must be sorted; the outcome preserves that order.
    ///
    /// # Errors
    ///
    /// Returns `PairFileError::Io` if a present category file cannot be read.
    /// A missing file is not an error; that category contributes no pairs.
    pub fn apply(&self, candidates: &[GenePair]) -> Result<FilterOutcome, PairFileError> {
        let candidate_set: BTreeSet<&GenePair> = candidates.iter().collect();

        let mut removal: BTreeSet<GenePair> = BTreeSet::new();
        let mut ensembl: BTreeSet<GenePair> = BTreeSet::new();
        let mut categories = Vec::with_capacity(OverlapCategory::ALL.len());

        for category in OverlapCategory::ALL {
            let listed = self.load_category(category)?;
            let matches: Vec<GenePair> = listed
                .iter()
                .filter(|pair| candidate_set.contains(*pair))
                .cloned()
                .collect();
            debug!(
                "category {category}: {} listed pairs, {} matches",
                listed.len(),
                matches.len()
            );

            if category.is_ensembl_lineage() {
                ensembl.extend(listed.iter().cloned());
            }
            removal.extend(listed);
            categories.push(CategoryMatches { category, matches });
        }

        let (removed, kept): (Vec<GenePair>, Vec<GenePair>) = candidates
            .iter()
            .cloned()
            .partition(|pair| removal.contains(pair));
        let ensembl_matches: Vec<GenePair> = candidates
            .iter()
            .filter(|pair| ensembl.contains(*pair))
            .cloned()
            .collect();

        Ok(FilterOutcome {
            kept,
            removed,
            ensembl_matches,
            categories,
        })
    }

    fn load_category(&self, category: OverlapCategory) -> Result<BTreeSet<GenePair>, PairFileError> {
        let path = self.data_dir.join(category.file_name());
        // A missing category file is expected: the category contributes nothing
        if !path.is_file() {
            debug!("category file {} not present", path.display());
            return Ok(BTreeSet::new());
        }
        read_pair_file(&path)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
