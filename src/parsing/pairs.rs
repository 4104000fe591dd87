use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use thiserror::Error;

use crate::core::pair::GenePair;
use crate::core::types::GeneId;

#[derive(Error, Debug)]
pub enum PairFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a raw identifier-pair file: one tab-delimited pair per line.
///
/// Pairs are canonicalized and deduplicated; the on-disk orientation is
/// irrelevant. Blank lines, lines with fewer than two fields, and
/// self-referential pairs are dropped.
///
/// # Errors
///
/// Returns `PairFileError::Io` if the file cannot be read.
pub fn read_pair_file(path: &Path) -> Result<BTreeSet<GenePair>, PairFileError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_pair_lines(&content))
}

/// Parse tab-delimited identifier pairs into a canonical, deduplicated set.
#[must_use]
pub fn parse_pair_lines(text: &str) -> BTreeSet<GenePair> {
    let mut pairs = BTreeSet::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            continue;
        }

        if let Some(pair) = GenePair::new(GeneId::new(a), GeneId::new(b)) {
            pairs.insert(pair);
        }
    }

    pairs
}

/// Read an `identifier<TAB>display_name` map used to annotate reports.
///
/// Lines without both fields are skipped. Later entries for the same
/// identifier win.
///
/// # Errors
///
/// Returns `PairFileError::Io` if the file cannot be read.
pub fn read_display_map(path: &Path) -> Result<HashMap<GeneId, String>, PairFileError> {
    let content = std::fs::read_to_string(path)?;

    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        let Some((id, name)) = line.split_once('\t') else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        map.insert(GeneId::new(id), name.to_string());
    }

    Ok(map)
}
