use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::pair::GenePair;
use crate::core::types::{GeneId, OverlapCategory};
use crate::filter::FilterOutcome;

/// Final curated fusion list
pub const FINAL_LIST_FILE: &str = "tcga2.txt";

/// Combined report of candidates matched by the Ensembl-lineage categories
pub const ENSEMBL_REPORT_FILE: &str = "tcga2___ensembl.txt";

/// Combined report of every removed candidate
pub const REMOVED_REPORT_FILE: &str = "tcga2___all.txt";

/// Shared version log; the dataset-version line is appended per run
pub const VERSION_FILE: &str = "version.txt";

/// Version line recorded for this dataset
pub const DATASET_VERSION: &str =
    "TCGA Fusions Dataset (Qingsong G., Cell Reports, 2018) version: April 2018";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the curated list and its reports as flat, tab-delimited,
/// newline-terminated files in the output directory.
///
/// Every emitted list is sorted lexicographically; callers hand over
/// already-sorted pairs and the writer renders them verbatim.
pub struct ReportWriter {
    out_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write (or truncate) the final fusion list.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Io` if the file cannot be written.
    pub fn write_final(&self, pairs: &[GenePair]) -> Result<(), WriteError> {
        self.write_pair_lines(FINAL_LIST_FILE, pairs)
    }

    /// Write the per-category and combined reports for a filtering outcome.
    ///
    /// A category report is written only when that category matched at least
    /// one candidate; the combined Ensembl-lineage and all-removed reports
    /// are always written, empty or not. Category reports are annotated with
    /// the display names of both identifiers.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Io` if a report file cannot be written.
    pub fn write_reports(
        &self,
        outcome: &FilterOutcome,
        display: &HashMap<GeneId, String>,
    ) -> Result<(), WriteError> {
        for category in &outcome.categories {
            if category.matches.is_empty() {
                continue;
            }
            self.write_category_report(category.category, &category.matches, display)?;
        }

        self.write_pair_lines(ENSEMBL_REPORT_FILE, &outcome.ensembl_matches)?;
        self.write_pair_lines(REMOVED_REPORT_FILE, &outcome.removed)?;
        Ok(())
    }

    /// Append the dataset-version line to the shared version log.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::Io` if the log cannot be appended to.
    pub fn append_version(&self) -> Result<(), WriteError> {
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.out_dir.join(VERSION_FILE))?;
        writeln!(log, "{DATASET_VERSION}")?;
        Ok(())
    }

    fn write_category_report(
        &self,
        category: OverlapCategory,
        matches: &[GenePair],
        display: &HashMap<GeneId, String>,
    ) -> Result<(), WriteError> {
        let file_name = format!("tcga2___{}", category.file_name());
        let mut lines = String::new();
        for pair in matches {
            let name_a = display.get(pair.first()).map_or("", String::as_str);
            let name_b = display.get(pair.second()).map_or("", String::as_str);
            lines.push_str(&format!("{pair}\t{name_a}\t{name_b}\n"));
        }

        let path = self.out_dir.join(&file_name);
        debug!("writing {} ({} matches)", path.display(), matches.len());
        std::fs::write(path, lines)?;
        Ok(())
    }

    fn write_pair_lines(&self, file_name: &str, pairs: &[GenePair]) -> Result<(), WriteError> {
        let mut lines = String::new();
        for pair in pairs {
            lines.push_str(&format!("{pair}\n"));
        }

        let path = self.out_dir.join(file_name);
        debug!("writing {} ({} pairs)", path.display(), pairs.len());
        std::fs::write(path, lines)?;
        Ok(())
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
