use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Leading header rows in the exported call-set sheet
const HEADER_ROWS: usize = 2;

/// Zero-based column holding the `SYMBOL_A--SYMBOL_B` fusion string
const FUSION_COLUMN: usize = 2;

/// Read the fusion column from an exported call-set table.
///
/// The table is tab-delimited (comma-delimited for `.csv` exports) and may be
/// gzip-compressed. The first two rows are sheet headers and are skipped.
/// Rows with fewer than three columns, an empty fusion field, or that fail to
/// parse as a record are skipped silently; they are data noise, not errors.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be opened or read.
pub fn read_fusion_fields(path: &Path) -> Result<Vec<String>, TableError> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(read_fusion_fields_from(
        BufReader::new(reader),
        detect_delimiter(path),
    ))
}

/// Read the fusion column from delimited text.
pub fn read_fusion_fields_from<R: Read>(reader: R, delimiter: u8) -> Vec<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut fields = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        if row < HEADER_ROWS {
            continue;
        }
        // Malformed records are skipped, not propagated
        let Ok(record) = record else { continue };
        let Some(value) = record.get(FUSION_COLUMN) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        fields.push(value.to_string());
    }

    fields
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

fn detect_delimiter(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.ends_with(".csv") || name.ends_with(".csv.gz") {
        b','
    } else {
        b'\t'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fusion_fields_skips_headers() {
        let tsv = "Final fusion call set\t\t\n\
                   Sample\tCancer\tFusion\n\
                   TCGA-01\tBRCA\tTMPRSS2--ERG\n\
                   TCGA-02\tLUAD\tEML4--ALK\n";

        let fields = read_fusion_fields_from(tsv.as_bytes(), b'\t');
        assert_eq!(fields, vec!["TMPRSS2--ERG", "EML4--ALK"]);
    }

    #[test]
    fn test_read_fusion_fields_skips_short_and_empty_rows() {
        let tsv = "h1\nh2\n\
                   TCGA-01\tBRCA\tTMPRSS2--ERG\n\
                   TCGA-02\tLUAD\n\
                   TCGA-03\tGBM\t   \n\
                   TCGA-04\tSKCM\tFGFR3--TACC3\n";

        let fields = read_fusion_fields_from(tsv.as_bytes(), b'\t');
        assert_eq!(fields, vec!["TMPRSS2--ERG", "FGFR3--TACC3"]);
    }

    #[test]
    fn test_read_fusion_fields_csv() {
        let csv = "h1,,\nh2,,\nTCGA-01,BRCA,BCR--ABL1\n";
        let fields = read_fusion_fields_from(csv.as_bytes(), b',');
        assert_eq!(fields, vec!["BCR--ABL1"]);
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(Path::new("calls.csv")), b',');
        assert_eq!(detect_delimiter(Path::new("calls.csv.gz")), b',');
        assert_eq!(detect_delimiter(Path::new("calls.txt")), b'\t');
        assert_eq!(detect_delimiter(Path::new("calls.tsv.gz")), b'\t');
    }

    #[test]
    fn test_empty_input_yields_no_fields() {
        let fields = read_fusion_fields_from("".as_bytes(), b'\t');
        assert!(fields.is_empty());
    }
}
