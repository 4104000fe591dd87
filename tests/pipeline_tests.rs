//! End-to-end tests for the curation pipeline, staged over temporary
//! directories the way a real run stages its data files.

use std::collections::BTreeSet;
use std::path::Path;

use fusion_curator::cli::build::{run as run_build, BuildArgs};
use fusion_curator::cli::OutputFormat;
use fusion_curator::expand::expand_symbol_pairs;
use fusion_curator::{GeneId, GenePair, OverlapCategory, OverlapFilter, SymbolPair, SynonymIndex};

fn pair(a: &str, b: &str) -> GenePair {
    GenePair::new(GeneId::new(a), GeneId::new(b)).unwrap()
}

/// A small but realistic staging directory: synonym index, display map, and
/// a paralogs blacklist (stored in reverse orientation on purpose).
fn stage_data_dir(dir: &Path) {
    std::fs::write(
        dir.join("synonyms.txt"),
        "ENSG001\tABC\nENSG002\tABC\nENSG003\tXYZ\nENSG004\tDEF\nENSG005\tGHI\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("genes_symbols.txt"),
        "ENSG001\tABC\nENSG002\tABC2\nENSG003\tXYZ\nENSG004\tDEF\nENSG005\tGHI\n",
    )
    .unwrap();
    std::fs::write(dir.join("paralogs.txt"), "ENSG003\tENSG001\n").unwrap();
}

fn stage_source_table(dir: &Path) -> std::path::PathBuf {
    let source = dir.join("final_call_set.txt");
    std::fs::write(
        &source,
        "Final fusion call set\t\t\n\
         Sample\tCancer\tFusion\n\
         TCGA-01\tPRAD\tABC--XYZ\n\
         TCGA-02\tLUAD\tXYZ--ABC\n\
         TCGA-03\tBRCA\tDEF--GHI\n\
         TCGA-04\tGBM\tDEF--DEF\n\
         TCGA-05\tSKCM\tUNKNOWN1--UNKNOWN2\n",
    )
    .unwrap();
    source
}

fn build_args(dir: &Path, source: &Path) -> BuildArgs {
    BuildArgs {
        organism: "homo_sapiens".to_string(),
        output: dir.to_path_buf(),
        data: Some(source.to_path_buf()),
        source_url: "http://localhost/unused".to_string(),
        skip_filter_overlap: false,
    }
}

#[test]
fn full_build_filters_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    stage_data_dir(dir.path());
    let source = stage_source_table(dir.path());

    run_build(
        build_args(dir.path(), &source),
        OutputFormat::Text,
        false,
    )
    .unwrap();

    // ABC resolves to two identifiers, so ABC--XYZ (seen in both
    // orientations) expands to two candidates; the paralogs list removes one
    // of them even though it is stored reversed on disk.
    let final_list = std::fs::read_to_string(dir.path().join("tcga2.txt")).unwrap();
    assert_eq!(final_list, "ENSG002\tENSG003\nENSG004\tENSG005\n");

    let paralogs =
        std::fs::read_to_string(dir.path().join("tcga2___paralogs.txt")).unwrap();
    assert_eq!(paralogs, "ENSG001\tENSG003\tABC\tXYZ\n");

    let all_removed = std::fs::read_to_string(dir.path().join("tcga2___all.txt")).unwrap();
    assert_eq!(all_removed, "ENSG001\tENSG003\n");

    // No Ensembl-lineage category was staged
    let ensembl = std::fs::read_to_string(dir.path().join("tcga2___ensembl.txt")).unwrap();
    assert!(ensembl.is_empty());

    // Unmatched categories produce no report file
    assert!(!dir.path().join("tcga2___banned.txt").exists());

    let version = std::fs::read_to_string(dir.path().join("version.txt")).unwrap();
    assert!(version.contains("TCGA Fusions Dataset"));
}

#[test]
fn skip_filter_overlap_passes_candidates_through() {
    let dir = tempfile::tempdir().unwrap();
    stage_data_dir(dir.path());
    let source = stage_source_table(dir.path());

    let mut args = build_args(dir.path(), &source);
    args.skip_filter_overlap = true;
    run_build(args, OutputFormat::Text, false).unwrap();

    // The paralogs match stays in, and no reports are written
    let final_list = std::fs::read_to_string(dir.path().join("tcga2.txt")).unwrap();
    assert_eq!(
        final_list,
        "ENSG001\tENSG003\nENSG002\tENSG003\nENSG004\tENSG005\n"
    );
    assert!(!dir.path().join("tcga2___paralogs.txt").exists());
    assert!(!dir.path().join("tcga2___all.txt").exists());
    assert!(!dir.path().join("tcga2___ensembl.txt").exists());
}

#[test]
fn unsupported_organism_yields_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    stage_data_dir(dir.path());
    let source = stage_source_table(dir.path());

    let mut args = build_args(dir.path(), &source);
    args.organism = "mus_musculus".to_string();
    run_build(args, OutputFormat::Text, false).unwrap();

    let final_list = std::fs::read_to_string(dir.path().join("tcga2.txt")).unwrap();
    assert!(final_list.is_empty());
    assert!(!dir.path().join("tcga2___all.txt").exists());
    // The version line is still logged
    let version = std::fs::read_to_string(dir.path().join("version.txt")).unwrap();
    assert_eq!(version.lines().count(), 1);
}

#[test]
fn missing_source_halts_gracefully_with_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    stage_data_dir(dir.path());

    let args = build_args(dir.path(), &dir.path().join("no_such_export.txt"));
    run_build(args, OutputFormat::Text, false).unwrap();

    let final_list = std::fs::read_to_string(dir.path().join("tcga2.txt")).unwrap();
    assert!(final_list.is_empty());
    assert!(dir.path().join("version.txt").exists());
}

#[test]
fn missing_synonym_index_halts_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let source = stage_source_table(dir.path());

    run_build(
        build_args(dir.path(), &source),
        OutputFormat::Text,
        false,
    )
    .unwrap();

    let final_list = std::fs::read_to_string(dir.path().join("tcga2.txt")).unwrap();
    assert!(final_list.is_empty());
}

#[test]
fn both_orientations_collapse_to_one_symbol_pair() {
    let fields = ["ABC--XYZ", "XYZ--ABC"];
    let pairs: BTreeSet<SymbolPair> = fields
        .iter()
        .filter_map(|field| SymbolPair::parse(field))
        .collect();
    assert_eq!(pairs.len(), 1);
}

#[test]
fn removal_sets_partition_the_candidates() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(OverlapCategory::Healthy.file_name()),
        "G2\tG1\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(OverlapCategory::EnsemblFullyOverlapping.file_name()),
        "G3\tG4\n",
    )
    .unwrap();

    let index = SynonymIndex::from_text("G1\tAA\nG2\tBB\nG3\tCC\nG4\tDD\nG5\tEE\n");
    let symbol_pairs = ["AA--BB", "CC--DD", "CC--EE"]
        .iter()
        .filter_map(|field| SymbolPair::parse(field));
    let candidates = expand_symbol_pairs(symbol_pairs, &index);
    assert_eq!(candidates.len(), 3);

    let outcome = OverlapFilter::new(dir.path()).apply(&candidates).unwrap();

    // kept and removed are disjoint and together cover every candidate
    assert!(outcome.kept.iter().all(|p| !outcome.removed.contains(p)));
    let mut union: Vec<GenePair> = outcome
        .kept
        .iter()
        .chain(outcome.removed.iter())
        .cloned()
        .collect();
    union.sort();
    assert_eq!(union, candidates);

    assert_eq!(outcome.kept, vec![pair("G3", "G5")]);
    assert_eq!(outcome.removed, vec![pair("G1", "G2"), pair("G3", "G4")]);
    assert_eq!(outcome.ensembl_matches, vec![pair("G3", "G4")]);
}
