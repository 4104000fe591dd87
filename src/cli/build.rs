use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::pair::SymbolPair;
use crate::core::types::{GeneId, Organism};
use crate::expand::expand_symbol_pairs;
use crate::fetch;
use crate::filter::{FilterOutcome, OverlapFilter};
use crate::output::ReportWriter;
use crate::parsing::pairs::read_display_map;
use crate::parsing::table;
use crate::resolve::SynonymIndex;

/// Synonym index staged in the output directory by earlier pipeline steps
const SYNONYMS_FILE: &str = "synonyms.txt";

/// Identifier-to-display-name map used to annotate category reports
const DISPLAY_MAP_FILE: &str = "genes_symbols.txt";

/// Name given to a freshly downloaded source table
const TEMP_SOURCE_FILE: &str = "temp_tcga.txt";

#[derive(Args)]
pub struct BuildArgs {
    /// Organism to build the fusion list for; source data exists only for
    /// homo_sapiens, every other organism yields an empty list
    #[arg(short = 'g', long, default_value = "homo_sapiens")]
    pub organism: String,

    /// Output directory; also holds the staged synonym index, display map,
    /// and blacklist category files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Local export of the call-set table, used instead of downloading
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// URL to download the call-set table from
    #[arg(long, default_value = fetch::DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Keep pairs of overlapping/blacklisted genes instead of filtering them
    #[arg(long)]
    pub skip_filter_overlap: bool,
}

/// Counts reported at the end of a build
struct BuildSummary {
    symbol_pairs: usize,
    candidates: usize,
    removed: usize,
    kept: usize,
}

/// Execute the build subcommand.
///
/// The empty final list is written before anything else, so every graceful
/// halt (unsupported organism, unavailable source table or synonym index)
/// still leaves well-formed output on disk and exits successfully.
///
/// # Errors
///
/// Returns an error only for genuine IO failures on the output directory or
/// the blacklist files; an unusable source is a graceful halt, not an error.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BuildArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let writer = ReportWriter::new(&args.output);
    writer.write_final(&[])?;

    let organism = Organism::parse(&args.organism);
    if !organism.has_source_data() {
        info!("no fusion data for {organism}, leaving the empty list");
        writer.append_version()?;
        return Ok(());
    }

    let Some((source, downloaded)) = acquire_source(&args) else {
        writer.append_version()?;
        return Ok(());
    };

    let raw_fields = match table::read_fusion_fields(&source) {
        Ok(fields) => fields,
        Err(e) => {
            warn!("source table unusable ({e}), leaving the empty list");
            writer.append_version()?;
            return Ok(());
        }
    };

    let symbol_pairs: BTreeSet<SymbolPair> = raw_fields
        .iter()
        .filter_map(|field| SymbolPair::parse(field))
        .collect();
    info!("found {} cancer fusions in the table", symbol_pairs.len());

    let index = match SynonymIndex::load(&args.output.join(SYNONYMS_FILE)) {
        Ok(index) => index,
        Err(e) => {
            warn!("synonym index unusable ({e}), leaving the empty list");
            writer.append_version()?;
            return Ok(());
        }
    };

    let candidates = expand_symbol_pairs(symbol_pairs.iter().cloned(), &index);
    info!("{} known cancer fusion gene pairs found", candidates.len());

    let outcome = if args.skip_filter_overlap {
        FilterOutcome::passthrough(&candidates)
    } else {
        let display = load_display_map(&args);
        let outcome = OverlapFilter::new(&args.output).apply(&candidates)?;
        writer.write_reports(&outcome, &display)?;
        info!(
            "{} known fusion gene pairs left after removing the overlappings",
            outcome.kept.len()
        );
        outcome
    };

    writer.write_final(&outcome.kept)?;
    writer.append_version()?;

    if downloaded {
        let _ = std::fs::remove_file(&source);
    }

    let summary = BuildSummary {
        symbol_pairs: symbol_pairs.len(),
        candidates: candidates.len(),
        removed: outcome.removed.len(),
        kept: outcome.kept.len(),
    };
    print_summary(&summary, &outcome, format, verbose);

    Ok(())
}

/// Locate the source table: a local override wins, otherwise download.
/// Returns `None` when the source is unavailable (graceful halt).
fn acquire_source(args: &BuildArgs) -> Option<(PathBuf, bool)> {
    if let Some(data) = &args.data {
        info!("using the local file {}", data.display());
        return Some((data.clone(), false));
    }

    let dest = args.output.join(TEMP_SOURCE_FILE);
    match fetch::download(&args.source_url, &dest) {
        Ok(()) => Some((dest, true)),
        Err(e) => {
            warn!("could not download the call-set table ({e}), leaving the empty list");
            None
        }
    }
}

/// The display map annotates reports only; a missing file degrades to blank
/// names rather than halting the run.
fn load_display_map(args: &BuildArgs) -> HashMap<GeneId, String> {
    let path = args.output.join(DISPLAY_MAP_FILE);
    match read_display_map(&path) {
        Ok(map) => map,
        Err(e) => {
            warn!("display map {} unusable ({e})", path.display());
            HashMap::new()
        }
    }
}

fn print_summary(
    summary: &BuildSummary,
    outcome: &FilterOutcome,
    format: OutputFormat,
    verbose: bool,
) {
    match format {
        OutputFormat::Text => {
            println!(
                "{} symbol pairs -> {} candidate identifier pairs -> {} kept, {} removed",
                summary.symbol_pairs, summary.candidates, summary.kept, summary.removed
            );
            if verbose {
                for category in &outcome.categories {
                    if category.matches.is_empty() {
                        continue;
                    }
                    println!("  {}: {} matches", category.category, category.matches.len());
                }
            }
        }
        OutputFormat::Json => {
            let categories: Vec<serde_json::Value> = outcome
                .categories
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "category": format!("{}", c.category),
                        "matches": c.matches.len(),
                    })
                })
                .collect();

            let json = serde_json::json!({
                "symbol_pairs": summary.symbol_pairs,
                "candidates": summary.candidates,
                "kept": summary.kept,
                "removed": summary.removed,
                "ensembl_matches": outcome.ensembl_matches.len(),
                "categories": categories,
            });
            println!("{json:#}");
        }
    }
}
