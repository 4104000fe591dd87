//! Command-line interface for fusion-curator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **build**: Build the curated fusion list from the call-set table
//! - **resolve**: Resolve gene symbols against the synonym index
//!
//! ## Usage
//!
//! ```text
//! # Build from a local export of the call-set sheet
//! fusion-curator build --data final_call_set.txt --output db/
//!
//! # Download the table, keep overlapping pairs
//! fusion-curator build --output db/ --skip-filter-overlap
//!
//! # Empty list for a non-human organism
//! fusion-curator build -g mus_musculus --output db/
//!
//! # Inspect how a symbol resolves
//! fusion-curator resolve TP53 ERG --synonyms db/synonyms.txt --format json
//! ```

use clap::{Parser, Subcommand};

pub mod build;
pub mod resolve;

#[derive(Parser)]
#[command(name = "fusion-curator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Curate known cancer gene-fusion pairs from the TCGA fusion call set")]
#[command(
    long_about = "fusion-curator builds a reference list of known cancer gene-fusion pairs from the published TCGA fusion call set.\n\nIt canonicalizes the symbol pairs from the table, expands them to stable gene identifiers through a synonym index, and removes pairs of genomically overlapping or otherwise blacklisted genes, recording per-category reports of everything it excluded."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for run summaries
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the curated fusion list
    Build(build::BuildArgs),

    /// Resolve gene symbols against the synonym index
    Resolve(resolve::ResolveArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
