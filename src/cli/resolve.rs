use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::GeneId;
use crate::resolve::{SymbolResolver, SynonymIndex};

#[derive(Args)]
pub struct ResolveArgs {
    /// Gene symbols to resolve
    #[arg(required = true)]
    pub symbols: Vec<String>,

    /// Synonym index file
    #[arg(long, default_value = "synonyms.txt")]
    pub synonyms: PathBuf,
}

/// Execute the resolve subcommand.
///
/// # Errors
///
/// Returns an error if the synonym index cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let index = SynonymIndex::load(&args.synonyms)?;

    match format {
        OutputFormat::Text => {
            for symbol in &args.symbols {
                let ids = sorted_ids(&index, symbol);
                if ids.is_empty() {
                    println!("{symbol}\t-");
                } else {
                    println!("{symbol}\t{}", ids.join(","));
                }
            }
        }
        OutputFormat::Json => {
            let resolved: serde_json::Map<String, serde_json::Value> = args
                .symbols
                .iter()
                .map(|symbol| {
                    (
                        symbol.clone(),
                        serde_json::json!(sorted_ids(&index, symbol)),
                    )
                })
                .collect();
            println!("{:#}", serde_json::Value::Object(resolved));
        }
    }

    Ok(())
}

fn sorted_ids(index: &SynonymIndex, symbol: &str) -> Vec<String> {
    let mut ids: Vec<String> = index
        .resolve(symbol)
        .into_iter()
        .map(|id: GeneId| id.0)
        .collect();
    ids.sort_unstable();
    ids
}
