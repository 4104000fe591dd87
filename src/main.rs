use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod expand;
mod fetch;
mod filter;
mod output;
mod parsing;
mod resolve;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fusion_curator=debug,info")
    } else {
        EnvFilter::new("fusion_curator=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Build(args) => {
            cli::build::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format)?;
        }
    }

    Ok(())
}
