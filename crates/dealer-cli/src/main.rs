mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dealer-cli")]
#[command(about = "Dealer review sentiment tools")]
struct Cli {
    /// Skip the NLU provider even when credentials are configured
    #[arg(long, global = true)]
    keyword_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single piece of text and print the result as JSON
    Score {
        /// Review text to score
        text: String,
    },
    /// Attach sentiment labels to a JSON array of reviews
    Tag {
        /// Path to a JSON file containing an array of reviews
        file: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = dealer_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let analyzer = commands::build_analyzer(&config, cli.keyword_only)?;
    let output = match cli.command {
        Commands::Score { text } => commands::score_text(&analyzer, &text).await?,
        Commands::Tag { file } => commands::tag_file(&analyzer, &file).await?,
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests;
