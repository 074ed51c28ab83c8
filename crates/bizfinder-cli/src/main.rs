mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "bizfinder-cli")]
#[command(about = "Local business search from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for local businesses matching a keyword
    Search {
        /// Free-text search terms (e.g., "moving company")
        keyword: String,
        /// Output format written to stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bizfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { keyword, format } => {
            search::run_search(&config, &keyword, format).await?;
        }
    }

    Ok(())
}
