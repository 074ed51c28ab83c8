//! `search` command handler.
//!
//! Runs one search with the environment configuration and writes the result
//! to stdout. Logs go to stderr so the output can be piped.

use bizfinder_core::{to_contacts_json, to_csv, AppConfig, Business};
use bizfinder_scraper::{SearchOutcome, SearchService, SerpApiClient};

/// Rendering of the business list on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of businesses
    Json,
    /// CSV with a header row
    Csv,
    /// Contacts JSON (name, phone, area, rating, email)
    Contacts,
}

pub(crate) async fn run_search(
    config: &AppConfig,
    keyword: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = SerpApiClient::with_base_url(
        &config.serpapi_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let service = SearchService::new(client, config.serpapi_api_key.clone());

    match service.search(keyword).await? {
        SearchOutcome::Found(businesses) => {
            tracing::info!(total = businesses.len(), "search complete");
            println!("{}", render(&businesses, format)?);
        }
        SearchOutcome::NotFound => {
            println!("No businesses found for \"{}\".", keyword.trim());
        }
    }

    Ok(())
}

pub(crate) fn render(businesses: &[Business], format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(businesses)?,
        OutputFormat::Csv => to_csv(businesses),
        OutputFormat::Contacts => to_contacts_json(businesses)?,
    };
    Ok(rendered)
}
