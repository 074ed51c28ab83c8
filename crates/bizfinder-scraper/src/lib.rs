pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pagination;
pub mod provider;
pub mod search;
pub mod types;

pub use client::SerpApiClient;
pub use error::ScraperError;
pub use extract::{extract_email, extract_place_id};
pub use normalize::normalize_result;
pub use pagination::{fetch_all_pages, page_offset, MAX_EXTRA_PAGES, PAGE_OFFSET_STRIDE};
pub use provider::{ProviderPage, ProviderQuery, SearchProvider};
pub use search::{SearchError, SearchOutcome, SearchService};
pub use types::{LocalResult, SearchResponse};

#[cfg(test)]
mod fake_provider;
