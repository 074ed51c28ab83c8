//! Search orchestration: input validation, credential check, aggregation,
//! and mapping to outcomes.

use bizfinder_core::{Business, CoreError, SearchQuery};
use thiserror::Error;

use crate::error::ScraperError;
use crate::pagination::fetch_all_pages;
use crate::provider::{ProviderQuery, SearchProvider};

/// A search that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one business, in provider order.
    Found(Vec<Business>),
    /// The provider returned nothing on the first page.
    NotFound,
}

impl SearchOutcome {
    /// Stable machine-readable code.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "success",
            SearchOutcome::NotFound => "not_found",
        }
    }
}

/// A search that could not run or whose first provider request failed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The keyword was blank or too short. No provider call was made.
    #[error("invalid search input: {0}")]
    InvalidInput(#[from] CoreError),

    /// No provider credential is configured. No provider call was made.
    #[error("search provider credential is not configured")]
    Misconfigured,

    /// The first page request failed.
    #[error("search provider request failed: {0}")]
    Provider(#[source] ScraperError),
}

impl SearchError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => "invalid_input",
            SearchError::Misconfigured => "misconfigured",
            SearchError::Provider(_) => "provider_error",
        }
    }
}

/// Runs searches against a [`SearchProvider`] with an injected credential.
///
/// Holds no per-search state; one instance serves concurrent searches.
pub struct SearchService<P> {
    provider: P,
    api_key: Option<String>,
}

impl<P: SearchProvider> SearchService<P> {
    /// Creates a service. A blank `api_key` counts as missing.
    pub fn new(provider: P, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self { provider, api_key }
    }

    /// Whether a provider credential is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validates `keyword` and runs the search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidInput`] for a blank or too-short keyword.
    /// - [`SearchError::Misconfigured`] when no credential is configured.
    /// - [`SearchError::Provider`] when the first page request fails.
    pub async fn search(&self, keyword: &str) -> Result<SearchOutcome, SearchError> {
        let query = SearchQuery::new(keyword)?;
        self.search_query(&query).await
    }

    /// Runs an already-validated search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Misconfigured`] when no credential is configured.
    /// - [`SearchError::Provider`] when the first page request fails.
    pub async fn search_query(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::Misconfigured)?;

        let region = query.region();
        tracing::info!(
            keyword = %query.keyword(),
            country = region.country,
            "processing search"
        );

        let first_page = ProviderQuery::for_search(query, api_key);
        let businesses = fetch_all_pages(&self.provider, &first_page)
            .await
            .map_err(|e| {
                tracing::error!(keyword = %query.keyword(), error = %e, "search provider request failed");
                SearchError::Provider(e)
            })?;

        if businesses.is_empty() {
            tracing::info!(keyword = %query.keyword(), "no local results found");
            return Ok(SearchOutcome::NotFound);
        }

        tracing::info!(
            keyword = %query.keyword(),
            total = businesses.len(),
            "returning businesses"
        );
        Ok(SearchOutcome::Found(businesses))
    }
}
