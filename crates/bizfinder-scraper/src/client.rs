//! HTTP client for the SerpApi search endpoint.
//!
//! Wraps `reqwest` with SerpApi-specific envelope handling: HTTP errors carry
//! the provider's `"error"` message when one is present, and a 200 response
//! whose `"error"` says Google returned nothing is an empty page rather than
//! a failure.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::provider::{ProviderPage, ProviderQuery, SearchProvider};
use crate::types::{LocalResult, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// Substring of the provider's "no results" notice.
const NO_RESULTS_NOTICE: &str = "hasn't returned any results";

/// Client for the SerpApi search endpoint.
///
/// Use [`SerpApiClient::new`] for production or
/// [`SerpApiClient::with_base_url`] to point at a mock server in tests. The
/// credential travels in each [`ProviderQuery`], not in the client.
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: Client,
    base_url: Url,
}

impl SerpApiClient {
    /// Creates a client pointed at the production SerpApi endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &ProviderQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query.to_pairs() {
                pairs.append_pair(k, &v);
            }
        }
        url
    }

    async fn request_page(&self, query: &ProviderQuery) -> Result<ProviderPage, ScraperError> {
        let url = self.build_url(query);
        tracing::debug!(
            keyword = %query.keyword,
            start = ?query.start,
            "requesting search provider page"
        );

        // reqwest errors embed the URL, which carries the credential.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            let message = serde_json::from_str::<SearchResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("no error message")
                        .to_owned()
                });
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("search page (start={:?})", query.start),
                source: e,
            }
        })?;

        parse_page(parsed)
    }
}

impl SearchProvider for SerpApiClient {
    async fn fetch_page(&self, query: &ProviderQuery) -> Result<ProviderPage, ScraperError> {
        self.request_page(query).await
    }
}

/// Converts a decoded envelope into a [`ProviderPage`].
///
/// Entries that are not JSON objects are skipped with a warning. Mistyped
/// fields inside a record decode as `None` (see [`LocalResult`]).
fn parse_page(response: SearchResponse) -> Result<ProviderPage, ScraperError> {
    if let Some(error) = response.error {
        if error.contains(NO_RESULTS_NOTICE) {
            return Ok(ProviderPage::default());
        }
        return Err(ScraperError::ApiError(error));
    }

    let results = response
        .local_results
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<LocalResult>(raw) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable local result");
                None
            }
        })
        .collect();

    Ok(ProviderPage {
        results,
        next_page: response.serpapi_pagination.and_then(|p| p.next),
    })
}
