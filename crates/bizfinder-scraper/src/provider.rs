//! The seam between the aggregation pipeline and the external search provider.

use std::future::Future;

use bizfinder_core::SearchQuery;

use crate::error::ScraperError;
use crate::types::LocalResult;

/// Provider engine used for local business searches.
pub const ENGINE: &str = "google_maps";

/// Result-type selector for a keyword search (as opposed to a place lookup).
pub const RESULT_TYPE: &str = "search";

/// Page size requested from the provider. The provider caps the actual page
/// at 20 regardless.
pub const REQUESTED_PAGE_SIZE: u32 = 100;

/// Parameters for one provider request. Only `start` changes between pages.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    pub engine: &'static str,
    pub keyword: String,
    pub result_type: &'static str,
    pub api_key: String,
    pub language: &'static str,
    pub country: &'static str,
    pub page_size: u32,
    pub start: Option<u32>,
}

impl ProviderQuery {
    /// Builds the first-page query for a validated search.
    #[must_use]
    pub fn for_search(query: &SearchQuery, api_key: &str) -> Self {
        let region = query.region();
        Self {
            engine: ENGINE,
            keyword: query.keyword().to_owned(),
            result_type: RESULT_TYPE,
            api_key: api_key.to_owned(),
            language: region.language,
            country: region.country,
            page_size: REQUESTED_PAGE_SIZE,
            start: None,
        }
    }

    /// Returns a copy of this query positioned at `start`.
    #[must_use]
    pub fn at_offset(&self, start: u32) -> Self {
        Self {
            start: Some(start),
            ..self.clone()
        }
    }

    /// Query-string pairs in the order the provider documents them.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("engine", self.engine.to_owned()),
            ("q", self.keyword.clone()),
            ("type", self.result_type.to_owned()),
            ("api_key", self.api_key.clone()),
            ("hl", self.language.to_owned()),
            ("gl", self.country.to_owned()),
            ("num", self.page_size.to_string()),
        ];
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        pairs
    }
}

impl std::fmt::Debug for ProviderQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderQuery")
            .field("engine", &self.engine)
            .field("keyword", &self.keyword)
            .field("result_type", &self.result_type)
            .field("api_key", &"[redacted]")
            .field("language", &self.language)
            .field("country", &self.country)
            .field("page_size", &self.page_size)
            .field("start", &self.start)
            .finish()
    }
}

/// One page of provider results.
#[derive(Debug, Clone, Default)]
pub struct ProviderPage {
    pub results: Vec<LocalResult>,
    /// Opaque next-page token; only its presence is meaningful.
    pub next_page: Option<String>,
}

impl ProviderPage {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// A local-search backend that returns one page per call.
///
/// Implemented by [`crate::SerpApiClient`] for production and by in-memory
/// fakes in tests.
pub trait SearchProvider: Send + Sync {
    /// Fetches the page described by `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] when the request fails or the response cannot
    /// be interpreted.
    fn fetch_page(
        &self,
        query: &ProviderQuery,
    ) -> impl Future<Output = Result<ProviderPage, ScraperError>> + Send;
}
