//! Multi-page aggregation of provider results.
//!
//! The provider serves local results 20 at a time and signals further pages
//! with `serpapi_pagination.next`. Later pages are addressed by a `start`
//! offset rather than by following the token, so the token is only ever
//! checked for presence.
//!
//! ## Stopping rules
//!
//! - Page 1 empty: stop, nothing found.
//! - Page 1 without a next-page signal: stop after one request.
//! - Pages 2..=`1 + MAX_EXTRA_PAGES`: stop on an empty page, after a page
//!   without a next-page signal, or on the first failed request. Results
//!   gathered so far are kept in every case.
//!
//! Only a page-1 failure is returned to the caller. Later failures are
//! logged at `warn` and end the loop.

use bizfinder_core::Business;

use crate::error::ScraperError;
use crate::normalize::normalize_result;
use crate::provider::{ProviderPage, ProviderQuery, SearchProvider};

/// Additional pages fetched after the first.
pub const MAX_EXTRA_PAGES: u32 = 3;

/// Offset step between pages. Matches the provider's fixed page size and is
/// not derived from how many results a page actually returned.
pub const PAGE_OFFSET_STRIDE: u32 = 20;

/// Returns the `start` offset for a 1-based page number.
#[must_use]
pub fn page_offset(page: u32) -> u32 {
    PAGE_OFFSET_STRIDE * page.saturating_sub(1)
}

/// Fetches up to `1 + MAX_EXTRA_PAGES` pages for `first_page` and returns
/// the normalized businesses in page order.
///
/// An empty vector means the first page had no results. No deduplication is
/// performed across pages.
///
/// # Errors
///
/// Returns the [`ScraperError`] of the first page request. Failures on later
/// pages end pagination but are not returned.
pub async fn fetch_all_pages<P: SearchProvider>(
    provider: &P,
    first_page: &ProviderQuery,
) -> Result<Vec<Business>, ScraperError> {
    let page = provider.fetch_page(first_page).await?;

    if page.results.is_empty() {
        tracing::info!(keyword = %first_page.keyword, "first page returned no results");
        return Ok(Vec::new());
    }

    let mut businesses = normalize_page(&page, 1);
    if !page.has_next() {
        return Ok(businesses);
    }

    tracing::info!(
        keyword = %first_page.keyword,
        max_extra_pages = MAX_EXTRA_PAGES,
        "fetching additional pages"
    );

    for page_number in 2..=(1 + MAX_EXTRA_PAGES) {
        let query = first_page.at_offset(page_offset(page_number));

        let page = match provider.fetch_page(&query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    page = page_number,
                    start = ?query.start,
                    error = %e,
                    "page request failed; keeping results gathered so far"
                );
                break;
            }
        };

        if page.results.is_empty() {
            tracing::debug!(page = page_number, "page returned no results");
            break;
        }

        let added = normalize_page(&page, page_number);
        tracing::info!(page = page_number, added = added.len(), "added businesses from page");
        businesses.extend(added);

        if !page.has_next() {
            break;
        }
    }

    Ok(businesses)
}

/// Normalizes one page, dropping records that have no name.
fn normalize_page(page: &ProviderPage, page_number: u32) -> Vec<Business> {
    let businesses: Vec<Business> = page.results.iter().filter_map(normalize_result).collect();
    let dropped = page.results.len() - businesses.len();
    if dropped > 0 {
        tracing::warn!(page = page_number, dropped, "dropped results without a title");
    }
    businesses
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
