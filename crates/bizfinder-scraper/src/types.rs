//! SerpApi `google_maps` response types.
//!
//! ## Observed shape
//!
//! ### Envelope
//! Successful searches carry `local_results` (array) and, when more results
//! exist, `serpapi_pagination.next` (a URL). Searches Google answered with
//! nothing come back as HTTP 200 with only a top-level `error` string such
//! as `"Google hasn't returned any results for this query."`.
//!
//! ### `local_results`
//! Kept as raw JSON values on the envelope so one malformed record does not
//! fail the whole page; the client decodes each into [`LocalResult`] and
//! skips entries that are not JSON objects.
//!
//! ### `hours`
//! Usually a short status string (`"Open ⋅ Closes 6 PM"`), but some records
//! carry structured `operating_hours` (`{"monday": "9 AM–6 PM", ...}`).
//! Both are modelled as untyped JSON and rendered in `normalize.rs`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Top-level response from the SerpApi search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub local_results: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub serpapi_pagination: Option<SerpApiPagination>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Pagination block. Only the presence of `next` matters.
#[derive(Debug, Deserialize)]
pub struct SerpApiPagination {
    #[serde(default)]
    pub next: Option<String>,
}

/// One business as returned by the provider, before normalization.
///
/// Every field is optional and decoded leniently: a value of the wrong type
/// (`"rating": "4.5"`, `"reviews": "1,204"`) becomes `None` rather than
/// failing the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalResult {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    /// Review count.
    #[serde(default, deserialize_with = "lenient")]
    pub reviews: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub categories: Option<Vec<String>>,
    /// Single primary category, used when `categories` is absent.
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default)]
    pub hours: Option<serde_json::Value>,
    #[serde(default)]
    pub operating_hours: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Google Maps link for the place, when supplied.
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

/// Decodes any JSON value, keeping it only if it fits `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
