use thiserror::Error;

/// Errors from a single search provider request.
///
/// Messages never include the request URL, which carries the credential.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 200 with a top-level `"error"` message.
    #[error("search provider error: {0}")]
    ApiError(String),

    #[error("unexpected HTTP status {status} from search provider: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid provider base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
