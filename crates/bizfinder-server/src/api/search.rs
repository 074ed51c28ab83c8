use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use bizfinder_core::Business;
use bizfinder_scraper::{SearchError, SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

const MSG_INVALID_INPUT: &str = "יש להזין מילות חיפוש";
const MSG_MISCONFIGURED: &str = "שירות החיפוש אינו מוגדר";
const MSG_NOT_FOUND: &str = "לא נמצאו תוצאות לחיפוש שלך";
const MSG_PROVIDER_ERROR: &str = "אירעה שגיאה בחיפוש";

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    keyword: String,
    /// Accepted for compatibility; searches always run in the fixed region.
    #[allow(dead_code)]
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    businesses: Vec<Business>,
    total: usize,
}

pub(super) async fn submit_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let outcome = state
        .search
        .search(&request.keyword)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    match outcome {
        SearchOutcome::Found(businesses) => Ok(Json(ApiResponse {
            data: SearchData {
                total: businesses.len(),
                businesses,
            },
            meta: ResponseMeta::new(req_id.0),
        })),
        SearchOutcome::NotFound => Err(ApiError::new(req_id.0, "not_found", MSG_NOT_FOUND)),
    }
}

fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    match error {
        SearchError::InvalidInput(_) => {
            ApiError::new(request_id, error.kind(), MSG_INVALID_INPUT)
        }
        SearchError::Misconfigured => {
            tracing::error!("search requested but no provider credential is configured");
            ApiError::new(request_id, error.kind(), MSG_MISCONFIGURED)
        }
        SearchError::Provider(source) => {
            ApiError::new(request_id, error.kind(), MSG_PROVIDER_ERROR)
                .with_detail(source.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use bizfinder_core::CoreError;
    use bizfinder_scraper::ScraperError;

    use super::*;

    #[test]
    fn search_request_accepts_missing_country() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"keyword":"movers"}"#).expect("deserialize");
        assert_eq!(request.keyword, "movers");
        assert!(request.country.is_none());
    }

    #[test]
    fn provider_error_keeps_source_message_as_detail() {
        let err = SearchError::Provider(ScraperError::ApiError("Invalid API key.".to_string()));
        let api_error = map_search_error("req-1".to_string(), &err);

        assert_eq!(api_error.error.code, "provider_error");
        assert_eq!(api_error.error.message, MSG_PROVIDER_ERROR);
        assert!(api_error
            .error
            .detail
            .as_deref()
            .is_some_and(|d| d.contains("Invalid API key.")));
    }

    #[test]
    fn invalid_input_has_no_detail() {
        let err = SearchError::InvalidInput(CoreError::EmptyKeyword);
        let api_error = map_search_error("req-1".to_string(), &err);

        assert_eq!(api_error.error.code, "invalid_input");
        assert!(api_error.error.detail.is_none());
    }
}
