use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use bizfinder_core::{to_contacts_json, to_csv, Business};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::ApiError;

const CSV_FILENAME: &str = "businesses.csv";
const CONTACTS_FILENAME: &str = "contacts.json";

#[derive(Debug, Deserialize)]
pub(super) struct ExportRequest {
    businesses: Vec<Business>,
}

pub(super) async fn export_csv(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    tracing::debug!(rows = request.businesses.len(), "exporting csv");
    Ok(attachment(
        "text/csv; charset=utf-8",
        CSV_FILENAME,
        to_csv(&request.businesses),
    ))
}

pub(super) async fn export_contacts(
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let body = to_contacts_json(&request.businesses).map_err(|e| {
        tracing::error!(error = %e, "contacts export serialization failed");
        ApiError::new(req_id.0.clone(), "internal_error", "export failed")
    })?;

    tracing::debug!(rows = request.businesses.len(), "exporting contacts");
    Ok(attachment(
        "application/json; charset=utf-8",
        CONTACTS_FILENAME,
        body,
    ))
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
