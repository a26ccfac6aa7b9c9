//! Handler functions for the Pi-hole disable endpoint.

use crate::api::common::{ApiResponse, ValidatedJson, service_error_to_http};
use crate::database::models::{SubmitUrlRequest, SubmittedUrl};
use crate::services::pihole_service::PiholeService;
use crate::services::submitted_url_service::SubmittedUrlService;
use axum::{extract::Extension, http::StatusCode, response::Json};
use sqlx::SqlitePool;

/// Handle a temporary-disable submission.
///
/// Validates the URL, checks it against the denylist, records it and asks
/// the appliance to pause blocking. The record is kept even when the
/// upstream call fails; the failure is surfaced to the caller.
#[axum::debug_handler]
pub async fn temporary_disable(
    Extension(pool): Extension<SqlitePool>,
    Extension(pihole): Extension<PiholeService>,
    ValidatedJson(payload): ValidatedJson<SubmitUrlRequest>,
) -> Result<Json<ApiResponse<SubmittedUrl>>, (StatusCode, String)> {
    tracing::info!("Temporary disable requested for {}", payload.url);

    let record = SubmittedUrlService::new(&pool)
        .submit_url(&payload.url)
        .await
        .map_err(service_error_to_http)?;

    pihole
        .disable_blocking()
        .await
        .map_err(|e| service_error_to_http(e.into()))?;

    Ok(Json(ApiResponse::success(
        record,
        "URL saved and Pi-hole temporarily disabled for 5 minutes",
    )))
}
