//! Handler functions for the submitted URL history endpoints.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::database::models::SubmittedUrl;
use crate::services::submitted_url_service::SubmittedUrlService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Lists all submitted URLs, newest first.
#[axum::debug_handler]
pub async fn list_urls(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<ApiResponse<Vec<SubmittedUrl>>>, (StatusCode, String)> {
    let urls = SubmittedUrlService::new(&pool)
        .list_urls()
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        urls,
        "URLs retrieved successfully",
    )))
}

/// Deletes a submitted URL by id.
#[axum::debug_handler]
pub async fn delete_url(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, String)> {
    tracing::info!("Deleting submitted URL {}", id);

    SubmittedUrlService::new(&pool)
        .delete_url(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success((), "URL deleted successfully")))
}
