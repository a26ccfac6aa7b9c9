//! Handler functions for the blocked URL denylist endpoints.

use crate::api::common::{ApiResponse, ValidatedJson, service_error_to_http};
use crate::database::models::{BlockUrlRequest, BlockedUrl};
use crate::services::blocked_url_service::BlockedUrlService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Adds a URL to the denylist.
#[axum::debug_handler]
pub async fn create_blocked_url(
    Extension(pool): Extension<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<BlockUrlRequest>,
) -> Result<Json<ApiResponse<BlockedUrl>>, (StatusCode, String)> {
    let record = BlockedUrlService::new(&pool)
        .block_url(&payload.url)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        record,
        "URL blocked successfully",
    )))
}

/// Lists all blocked URLs, newest first.
#[axum::debug_handler]
pub async fn list_blocked_urls(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<ApiResponse<Vec<BlockedUrl>>>, (StatusCode, String)> {
    let urls = BlockedUrlService::new(&pool)
        .list_urls()
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        urls,
        "Blocked URLs retrieved successfully",
    )))
}

/// Removes a URL from the denylist by id.
#[axum::debug_handler]
pub async fn delete_blocked_url(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, String)> {
    tracing::info!("Removing blocked URL {}", id);

    BlockedUrlService::new(&pool)
        .delete_url(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        (),
        "Blocked URL removed successfully",
    )))
}
