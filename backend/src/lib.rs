//! Library crate for the Pi-hole Gate backend.
//!
//! Exposes the application modules and the router assembly so both the
//! binary and the integration tests can build the same app.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;

use crate::api::common::ApiResponse;
use crate::services::pihole_service::PiholeService;
use axum::{Extension, Router, response::Json, routing::get};
use sqlx::SqlitePool;

/// Builds the full application router with its shared state layers.
pub async fn app(pool: SqlitePool, pihole: PiholeService) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/pihole", api::pihole::routes::pihole_router().await)
        .nest("/api/urls", api::urls::routes::urls_router().await)
        .nest(
            "/api/blocked-urls",
            api::blocked_urls::routes::blocked_urls_router().await,
        )
        .layer(Extension(pool))
        .layer(Extension(pihole))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Pi-hole Gate Backend",
            "version": "0.1.0"
        }),
        "Welcome to the Pi-hole Gate API",
    ))
}
