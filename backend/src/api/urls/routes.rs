//! Defines the HTTP routes for the submitted URL history.

use super::handlers::{delete_url, list_urls};
use axum::{
    Router,
    routing::{delete, get},
};

pub async fn urls_router() -> Router {
    Router::new()
        .route("/", get(list_urls))
        .route("/{id}", delete(delete_url))
}
