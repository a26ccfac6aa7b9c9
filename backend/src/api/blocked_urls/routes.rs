//! Defines the HTTP routes for the blocked URL denylist.

use super::handlers::{create_blocked_url, delete_blocked_url, list_blocked_urls};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub async fn blocked_urls_router() -> Router {
    Router::new()
        .route("/", get(list_blocked_urls).post(create_blocked_url))
        .route("/{id}", delete(delete_blocked_url))
}
