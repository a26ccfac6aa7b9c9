//! Defines the HTTP routes for the Pi-hole disable action.

use super::handlers::temporary_disable;
use axum::{Router, routing::post};

pub async fn pihole_router() -> Router {
    Router::new().route("/temporary-disable", post(temporary_disable))
}
