//! Module for blocked URL denylist endpoints.

pub mod handlers;
pub mod routes;
