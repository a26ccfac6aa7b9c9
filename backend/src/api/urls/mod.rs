//! Module for submitted URL history endpoints.

pub mod handlers;
pub mod routes;
