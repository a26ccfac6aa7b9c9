//! Database repositories for URL persistence.

pub mod blocked_url_repository;
pub mod submitted_url_repository;
