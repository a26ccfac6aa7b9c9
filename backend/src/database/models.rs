//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A URL submitted through the temporary-disable endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubmittedUrl {
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// A URL on the administrator denylist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlockedUrl {
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitUrlRequest {
    #[validate(
        url(message = "Must be a valid URL"),
        length(min = 1, max = 2048, message = "URL must be between 1-2048 characters")
    )]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlockUrlRequest {
    #[validate(
        url(message = "Must be a valid URL"),
        length(min = 1, max = 2048, message = "URL must be between 1-2048 characters")
    )]
    pub url: String,
}
