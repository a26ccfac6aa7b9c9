//! Database repository for submitted URL operations.
//!
//! Provides CRUD operations for the URLs recorded by the temporary-disable flow.

use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::SubmittedUrl;

/// Repository for SubmittedUrl database operations.
pub struct SubmittedUrlRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> SubmittedUrlRepository<'a> {
    /// Creates a new SubmittedUrlRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new submitted URL and returns the stored row.
    pub async fn create_url(&self, url: &str) -> Result<SubmittedUrl> {
        let id = Uuid::now_v7().to_string();
        let row = sqlx::query_as::<_, SubmittedUrl>(
            r#"
            INSERT INTO submitted_urls (id, url)
            VALUES (?, ?)
            RETURNING id, url, created_at
            "#,
        )
        .bind(&id)
        .bind(url)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves all submitted URLs, newest first.
    pub async fn list_urls(&self) -> Result<Vec<SubmittedUrl>> {
        let rows = sqlx::query_as::<_, SubmittedUrl>(
            r#"
            SELECT id, url, created_at
            FROM submitted_urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Deletes a submitted URL by id.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if the id was unknown.
    pub async fn delete_url(&self, id: &str) -> Result<bool> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM submitted_urls
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }
}
