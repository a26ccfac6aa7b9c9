//! Database repository for the blocked URL denylist.

use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::BlockedUrl;

/// Repository for BlockedUrl database operations.
pub struct BlockedUrlRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> BlockedUrlRepository<'a> {
    /// Creates a new BlockedUrlRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new blocked URL and returns the stored row.
    pub async fn create_url(&self, url: &str) -> Result<BlockedUrl> {
        let id = Uuid::now_v7().to_string();
        let row = sqlx::query_as::<_, BlockedUrl>(
            r#"
            INSERT INTO blocked_urls (id, url)
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

    /// Retrieves all blocked URLs, newest first.
    pub async fn list_urls(&self) -> Result<Vec<BlockedUrl>> {
        let rows = sqlx::query_as::<_, BlockedUrl>(
            r#"
            SELECT id, url, created_at
            FROM blocked_urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Checks whether a URL is present on the denylist.
    pub async fn url_exists(&self, url: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM blocked_urls WHERE url = ?
            "#,
        )
        .bind(url)
        .fetch_one(self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Deletes a blocked URL by id.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if the id was unknown.
    pub async fn delete_url(&self, id: &str) -> Result<bool> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM blocked_urls
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
