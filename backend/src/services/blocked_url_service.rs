//! Blocked URL business logic service.
//!
//! Maintains the administrator denylist that gates submissions.

use crate::database::models::BlockedUrl;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::blocked_url_repository::BlockedUrlRepository;
use sqlx::SqlitePool;

pub struct BlockedUrlService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> BlockedUrlService<'a> {
    /// Creates a new BlockedUrlService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a URL to the denylist.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` for duplicate entries.
    pub async fn block_url(&self, url: &str) -> ServiceResult<BlockedUrl> {
        let repo = BlockedUrlRepository::new(self.pool);

        if repo.url_exists(url).await.map_err(ServiceError::from)? {
            return Err(ServiceError::already_exists("Blocked URL", url));
        }

        let record = repo.create_url(url).await.map_err(ServiceError::from)?;
        Ok(record)
    }

    /// Lists all blocked URLs, newest first.
    pub async fn list_urls(&self) -> ServiceResult<Vec<BlockedUrl>> {
        let urls = BlockedUrlRepository::new(self.pool)
            .list_urls()
            .await
            .map_err(ServiceError::from)?;
        Ok(urls)
    }

    /// Removes a URL from the denylist by id.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` when the id does not exist.
    pub async fn delete_url(&self, id: &str) -> ServiceResult<()> {
        let deleted = BlockedUrlRepository::new(self.pool)
            .delete_url(id)
            .await
            .map_err(ServiceError::from)?;
        if !deleted {
            return Err(ServiceError::not_found("Blocked URL", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MIGRATOR;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn duplicate_block_is_rejected() {
        let pool = test_pool().await;
        let service = BlockedUrlService::new(&pool);

        service.block_url("https://ads.example").await.unwrap();
        let err = service.block_url("https://ads.example").await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));
        assert_eq!(service.list_urls().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn block_and_unblock_round_trip() {
        let pool = test_pool().await;
        let service = BlockedUrlService::new(&pool);

        let record = service.block_url("https://ads.example").await.unwrap();
        service.delete_url(&record.id).await.unwrap();
        assert!(service.list_urls().await.unwrap().is_empty());

        let err = service.delete_url(&record.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
