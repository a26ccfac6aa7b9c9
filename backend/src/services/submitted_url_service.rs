//! Submitted URL business logic service.
//!
//! Handles the persistence side of the temporary-disable flow: the denylist
//! gate and the CRUD operations over recorded submissions.

use crate::database::models::SubmittedUrl;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::blocked_url_repository::BlockedUrlRepository;
use crate::repositories::submitted_url_repository::SubmittedUrlRepository;
use sqlx::SqlitePool;

pub struct SubmittedUrlService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> SubmittedUrlService<'a> {
    /// Creates a new SubmittedUrlService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Records a submitted URL after checking it against the denylist.
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidOperation` when the URL is on the
    /// denylist; no record is created in that case.
    pub async fn submit_url(&self, url: &str) -> ServiceResult<SubmittedUrl> {
        let blocked = BlockedUrlRepository::new(self.pool)
            .url_exists(url)
            .await
            .map_err(ServiceError::from)?;
        if blocked {
            return Err(ServiceError::invalid_operation("This URL is not permitted."));
        }

        let record = SubmittedUrlRepository::new(self.pool)
            .create_url(url)
            .await
            .map_err(ServiceError::from)?;
        Ok(record)
    }

    /// Lists all submitted URLs, newest first.
    pub async fn list_urls(&self) -> ServiceResult<Vec<SubmittedUrl>> {
        let urls = SubmittedUrlRepository::new(self.pool)
            .list_urls()
            .await
            .map_err(ServiceError::from)?;
        Ok(urls)
    }

    /// Deletes a submitted URL by id.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` when the id does not exist.
    pub async fn delete_url(&self, id: &str) -> ServiceResult<()> {
        let deleted = SubmittedUrlRepository::new(self.pool)
            .delete_url(id)
            .await
            .map_err(ServiceError::from)?;
        if !deleted {
            return Err(ServiceError::not_found("URL", id));
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
    async fn submit_records_url() {
        let pool = test_pool().await;
        let service = SubmittedUrlService::new(&pool);

        let record = service.submit_url("https://example.com").await.unwrap();
        assert_eq!(record.url, "https://example.com");

        let urls = service.list_urls().await.unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[tokio::test]
    async fn denylisted_url_is_rejected_without_record() {
        let pool = test_pool().await;
        BlockedUrlRepository::new(&pool)
            .create_url("https://ads.example")
            .await
            .unwrap();

        let service = SubmittedUrlService::new(&pool);
        let err = service.submit_url("https://ads.example").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidOperation { .. }));
        assert!(service.list_urls().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let service = SubmittedUrlService::new(&pool);

        let err = service.delete_url("missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
