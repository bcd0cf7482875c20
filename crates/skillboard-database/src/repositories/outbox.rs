//! Notification outbox repository implementation.
//!
//! Staging happens inside the caller's transaction; claiming uses
//! `FOR UPDATE SKIP LOCKED` so multiple dispatchers never double-deliver.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_entity::notification::NewNotification;
use skillboard_entity::outbox::OutboxEntry;

/// Repository for outbox staging and delivery bookkeeping.
#[derive(Debug, Clone)]
pub struct OutboxRepository {
    pool: PgPool,
}

impl OutboxRepository {
    /// Create a new outbox repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stage a notification for delivery inside an open transaction.
    pub async fn stage(
        &self,
        conn: &mut PgConnection,
        notification: &NewNotification,
        max_attempts: i32,
    ) -> AppResult<OutboxEntry> {
        sqlx::query_as::<_, OutboxEntry>(
            "INSERT INTO notification_outbox (user_key, kind, title, message, metadata, max_attempts) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&notification.user_key)
        .bind(notification.kind)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(&notification.metadata)
        .bind(max_attempts)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to stage notification", e))
    }

    /// Claim the next deliverable entry (SKIP LOCKED for concurrency).
    pub async fn claim_next(&self) -> AppResult<Option<OutboxEntry>> {
        sqlx::query_as::<_, OutboxEntry>(
            "UPDATE notification_outbox \
             SET status = 'delivering', attempts = attempts + 1 \
             WHERE id = ( \
                SELECT id FROM notification_outbox \
                WHERE status = 'pending' \
                AND (next_attempt_at IS NULL OR next_attempt_at <= NOW()) \
                ORDER BY created_at ASC \
                FOR UPDATE SKIP LOCKED \
                LIMIT 1 \
             ) RETURNING *",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim outbox entry", e))
    }

    /// Mark an entry delivered inside an open transaction.
    pub async fn mark_delivered(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE notification_outbox SET status = 'delivered', delivered_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark entry delivered", e)
        })?;
        Ok(())
    }

    /// Put a claimed entry back in the queue after a retryable failure.
    pub async fn requeue(&self, id: Uuid, error: &str, backoff_seconds: i64) -> AppResult<()> {
        sqlx::query(
            "UPDATE notification_outbox \
             SET status = 'pending', last_error = $2, \
                 next_attempt_at = NOW() + make_interval(secs => $3::double precision) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(error)
        .bind(backoff_seconds)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to requeue entry", e))?;
        Ok(())
    }

    /// Mark an entry permanently failed.
    pub async fn mark_failed(&self, id: Uuid, error: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE notification_outbox SET status = 'failed', last_error = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(error)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark entry failed", e))?;
        Ok(())
    }

    /// Count entries still waiting for delivery.
    pub async fn count_pending(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notification_outbox WHERE status IN ('pending', 'delivering')",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pending", e))
    }
}
