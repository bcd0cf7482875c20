//! Notification repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_entity::notification::{NewNotification, Notification, NotificationKind};

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification inside an open transaction.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &NewNotification,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_key, kind, title, message, metadata) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.user_key)
        .bind(data.kind)
        .bind(&data.title)
        .bind(&data.message)
        .bind(&data.metadata)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// Insert a notification using a pooled connection.
    pub async fn create(&self, data: &NewNotification) -> AppResult<Notification> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to acquire connection", e)
        })?;
        self.insert(&mut conn, data).await
    }

    /// List notifications for a routing key restricted to the given kinds,
    /// newest first.
    pub async fn find_by_key_and_kinds(
        &self,
        user_key: &str,
        kinds: &[NotificationKind],
    ) -> AppResult<Vec<Notification>> {
        let kind_names: Vec<String> = kinds.iter().map(|k| k.as_str().to_string()).collect();

        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE user_key = $1 AND kind::text = ANY($2) \
             ORDER BY created_at DESC",
        )
        .bind(user_key)
        .bind(&kind_names)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    /// Flip a notification to read.
    ///
    /// The update is unconditional and idempotent; repeated calls leave the
    /// row read. Returns `false` when the id is unknown.
    pub async fn mark_read(&self, notification_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1")
            .bind(notification_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
