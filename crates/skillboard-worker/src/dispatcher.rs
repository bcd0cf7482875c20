//! Outbox dispatcher — claims staged entries and turns them into
//! notification rows.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, warn};

use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_database::repositories::notification::NotificationRepository;
use skillboard_database::repositories::outbox::OutboxRepository;
use skillboard_entity::outbox::OutboxEntry;

/// Seconds added to the backoff per failed attempt.
const BACKOFF_STEP_SECONDS: i64 = 5;

/// Delivers staged notifications from the outbox.
///
/// Delivery is at-least-once: the notification insert and the delivered
/// flip happen in one transaction, and a claimed entry whose delivery fails
/// is re-pended with a backoff until its attempt budget runs out.
#[derive(Debug, Clone)]
pub struct OutboxDispatcher {
    pool: PgPool,
    outbox: Arc<OutboxRepository>,
    notifications: Arc<NotificationRepository>,
}

impl OutboxDispatcher {
    /// Creates a new dispatcher.
    pub fn new(
        pool: PgPool,
        outbox: Arc<OutboxRepository>,
        notifications: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            pool,
            outbox,
            notifications,
        }
    }

    /// Claims and delivers one entry. Returns `false` when nothing was
    /// claimable.
    pub async fn process_next(&self) -> AppResult<bool> {
        let Some(entry) = self.outbox.claim_next().await? else {
            return Ok(false);
        };

        match self.deliver(&entry).await {
            Ok(()) => {
                debug!(
                    entry_id = %entry.id,
                    user_key = %entry.user_key,
                    kind = %entry.kind,
                    "Notification delivered"
                );
            }
            Err(e) => {
                if entry.exhausted() {
                    warn!(
                        entry_id = %entry.id,
                        user_key = %entry.user_key,
                        attempts = entry.attempts,
                        error = %e,
                        "Notification delivery failed permanently"
                    );
                    self.outbox.mark_failed(entry.id, &e.to_string()).await?;
                } else {
                    warn!(
                        entry_id = %entry.id,
                        attempts = entry.attempts,
                        error = %e,
                        "Notification delivery failed; will retry"
                    );
                    let backoff = BACKOFF_STEP_SECONDS * i64::from(entry.attempts);
                    self.outbox
                        .requeue(entry.id, &e.to_string(), backoff)
                        .await?;
                }
            }
        }

        Ok(true)
    }

    /// Processes entries until the queue has no immediately claimable work.
    /// Returns the number of entries handled.
    pub async fn drain(&self) -> AppResult<u64> {
        let mut processed = 0;
        while self.process_next().await? {
            processed += 1;
        }
        Ok(processed)
    }

    async fn deliver(&self, entry: &OutboxEntry) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        self.notifications
            .insert(&mut tx, &entry.to_notification())
            .await?;
        self.outbox.mark_delivered(&mut tx, entry.id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit delivery", e)
        })
    }
}
