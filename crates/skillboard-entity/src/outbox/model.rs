//! Notification outbox entity model.
//!
//! Side-effect notifications are staged here in the same transaction as the
//! primary write they belong to, then delivered asynchronously.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::notification::{NewNotification, NotificationKind};

use super::status::OutboxStatus;

/// A staged notification awaiting delivery to the notifications table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OutboxEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Recipient routing key.
    pub user_key: String,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub message: String,
    /// Additional structured data (JSON).
    pub metadata: Option<serde_json::Value>,
    /// Delivery state.
    pub status: OutboxStatus,
    /// Number of delivery attempts made so far.
    pub attempts: i32,
    /// Attempt ceiling before the entry is marked failed.
    pub max_attempts: i32,
    /// Last delivery error, if any.
    pub last_error: Option<String>,
    /// Earliest time the next delivery attempt may run.
    pub next_attempt_at: Option<DateTime<Utc>>,
    /// When the entry was staged.
    pub created_at: DateTime<Utc>,
    /// When the entry was delivered.
    pub delivered_at: Option<DateTime<Utc>>,
}

impl OutboxEntry {
    /// Whether the delivery attempt budget is used up.
    pub fn exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// The notification this entry stages.
    pub fn to_notification(&self) -> NewNotification {
        NewNotification {
            user_key: self.user_key.clone(),
            kind: self.kind,
            title: self.title.clone(),
            message: self.message.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted() {
        let entry = OutboxEntry {
            id: Uuid::new_v4(),
            user_key: "teacher-1".into(),
            kind: NotificationKind::Confirmation,
            title: "Assignment Sent".into(),
            message: "ok".into(),
            metadata: None,
            status: OutboxStatus::Delivering,
            attempts: 3,
            max_attempts: 3,
            last_error: None,
            next_attempt_at: None,
            created_at: Utc::now(),
            delivered_at: None,
        };
        assert!(entry.exhausted());
        assert_eq!(entry.to_notification().user_key, "teacher-1");
    }
}
