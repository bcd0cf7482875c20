//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// Routing key addressing every teacher at once rather than a specific user.
pub const ALL_TEACHERS: &str = "all-teachers";

/// A notification delivered to a user's feed.
///
/// Rows are append-only; the only mutation ever applied is the monotonic
/// `read` flip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Recipient routing key (a user's role-scoped key or [`ALL_TEACHERS`]).
    #[serde(rename = "userId")]
    pub user_key: String,
    /// Notification kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Title shown in the feed.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the recipient has read this notification.
    pub read: bool,
    /// Additional structured data (JSON).
    pub metadata: Option<serde_json::Value>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Whether the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// Data required to create a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// Recipient routing key.
    pub user_key: String,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Title shown in the feed.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Additional structured data (JSON).
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let n = Notification {
            id: Uuid::new_v4(),
            user_key: "student-1".into(),
            kind: NotificationKind::Assignment,
            title: "New Practice Assignment".into(),
            message: "Your teacher assigned you a practice on loops".into(),
            read: false,
            metadata: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["userId"], "student-1");
        assert_eq!(json["type"], "assignment");
        assert_eq!(json["read"], false);
    }
}
