//! Notification ingestion, role-filtered feeds, and mark-read.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use skillboard_core::error::AppError;
use skillboard_core::result::AppResult;
use skillboard_database::repositories::notification::NotificationRepository;
use skillboard_database::repositories::user::UserRepository;
use skillboard_entity::notification::{NewNotification, Notification, NotificationKind};

use super::routing;

/// Notification creation request data.
#[derive(Debug, Clone, Default)]
pub struct CreateNotificationInput {
    /// Recipient routing key.
    pub user_id: Option<String>,
    /// Notification kind.
    pub kind: Option<String>,
    /// Title shown in the feed.
    pub title: Option<String>,
    /// Body text.
    pub message: Option<String>,
    /// Additional structured data.
    pub metadata: Option<serde_json::Value>,
}

/// A role-filtered notification feed with its unread counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    /// Visible notifications, newest first.
    pub notifications: Vec<Notification>,
    /// Unread count among the visible notifications.
    pub unread_count: i64,
}

/// Manages the notification feed.
#[derive(Debug, Clone)]
pub struct NotificationService {
    users: Arc<UserRepository>,
    notifications: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(users: Arc<UserRepository>, notifications: Arc<NotificationRepository>) -> Self {
        Self {
            users,
            notifications,
        }
    }

    /// Creates a notification directly (external ingestion path).
    ///
    /// There is no idempotence key; duplicate calls produce duplicate rows
    /// by design.
    pub async fn create(&self, input: CreateNotificationInput) -> AppResult<Notification> {
        const MISSING: &str = "userId, type, title, and message are required";

        let user_key = required(input.user_id, MISSING)?;
        let kind = required(input.kind, MISSING)?.parse::<NotificationKind>()?;
        let title = required(input.title, MISSING)?;
        let message = required(input.message, MISSING)?;

        let notification = self
            .notifications
            .create(&NewNotification {
                user_key: user_key.clone(),
                kind,
                title,
                message,
                metadata: input.metadata,
            })
            .await?;

        info!(
            notification_id = %notification.id,
            user_key = %user_key,
            kind = %kind,
            "Notification created"
        );

        Ok(notification)
    }

    /// Lists the feed for a routing key.
    ///
    /// The recipient's role is resolved from the stored user record rather
    /// than sniffed from the key's prefix; keys that match no account yield
    /// an empty feed rather than an error.
    pub async fn list_for_user(&self, user_key: &str) -> AppResult<NotificationFeed> {
        let Some(user) = self.users.find_by_routing_key(user_key).await? else {
            debug!(user_key = %user_key, "No account for routing key; empty feed");
            return Ok(NotificationFeed {
                notifications: Vec::new(),
                unread_count: 0,
            });
        };

        let kinds = routing::visible_kinds(user.role);
        let notifications = self
            .notifications
            .find_by_key_and_kinds(user_key, kinds)
            .await?;

        let unread_count = notifications.iter().filter(|n| n.is_unread()).count() as i64;

        Ok(NotificationFeed {
            notifications,
            unread_count,
        })
    }

    /// Flips a notification to read.
    ///
    /// The flip is keyed by notification id alone; ownership is not
    /// verified because broadcast rows have no single owner. Repeating the
    /// call is a no-op.
    pub async fn mark_read(&self, user_key: &str, notification_id: Uuid) -> AppResult<()> {
        let updated = self.notifications.mark_read(notification_id).await?;
        if !updated {
            return Err(AppError::not_found("Notification not found"));
        }

        debug!(
            notification_id = %notification_id,
            user_key = %user_key,
            "Notification marked read"
        );

        Ok(())
    }
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(message))
}
