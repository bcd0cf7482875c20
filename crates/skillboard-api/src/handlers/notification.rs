//! Notification handlers — create, feed, mark-read.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use skillboard_core::error::AppError;
use skillboard_service::notification::CreateNotificationInput;

use crate::dto::request::{CreateNotificationRequest, MarkReadRequest};
use crate::dto::response::{AckResponse, NotificationEnvelope, NotificationFeedEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<Json<NotificationEnvelope>, ApiError> {
    let notification = state
        .notification_service
        .create(CreateNotificationInput {
            user_id: req.user_id,
            kind: req.kind,
            title: req.title,
            message: req.message,
            metadata: req.metadata,
        })
        .await?;

    Ok(Json(NotificationEnvelope {
        success: true,
        notification,
    }))
}

/// GET /api/notifications/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<NotificationFeedEnvelope>, ApiError> {
    let feed = state.notification_service.list_for_user(&user_id).await?;

    Ok(Json(NotificationFeedEnvelope {
        success: true,
        notifications: feed.notifications,
        unread_count: feed.unread_count,
    }))
}

/// PUT /api/notifications/{user_id}/mark-read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let raw_id = req
        .notification_id
        .ok_or_else(|| AppError::validation("notificationId is required"))?;

    // A malformed id cannot match any notification.
    let id = Uuid::parse_str(&raw_id).map_err(|_| AppError::not_found("Notification not found"))?;

    state.notification_service.mark_read(&user_id, id).await?;

    Ok(Json(AckResponse { success: true }))
}
