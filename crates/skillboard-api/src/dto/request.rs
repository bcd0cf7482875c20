//! Request DTOs.
//!
//! Required-field checks live in the service layer so every caller gets the
//! same error messages; fields here are optional and forwarded as-is.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Requested role (defaults to student).
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Role selected on the login form.
    pub role: Option<String>,
}

/// Assignment creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    /// Routing key of the assigning teacher.
    pub teacher_id: Option<String>,
    /// Routing key of the target student.
    pub student_id: Option<String>,
    /// Student display name.
    pub student_name: Option<String>,
    /// Topic the assignment covers.
    pub topic: Option<String>,
    /// Difficulty level; clients send either `level` or `difficulty`.
    #[serde(alias = "difficulty")]
    pub level: Option<String>,
    /// Assignment kind.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Question payload, stored opaque.
    pub questions: Option<serde_json::Value>,
}

/// Assignment completion request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAssignmentRequest {
    /// Achieved score.
    #[validate(range(min = 0, max = 100, message = "Score must be between 0 and 100"))]
    pub score: Option<i32>,
    /// Student display name used in the completion notices.
    pub student_name: Option<String>,
}

/// Notification creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Recipient routing key.
    pub user_id: Option<String>,
    /// Notification kind.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Title shown in the feed.
    pub title: Option<String>,
    /// Body text.
    pub message: Option<String>,
    /// Additional structured data.
    pub metadata: Option<serde_json::Value>,
}

/// Mark-read request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    /// Identifier of the notification to flip.
    pub notification_id: Option<String>,
}

/// Mastery proxy query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryParams {
    /// Student to fetch; a demo default applies when omitted.
    pub student_id: Option<String>,
}
