//! Response DTOs.
//!
//! Every success envelope carries `success: true` alongside its named
//! payload, matching what the dashboard front end expects.

use serde::{Deserialize, Serialize};

use skillboard_entity::notification::Notification;
use skillboard_entity::user::UserProfile;
use skillboard_service::assignment::{AssignmentView, Submission, TeacherStats};

/// Envelope for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// Public user projection.
    pub user: UserProfile,
}

/// Envelope for the student roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentsEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// Registered students, newest first.
    pub students: Vec<UserProfile>,
}

/// Envelope for a single assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// The assignment with questions decoded.
    pub assignment: AssignmentView,
}

/// Envelope for a student's assignment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentListEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// Assignments, newest first.
    pub assignments: Vec<AssignmentView>,
}

/// Envelope for the teacher dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDashboardEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// Aggregate counters.
    pub stats: TeacherStats,
    /// Ten most recent completed submissions.
    pub recent_submissions: Vec<Submission>,
    /// All assignments, newest first.
    pub assignments: Vec<AssignmentView>,
}

/// Envelope for a single notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// The created notification.
    pub notification: Notification,
}

/// Envelope for a notification feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedEnvelope {
    /// Always true on the success path.
    pub success: bool,
    /// Visible notifications, newest first.
    pub notifications: Vec<Notification>,
    /// Unread count among the visible notifications.
    pub unread_count: i64,
}

/// Bare acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    /// Whether the operation succeeded.
    pub success: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
