//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user of the platform.
///
/// Exactly one of `student_id` / `teacher_id` is set, matching `role`;
/// that value is the account's notification routing key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, compared case-insensitively).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Student routing key (set iff `role` is student).
    pub student_id: Option<String>,
    /// Teacher routing key (set iff `role` is teacher).
    pub teacher_id: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The role-scoped routing key for this account.
    pub fn routing_key(&self) -> Option<&str> {
        match self.role {
            UserRole::Student => self.student_id.as_deref(),
            UserRole::Teacher => self.teacher_id.as_deref(),
        }
    }

    /// The public projection returned to clients (no credential material).
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            student_id: self.student_id.clone(),
            teacher_id: self.teacher_id.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public user projection exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Student routing key, if any.
    pub student_id: Option<String>,
    /// Teacher routing key, if any.
    pub teacher_id: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Student routing key (students only).
    pub student_id: Option<String>,
    /// Teacher routing key (teachers only).
    pub teacher_id: Option<String>,
}
