//! Registration and login flows.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use tokio::sync::Notify;
use tracing::info;

use skillboard_auth::password::PasswordHasher;
use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_database::repositories::outbox::OutboxRepository;
use skillboard_database::repositories::user::UserRepository;
use skillboard_entity::notification::{NewNotification, NotificationKind, ALL_TEACHERS};
use skillboard_entity::user::model::CreateUser;
use skillboard_entity::user::{UserProfile, UserRole};

/// Registration request data. Presence checks happen here, not in the
/// HTTP layer, so every caller gets the same validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password (hashed before storage, never persisted).
    pub password: Option<String>,
    /// Requested role; defaults to student.
    pub role: Option<String>,
}

/// Login request data.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Role the user selected on the login form.
    pub role: Option<String>,
}

/// Handles account registration and credential verification.
#[derive(Debug, Clone)]
pub struct AuthService {
    pool: PgPool,
    users: Arc<UserRepository>,
    outbox: Arc<OutboxRepository>,
    hasher: Arc<PasswordHasher>,
    outbox_signal: Arc<Notify>,
    max_delivery_attempts: i32,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        pool: PgPool,
        users: Arc<UserRepository>,
        outbox: Arc<OutboxRepository>,
        hasher: Arc<PasswordHasher>,
        outbox_signal: Arc<Notify>,
        max_delivery_attempts: i32,
    ) -> Self {
        Self {
            pool,
            users,
            outbox,
            hasher,
            outbox_signal,
            max_delivery_attempts,
        }
    }

    /// Registers a new account.
    ///
    /// A student registration additionally stages one `registration`
    /// notification per existing teacher plus one broadcast addressed to
    /// `all-teachers`, committed atomically with the user row.
    pub async fn register(&self, input: RegisterInput) -> AppResult<UserProfile> {
        let name = required(input.name, "Name, email and password required")?;
        let email = required(input.email, "Name, email and password required")?;
        let password = required(input.password, "Name, email and password required")?;

        let role = match input.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => UserRole::Student,
            Some(r) => r.parse()?,
        };

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash(&password)?;
        let routing_key = role.routing_key(Utc::now().timestamp_millis());

        let data = CreateUser {
            name: name.clone(),
            email: email.clone(),
            password_hash,
            role,
            student_id: (role == UserRole::Student).then(|| routing_key.clone()),
            teacher_id: (role == UserRole::Teacher).then(|| routing_key.clone()),
        };

        // Teacher keys are read before the transaction opens; a teacher
        // registering concurrently simply misses this announcement.
        let teacher_keys = if role == UserRole::Student {
            self.users.teacher_routing_keys().await?
        } else {
            Vec::new()
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = self.users.insert(&mut tx, &data).await?;

        if role == UserRole::Student {
            let metadata = json!({
                "studentId": &routing_key,
                "studentName": &name,
                "email": &email,
            });

            for teacher_key in &teacher_keys {
                let notice = registration_notice(teacher_key, &name, &metadata);
                self.outbox
                    .stage(&mut tx, &notice, self.max_delivery_attempts)
                    .await?;
            }

            let broadcast = registration_notice(ALL_TEACHERS, &name, &metadata);
            self.outbox
                .stage(&mut tx, &broadcast, self.max_delivery_attempts)
                .await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit registration", e)
        })?;
        self.outbox_signal.notify_one();

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(user.profile())
    }

    /// Verifies credentials and the selected role.
    ///
    /// Unknown emails and bad passwords are indistinguishable to the caller;
    /// a role mismatch deliberately reveals the registered role so the user
    /// can pick the right one.
    pub async fn login(&self, input: LoginInput) -> AppResult<UserProfile> {
        let email = required(input.email, "Email and password required")?;
        let password = required(input.password, "Email and password required")?;
        let role = required(input.role, "Role selection required")?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if user.role.as_str() != role.to_lowercase() {
            let registered = user.role.as_str().to_uppercase();
            return Err(AppError::authorization(format!(
                "This account is registered as {registered}. Please select {registered} to login."
            )));
        }

        // Legacy accounts carry an empty hash; they must register again.
        if user.password_hash.is_empty() {
            return Err(AppError::authentication(
                "Account needs password reset. Please register again with a new password.",
            ));
        }

        if !self.hasher.verify(&password, &user.password_hash)? {
            return Err(AppError::authentication(
                "Invalid password. Please check your credentials.",
            ));
        }

        info!(user_id = %user.id, "User logged in");

        Ok(user.profile())
    }

    /// Lists every registered student, newest first.
    pub async fn list_students(&self) -> AppResult<Vec<UserProfile>> {
        let students = self.users.list_students().await?;
        Ok(students.iter().map(|u| u.profile()).collect())
    }
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(message))
}

fn registration_notice(
    recipient: &str,
    student_name: &str,
    metadata: &serde_json::Value,
) -> NewNotification {
    NewNotification {
        user_key: recipient.to_string(),
        kind: NotificationKind::Registration,
        title: "New Student Registered".to_string(),
        message: format!("{student_name} just joined the platform"),
        metadata: Some(metadata.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required(Some("  ".into()), "msg").is_err());
        assert!(required(None, "msg").is_err());
        assert_eq!(required(Some(" a ".into()), "msg").unwrap(), "a");
    }

    #[test]
    fn test_registration_notice_wording() {
        let meta = json!({"studentId": "student-1"});
        let notice = registration_notice("teacher-9", "Alice", &meta);
        assert_eq!(notice.kind, NotificationKind::Registration);
        assert_eq!(notice.title, "New Student Registered");
        assert_eq!(notice.message, "Alice just joined the platform");
        assert_eq!(notice.user_key, "teacher-9");
    }
}
