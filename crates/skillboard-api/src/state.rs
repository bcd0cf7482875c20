//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use skillboard_core::config::AppConfig;
use skillboard_service::assignment::AssignmentService;
use skillboard_service::auth::AuthService;
use skillboard_service::mastery::MasteryClient;
use skillboard_service::notification::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// Assignment lifecycle.
    pub assignment_service: Arc<AssignmentService>,
    /// Notification feed.
    pub notification_service: Arc<NotificationService>,
    /// Proxy client for the external progress tracker.
    pub mastery_client: Arc<MasteryClient>,
}
