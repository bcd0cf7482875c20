//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, Notify, OwnedMutexGuard};
use tower::ServiceExt;

use skillboard_api::state::AppState;
use skillboard_core::config::AppConfig;
use skillboard_database::repositories::assignment::AssignmentRepository;
use skillboard_database::repositories::notification::NotificationRepository;
use skillboard_database::repositories::outbox::OutboxRepository;
use skillboard_database::repositories::user::UserRepository;
use skillboard_worker::dispatcher::OutboxDispatcher;

/// Tests share one database; the lock serializes them so table cleanup in
/// one test cannot race another test's writes.
fn db_lock() -> &'static Arc<Mutex<()>> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    LOCK.get_or_init(|| Arc::new(Mutex::new(())))
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Outbox dispatcher, drained explicitly by tests
    pub dispatcher: Arc<OutboxDispatcher>,
    _guard: OwnedMutexGuard<()>,
}

impl TestApp {
    /// Create a new test application against the test database.
    pub async fn new() -> Self {
        Self::with_mastery(None).await
    }

    /// Create a test application with the mastery proxy pointed at the
    /// given base URL (a fake progress tracker spawned by the test).
    pub async fn with_mastery(mastery_base_url: Option<&str>) -> Self {
        let guard = Arc::clone(db_lock()).lock_owned().await;

        let mut config = AppConfig::load("test").expect("Failed to load test config");
        if let Some(url) = mastery_base_url {
            config.mastery.base_url = url.to_string();
        }

        let db_pool = skillboard_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        skillboard_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let assignment_repo = Arc::new(AssignmentRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let outbox_repo = Arc::new(OutboxRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(skillboard_auth::password::PasswordHasher::new());
        let outbox_signal = Arc::new(Notify::new());

        let auth_service = Arc::new(skillboard_service::auth::AuthService::new(
            db_pool.clone(),
            Arc::clone(&user_repo),
            Arc::clone(&outbox_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&outbox_signal),
            config.worker.max_attempts,
        ));
        let assignment_service = Arc::new(skillboard_service::assignment::AssignmentService::new(
            db_pool.clone(),
            Arc::clone(&assignment_repo),
            Arc::clone(&outbox_repo),
            Arc::clone(&outbox_signal),
            config.worker.max_attempts,
        ));
        let notification_service =
            Arc::new(skillboard_service::notification::NotificationService::new(
                Arc::clone(&user_repo),
                Arc::clone(&notification_repo),
            ));
        let mastery_client = Arc::new(
            skillboard_service::mastery::MasteryClient::new(&config.mastery)
                .expect("Failed to build mastery client"),
        );

        let dispatcher = Arc::new(OutboxDispatcher::new(
            db_pool.clone(),
            Arc::clone(&outbox_repo),
            Arc::clone(&notification_repo),
        ));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            auth_service,
            assignment_service,
            notification_service,
            mastery_client,
        };

        let router = skillboard_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
            dispatcher,
            _guard: guard,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["notification_outbox", "notifications", "assignments", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Deliver everything staged in the outbox.
    pub async fn drain_outbox(&self) -> u64 {
        self.dispatcher
            .drain()
            .await
            .expect("Failed to drain outbox")
    }

    /// Register a user through the API and return the user projection.
    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "role": role,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        response.body["user"].clone()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
