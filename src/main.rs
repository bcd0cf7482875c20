//! Skillboard Server — student/teacher learning-progress dashboard backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::{watch, Notify};
use tracing_subscriber::{fmt, EnvFilter};

use skillboard_core::config::AppConfig;
use skillboard_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SKILLBOARD_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Skillboard v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = skillboard_database::connection::create_pool(&config.database).await?;
    skillboard_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(skillboard_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let assignment_repo = Arc::new(
        skillboard_database::repositories::assignment::AssignmentRepository::new(db_pool.clone()),
    );
    let notification_repo = Arc::new(
        skillboard_database::repositories::notification::NotificationRepository::new(
            db_pool.clone(),
        ),
    );
    let outbox_repo = Arc::new(
        skillboard_database::repositories::outbox::OutboxRepository::new(db_pool.clone()),
    );

    // ── Step 3: Services ─────────────────────────────────────────
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
    let notification_service = Arc::new(skillboard_service::notification::NotificationService::new(
        Arc::clone(&user_repo),
        Arc::clone(&notification_repo),
    ));
    let mastery_client = Arc::new(skillboard_service::mastery::MasteryClient::new(
        &config.mastery,
    )?);

    tracing::info!("Services initialized");

    // ── Step 4: Shutdown channel + outbox runner ─────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let runner_handle = if config.worker.enabled {
        let dispatcher = Arc::new(skillboard_worker::dispatcher::OutboxDispatcher::new(
            db_pool.clone(),
            Arc::clone(&outbox_repo),
            Arc::clone(&notification_repo),
        ));
        let runner = skillboard_worker::runner::OutboxRunner::new(
            dispatcher,
            config.worker.clone(),
            Arc::clone(&outbox_signal),
        );

        let runner_cancel = shutdown_rx.clone();
        let handle = tokio::spawn(async move {
            runner.run(runner_cancel).await;
        });

        tracing::info!("Outbox runner started");
        Some(handle)
    } else {
        tracing::info!("Outbox runner disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = skillboard_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        auth_service,
        assignment_service,
        notification_service,
        mastery_client,
    };

    let app = skillboard_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Skillboard server listening on {addr}");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 7: Wait for background tasks ────────────────────────
    if let Some(handle) = runner_handle {
        let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("Skillboard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
