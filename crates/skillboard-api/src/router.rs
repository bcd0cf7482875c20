//! Route definitions for the Skillboard HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(assignment_routes())
        .merge(notification_routes())
        .merge(mastery_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, student roster
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/students", get(handlers::auth::students))
}

/// Assignment CRUD and teacher dashboard
fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/assignments", post(handlers::assignment::create))
        .route(
            "/assignments/{id}/complete",
            put(handlers::assignment::complete),
        )
        .route(
            "/assignments/student/{student_id}",
            get(handlers::assignment::list_by_student),
        )
        .route(
            "/assignments/teacher/{teacher_id}",
            get(handlers::assignment::teacher_dashboard),
        )
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(handlers::notification::create))
        .route(
            "/notifications/{user_id}",
            get(handlers::notification::list_for_user),
        )
        .route(
            "/notifications/{user_id}/mark-read",
            put(handlers::notification::mark_read),
        )
}

/// Mastery proxy endpoint
fn mastery_routes() -> Router<AppState> {
    Router::new().route("/mastery", get(handlers::mastery::get_mastery))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
