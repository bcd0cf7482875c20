//! Auth handlers — register, login, student roster.

use axum::extract::State;
use axum::Json;

use skillboard_service::auth::{LoginInput, RegisterInput};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{StudentsEnvelope, UserEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .auth_service
        .register(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok(Json(UserEnvelope {
        success: true,
        user,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .auth_service
        .login(LoginInput {
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok(Json(UserEnvelope {
        success: true,
        user,
    }))
}

/// GET /api/auth/students
pub async fn students(
    State(state): State<AppState>,
) -> Result<Json<StudentsEnvelope>, ApiError> {
    let students = state.auth_service.list_students().await?;

    Ok(Json(StudentsEnvelope {
        success: true,
        students,
    }))
}
