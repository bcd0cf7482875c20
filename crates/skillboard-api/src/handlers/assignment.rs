//! Assignment handlers — create, complete, student list, teacher dashboard.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use skillboard_core::error::AppError;
use skillboard_service::assignment::CreateAssignmentInput;

use crate::dto::request::{CompleteAssignmentRequest, CreateAssignmentRequest};
use crate::dto::response::{AssignmentEnvelope, AssignmentListEnvelope, TeacherDashboardEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/assignments
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Json<AssignmentEnvelope>, ApiError> {
    let assignment = state
        .assignment_service
        .create(CreateAssignmentInput {
            teacher_id: req.teacher_id,
            student_id: req.student_id,
            student_name: req.student_name,
            topic: req.topic,
            level: req.level,
            kind: req.kind,
            questions: req.questions,
        })
        .await?;

    Ok(Json(AssignmentEnvelope {
        success: true,
        assignment,
    }))
}

/// PUT /api/assignments/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CompleteAssignmentRequest>,
) -> Result<Json<AssignmentEnvelope>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // A malformed id cannot match any assignment.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::not_found("Assignment not found"))?;

    let assignment = state
        .assignment_service
        .complete(id, req.score, req.student_name)
        .await?;

    Ok(Json(AssignmentEnvelope {
        success: true,
        assignment,
    }))
}

/// GET /api/assignments/student/{student_id}
pub async fn list_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<AssignmentListEnvelope>, ApiError> {
    let assignments = state.assignment_service.list_by_student(&student_id).await?;

    Ok(Json(AssignmentListEnvelope {
        success: true,
        assignments,
    }))
}

/// GET /api/assignments/teacher/{teacher_id}
pub async fn teacher_dashboard(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<Json<TeacherDashboardEnvelope>, ApiError> {
    let dashboard = state.assignment_service.teacher_dashboard(&teacher_id).await?;

    Ok(Json(TeacherDashboardEnvelope {
        success: true,
        stats: dashboard.stats,
        recent_submissions: dashboard.recent_submissions,
        assignments: dashboard.assignments,
    }))
}
