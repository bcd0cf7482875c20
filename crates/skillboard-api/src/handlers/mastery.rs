//! Mastery proxy handler.

use axum::extract::{Query, State};
use axum::Json;

use skillboard_service::mastery::MasteryReport;

use crate::dto::request::MasteryParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Student used when the dashboard has not picked one yet.
const DEMO_STUDENT: &str = "demo-student-001";

/// GET /api/mastery?studentId=
///
/// The payload is returned exactly as the progress tracker shaped it (or as
/// synthesized for unknown students) — no envelope.
pub async fn get_mastery(
    State(state): State<AppState>,
    Query(params): Query<MasteryParams>,
) -> Result<Json<MasteryReport>, ApiError> {
    let student_id = params
        .student_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEMO_STUDENT.to_string());

    let report = state.mastery_client.get_mastery(&student_id).await?;

    Ok(Json(report))
}
