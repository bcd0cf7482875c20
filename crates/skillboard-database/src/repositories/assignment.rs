//! Assignment repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_entity::assignment::model::CreateAssignment;
use skillboard_entity::assignment::Assignment;

/// Repository for assignment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new assignment inside an open transaction.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        data: &CreateAssignment,
    ) -> AppResult<Assignment> {
        sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (teacher_id, student_id, student_name, topic, level, kind, questions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.teacher_id)
        .bind(&data.student_id)
        .bind(&data.student_name)
        .bind(&data.topic)
        .bind(data.level)
        .bind(data.kind)
        .bind(&data.questions)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create assignment", e))
    }

    /// Mark an assignment completed with the given score.
    ///
    /// The update is unconditional and keyed by primary id: concurrent
    /// completions are last-write-wins. Returns `None` for an unknown id.
    pub async fn complete(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        score: i32,
    ) -> AppResult<Option<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "UPDATE assignments SET completed = TRUE, score = $2, completed_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(score)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to complete assignment", e)
        })
    }

    /// List a student's assignments, newest first.
    pub async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE student_id = $1 ORDER BY created_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assignments", e)
        })
    }

    /// List every assignment in the system, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>("SELECT * FROM assignments ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list assignments", e)
            })
    }
}
