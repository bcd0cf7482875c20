//! Assignment creation, completion, and listings.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tokio::sync::Notify;
use tracing::info;
use uuid::Uuid;

use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;
use skillboard_database::repositories::assignment::AssignmentRepository;
use skillboard_database::repositories::outbox::OutboxRepository;
use skillboard_entity::assignment::model::CreateAssignment;
use skillboard_entity::assignment::{Assignment, AssignmentKind, AssignmentLevel};

use super::content;
use super::stats::{self, Submission, TeacherStats};

/// Assignment creation request data.
#[derive(Debug, Clone, Default)]
pub struct CreateAssignmentInput {
    /// Routing key of the assigning teacher.
    pub teacher_id: Option<String>,
    /// Routing key of the target student.
    pub student_id: Option<String>,
    /// Student display name (denormalized onto the assignment).
    pub student_name: Option<String>,
    /// Topic the assignment covers.
    pub topic: Option<String>,
    /// Difficulty level; defaults to easy.
    pub level: Option<String>,
    /// Assignment kind; defaults to mcq.
    pub kind: Option<String>,
    /// Question payload, stored serialized and opaque.
    pub questions: Option<serde_json::Value>,
}

/// An assignment with its question blob decoded for clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    /// Unique assignment identifier.
    pub id: Uuid,
    /// Routing key of the assigning teacher.
    pub teacher_id: String,
    /// Routing key of the target student.
    pub student_id: String,
    /// Student display name.
    pub student_name: String,
    /// Topic the assignment covers.
    pub topic: String,
    /// Difficulty level.
    pub level: AssignmentLevel,
    /// Assignment kind.
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
    /// Decoded question payload.
    pub questions: serde_json::Value,
    /// Whether the assignment is completed.
    pub completed: bool,
    /// Achieved score, if completed.
    pub score: Option<i32>,
    /// Completion time, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl AssignmentView {
    fn decode(assignment: Assignment) -> AppResult<Self> {
        let questions = serde_json::from_str(&assignment.questions)?;
        Ok(Self {
            id: assignment.id,
            teacher_id: assignment.teacher_id,
            student_id: assignment.student_id,
            student_name: assignment.student_name,
            topic: assignment.topic,
            level: assignment.level,
            kind: assignment.kind,
            questions,
            completed: assignment.completed,
            score: assignment.score,
            completed_at: assignment.completed_at,
            created_at: assignment.created_at,
        })
    }
}

/// Everything the teacher dashboard renders in one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDashboard {
    /// Aggregate counters.
    pub stats: TeacherStats,
    /// The ten most recent completed submissions.
    pub recent_submissions: Vec<Submission>,
    /// All assignments, newest first.
    pub assignments: Vec<AssignmentView>,
}

/// Number of completed submissions shown on the dashboard.
const RECENT_SUBMISSION_LIMIT: usize = 10;

/// Manages the assignment lifecycle and its notification side effects.
#[derive(Debug, Clone)]
pub struct AssignmentService {
    pool: PgPool,
    assignments: Arc<AssignmentRepository>,
    outbox: Arc<OutboxRepository>,
    outbox_signal: Arc<Notify>,
    max_delivery_attempts: i32,
}

impl AssignmentService {
    /// Creates a new assignment service.
    pub fn new(
        pool: PgPool,
        assignments: Arc<AssignmentRepository>,
        outbox: Arc<OutboxRepository>,
        outbox_signal: Arc<Notify>,
        max_delivery_attempts: i32,
    ) -> Self {
        Self {
            pool,
            assignments,
            outbox,
            outbox_signal,
            max_delivery_attempts,
        }
    }

    /// Creates an assignment and stages exactly two notifications: the
    /// student's assignment notice and the teacher's confirmation, committed
    /// atomically with the assignment row.
    pub async fn create(&self, input: CreateAssignmentInput) -> AppResult<AssignmentView> {
        let teacher_id = required(input.teacher_id, "teacherId is required")?;
        let student_id = required(input.student_id, "studentId is required")?;
        let student_name = required(input.student_name, "studentName is required")?;
        let topic = required(input.topic, "topic is required")?;

        let level = parse_or_default::<AssignmentLevel>(input.level)?;
        let kind = parse_or_default::<AssignmentKind>(input.kind)?;

        let questions = input
            .questions
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));

        let data = CreateAssignment {
            teacher_id: teacher_id.clone(),
            student_id: student_id.clone(),
            student_name: student_name.clone(),
            topic: topic.clone(),
            level,
            kind,
            questions: serde_json::to_string(&questions)?,
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let assignment = self.assignments.insert(&mut tx, &data).await?;

        let student_notice =
            content::assignment_notice(&student_id, kind, &topic, assignment.id);
        self.outbox
            .stage(&mut tx, &student_notice, self.max_delivery_attempts)
            .await?;

        let teacher_notice = content::confirmation_notice(
            &teacher_id,
            &topic,
            &student_id,
            &student_name,
            assignment.id,
        );
        self.outbox
            .stage(&mut tx, &teacher_notice, self.max_delivery_attempts)
            .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit assignment", e)
        })?;
        self.outbox_signal.notify_one();

        info!(
            assignment_id = %assignment.id,
            teacher = %teacher_id,
            student = %student_id,
            topic = %topic,
            "Assignment created"
        );

        AssignmentView::decode(assignment)
    }

    /// Completes an assignment with the given score.
    ///
    /// Stages the teacher's completion notice, plus the student's
    /// achievement notice on a perfect score.
    pub async fn complete(
        &self,
        assignment_id: Uuid,
        score: Option<i32>,
        student_name: Option<String>,
    ) -> AppResult<AssignmentView> {
        let score = score.ok_or_else(|| AppError::validation("score is required"))?;
        if !(0..=100).contains(&score) {
            return Err(AppError::validation("Score must be between 0 and 100"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let assignment = self
            .assignments
            .complete(&mut tx, assignment_id, score)
            .await?
            .ok_or_else(|| AppError::not_found("Assignment not found"))?;

        // The client may send a fresher display name than the stored one.
        let student_name = student_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| assignment.student_name.clone());

        let teacher_notice = content::completion_notice(
            &assignment.teacher_id,
            &student_name,
            &assignment.topic,
            score,
            assignment.id,
        );
        self.outbox
            .stage(&mut tx, &teacher_notice, self.max_delivery_attempts)
            .await?;

        if score == 100 {
            let achievement = content::achievement_notice(
                &assignment.student_id,
                &assignment.topic,
                assignment.id,
            );
            self.outbox
                .stage(&mut tx, &achievement, self.max_delivery_attempts)
                .await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit completion", e)
        })?;
        self.outbox_signal.notify_one();

        info!(
            assignment_id = %assignment.id,
            score,
            "Assignment completed"
        );

        AssignmentView::decode(assignment)
    }

    /// Lists a student's assignments, newest first, with questions decoded.
    pub async fn list_by_student(&self, student_id: &str) -> AppResult<Vec<AssignmentView>> {
        let assignments = self.assignments.find_by_student(student_id).await?;
        assignments.into_iter().map(AssignmentView::decode).collect()
    }

    /// Builds the teacher dashboard.
    ///
    /// Demo policy: every assignment in the system is included regardless of
    /// the requesting teacher, so a single classroom view works across
    /// accounts.
    pub async fn teacher_dashboard(&self, _teacher_id: &str) -> AppResult<TeacherDashboard> {
        let assignments = self.assignments.find_all().await?;

        let stats = stats::compute_stats(&assignments);
        let recent_submissions = stats::recent_submissions(&assignments, RECENT_SUBMISSION_LIMIT);

        let assignments = assignments
            .into_iter()
            .map(AssignmentView::decode)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(TeacherDashboard {
            stats,
            recent_submissions,
            assignments,
        })
    }
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(message))
}

fn parse_or_default<T>(value: Option<String>) -> AppResult<T>
where
    T: Default + std::str::FromStr<Err = AppError>,
{
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(T::default()),
        Some(v) => v.parse(),
    }
}
