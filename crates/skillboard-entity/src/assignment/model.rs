//! Assignment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::AssignmentKind;
use super::level::AssignmentLevel;

/// A practice assignment handed from a teacher to a student.
///
/// The lifecycle is a single monotonic transition: created incomplete, then
/// completed once with a score and timestamp. There is no re-open or
/// re-grade path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: Uuid,
    /// Routing key of the assigning teacher.
    pub teacher_id: String,
    /// Routing key of the target student.
    pub student_id: String,
    /// Denormalized student display name.
    pub student_name: String,
    /// Topic the assignment covers.
    pub topic: String,
    /// Difficulty level.
    pub level: AssignmentLevel,
    /// Assignment kind.
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
    /// Serialized question payload. Opaque to the backend; decoded only
    /// when handed back to clients.
    pub questions: String,
    /// Whether the student has completed the assignment.
    pub completed: bool,
    /// Achieved score (0-100), set on completion.
    pub score: Option<i32>,
    /// When the assignment was completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// When the assignment was created.
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Whether the assignment was completed with a perfect score.
    pub fn is_perfect(&self) -> bool {
        self.completed && self.score == Some(100)
    }
}

/// Data required to create a new assignment.
#[derive(Debug, Clone)]
pub struct CreateAssignment {
    /// Routing key of the assigning teacher.
    pub teacher_id: String,
    /// Routing key of the target student.
    pub student_id: String,
    /// Denormalized student display name.
    pub student_name: String,
    /// Topic the assignment covers.
    pub topic: String,
    /// Difficulty level.
    pub level: AssignmentLevel,
    /// Assignment kind.
    pub kind: AssignmentKind,
    /// Serialized question payload.
    pub questions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            teacher_id: "teacher-1".into(),
            student_id: "student-1".into(),
            student_name: "Alice".into(),
            topic: "loops".into(),
            level: AssignmentLevel::Easy,
            kind: AssignmentKind::Mcq,
            questions: "[]".into(),
            completed: false,
            score: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_perfect_requires_completion() {
        let mut a = sample();
        a.score = Some(100);
        assert!(!a.is_perfect());
        a.completed = true;
        assert!(a.is_perfect());
        a.score = Some(99);
        assert!(!a.is_perfect());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "mcq");
        assert_eq!(json["studentName"], "Alice");
        assert!(json.get("kind").is_none());
    }
}
