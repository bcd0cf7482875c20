//! Aggregate statistics for the teacher dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skillboard_entity::assignment::Assignment;

/// Dashboard-level aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStats {
    /// Total assignments handed out.
    pub total_assigned: i64,
    /// Assignments completed so far.
    pub total_completed: i64,
    /// Assignments still open (`total_assigned - total_completed`).
    pub total_pending: i64,
    /// Average score over completed assignments that carry a score,
    /// rounded to the nearest integer; 0 when none exist.
    pub avg_score: i64,
}

/// Projection of a completed assignment for the recent-submissions list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Assignment identifier.
    pub id: Uuid,
    /// Student display name.
    pub student_name: String,
    /// Assignment topic.
    pub topic: String,
    /// Achieved score.
    pub score: Option<i32>,
    /// Completion time.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Compute aggregate counters over the full assignment set.
pub fn compute_stats(assignments: &[Assignment]) -> TeacherStats {
    let total_assigned = assignments.len() as i64;
    let total_completed = assignments.iter().filter(|a| a.completed).count() as i64;

    let scored: Vec<i32> = assignments
        .iter()
        .filter(|a| a.completed)
        .filter_map(|a| a.score)
        .collect();

    let avg_score = if scored.is_empty() {
        0
    } else {
        let sum: i64 = scored.iter().map(|s| *s as i64).sum();
        (sum as f64 / scored.len() as f64).round() as i64
    };

    TeacherStats {
        total_assigned,
        total_completed,
        total_pending: total_assigned - total_completed,
        avg_score,
    }
}

/// The newest completed assignments, projected for the dashboard.
///
/// Assumes the input is already ordered newest first.
pub fn recent_submissions(assignments: &[Assignment], limit: usize) -> Vec<Submission> {
    assignments
        .iter()
        .filter(|a| a.completed)
        .take(limit)
        .map(|a| Submission {
            id: a.id,
            student_name: a.student_name.clone(),
            topic: a.topic.clone(),
            score: a.score,
            completed_at: a.completed_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboard_entity::assignment::{AssignmentKind, AssignmentLevel};

    fn assignment(completed: bool, score: Option<i32>) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            teacher_id: "teacher-1".into(),
            student_id: "student-1".into(),
            student_name: "Alice".into(),
            topic: "loops".into(),
            level: AssignmentLevel::Easy,
            kind: AssignmentKind::Mcq,
            questions: "[]".into(),
            completed,
            score,
            completed_at: completed.then(Utc::now),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_is_assigned_minus_completed() {
        let set = vec![
            assignment(true, Some(90)),
            assignment(false, None),
            assignment(false, None),
        ];
        let stats = compute_stats(&set);
        assert_eq!(stats.total_assigned, 3);
        assert_eq!(stats.total_completed, 1);
        assert_eq!(stats.total_pending, stats.total_assigned - stats.total_completed);
    }

    #[test]
    fn test_avg_score_rounds_to_nearest() {
        let set = vec![assignment(true, Some(50)), assignment(true, Some(75))];
        assert_eq!(compute_stats(&set).avg_score, 63);
    }

    #[test]
    fn test_avg_score_zero_without_scored_completions() {
        // A completed-but-unscored row must not count towards the average.
        let set = vec![assignment(false, None), assignment(true, None)];
        assert_eq!(compute_stats(&set).avg_score, 0);
        assert_eq!(compute_stats(&[]).avg_score, 0);
    }

    #[test]
    fn test_recent_submissions_skips_open_and_caps() {
        let mut set = vec![assignment(false, None)];
        for i in 0..12 {
            set.push(assignment(true, Some(i * 5)));
        }
        let recent = recent_submissions(&set, 10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].score, Some(0));
        assert!(recent.iter().all(|s| s.completed_at.is_some()));
    }
}
