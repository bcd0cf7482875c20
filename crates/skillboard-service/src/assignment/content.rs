//! Notification wording for assignment lifecycle events.

use serde_json::json;
use uuid::Uuid;

use skillboard_entity::assignment::AssignmentKind;
use skillboard_entity::notification::{NewNotification, NotificationKind};

/// Notice to the student that a new assignment landed in their queue.
///
/// Wording branches on the assignment kind: coding challenges get their own
/// phrasing, everything else reads as practice.
pub fn assignment_notice(
    student_key: &str,
    kind: AssignmentKind,
    topic: &str,
    assignment_id: Uuid,
) -> NewNotification {
    let (title, message) = match kind {
        AssignmentKind::Coding => (
            "New Coding Assignment".to_string(),
            format!("Your teacher assigned you a coding challenge on {topic}"),
        ),
        AssignmentKind::Mcq => (
            "New Practice Assignment".to_string(),
            format!("Your teacher assigned you a practice on {topic}"),
        ),
    };

    NewNotification {
        user_key: student_key.to_string(),
        kind: NotificationKind::Assignment,
        title,
        message,
        metadata: Some(json!({ "assignmentId": assignment_id })),
    }
}

/// Confirmation to the teacher that the assignment went out.
pub fn confirmation_notice(
    teacher_key: &str,
    topic: &str,
    student_id: &str,
    student_name: &str,
    assignment_id: Uuid,
) -> NewNotification {
    NewNotification {
        user_key: teacher_key.to_string(),
        kind: NotificationKind::Confirmation,
        title: "Assignment Sent".to_string(),
        message: format!("Practice on \"{topic}\" assigned to {student_name} successfully"),
        metadata: Some(json!({
            "assignmentId": assignment_id,
            "studentId": student_id,
            "studentName": student_name,
        })),
    }
}

/// Notice to the teacher that a student finished an assignment.
///
/// A perfect score gets celebratory wording.
pub fn completion_notice(
    teacher_key: &str,
    student_name: &str,
    topic: &str,
    score: i32,
    assignment_id: Uuid,
) -> NewNotification {
    let perfect = score == 100;
    let (title, message) = if perfect {
        (
            "🏆 Perfect Score!".to_string(),
            format!(
                "Congratulations! {student_name} achieved 100% on {topic}! Outstanding performance!"
            ),
        )
    } else {
        (
            "Student Completed Practice".to_string(),
            format!("{student_name} completed {topic} with score {score}%"),
        )
    };

    NewNotification {
        user_key: teacher_key.to_string(),
        kind: NotificationKind::Completion,
        title,
        message,
        metadata: Some(json!({
            "assignmentId": assignment_id,
            "score": score,
            "isPerfect": perfect,
        })),
    }
}

/// Achievement notice to the student for a perfect score.
pub fn achievement_notice(student_key: &str, topic: &str, assignment_id: Uuid) -> NewNotification {
    NewNotification {
        user_key: student_key.to_string(),
        kind: NotificationKind::Achievement,
        title: "🏆 Perfect Score Achievement!".to_string(),
        message: format!("Amazing! You scored 100% on {topic}! Your teacher is proud of you!"),
        metadata: Some(json!({ "assignmentId": assignment_id, "topic": topic })),
    }
}
