//! Mastery payload types and the zero-mastery fallback.
//!
//! Field names follow the progress tracker's wire format (snake_case) and
//! are passed through to clients untouched.

use serde::{Deserialize, Serialize};

/// The fixed curriculum, in recommended learning order.
pub const CURRICULUM_TOPICS: [&str; 7] = [
    "variables-and-data-types",
    "control-flow",
    "functions",
    "data-structures",
    "object-oriented-programming",
    "file-io-and-exceptions",
    "modules-and-packages",
];

/// Per-topic mastery as reported by the progress tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicMastery {
    /// Curriculum topic slug.
    pub topic: String,
    /// Estimated competence, 0.0-1.0.
    pub mastery_level: f64,
    /// Number of tracked interactions on the topic.
    pub interactions_count: i64,
}

/// A student's full mastery report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryReport {
    /// Student identifier the report belongs to.
    pub student_id: String,
    /// Overall competence estimate, 0.0-1.0.
    pub overall_mastery: f64,
    /// Per-topic breakdown.
    pub topic_mastery: Vec<TopicMastery>,
    /// Topics flagged below the competence threshold.
    #[serde(default)]
    pub struggling_topics: Vec<String>,
    /// The topic the tracker suggests studying next.
    pub next_recommended_topic: String,
}

/// The report synthesized for a student the tracker has never seen:
/// zero mastery across the fixed curriculum, starting from its first topic.
pub fn initial_report(student_id: &str) -> MasteryReport {
    MasteryReport {
        student_id: student_id.to_string(),
        overall_mastery: 0.0,
        topic_mastery: CURRICULUM_TOPICS
            .iter()
            .map(|topic| TopicMastery {
                topic: topic.to_string(),
                mastery_level: 0.0,
                interactions_count: 0,
            })
            .collect(),
        struggling_topics: Vec::new(),
        next_recommended_topic: CURRICULUM_TOPICS[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_report_shape() {
        let report = initial_report("student-1");
        assert_eq!(report.student_id, "student-1");
        assert_eq!(report.overall_mastery, 0.0);
        assert_eq!(report.topic_mastery.len(), 7);
        assert!(report.struggling_topics.is_empty());
        assert_eq!(report.next_recommended_topic, "variables-and-data-types");
        assert!(report
            .topic_mastery
            .iter()
            .all(|t| t.mastery_level == 0.0 && t.interactions_count == 0));
    }

    #[test]
    fn test_missing_struggling_topics_defaults_to_empty() {
        let json = r#"{
            "student_id": "s",
            "overall_mastery": 0.4,
            "topic_mastery": [],
            "next_recommended_topic": "functions"
        }"#;
        let report: MasteryReport = serde_json::from_str(json).unwrap();
        assert!(report.struggling_topics.is_empty());
    }
}
