//! Assignment lifecycle: creation, completion, listings, and teacher stats.

pub mod content;
pub mod service;
pub mod stats;

pub use service::{AssignmentService, AssignmentView, CreateAssignmentInput, TeacherDashboard};
pub use stats::{Submission, TeacherStats};
