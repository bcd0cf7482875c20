//! # skillboard-service
//!
//! Business logic service layer for Skillboard. Each service orchestrates
//! repositories and credential handling to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod assignment;
pub mod auth;
pub mod mastery;
pub mod notification;

pub use assignment::AssignmentService;
pub use auth::AuthService;
pub use mastery::MasteryClient;
pub use notification::NotificationService;
