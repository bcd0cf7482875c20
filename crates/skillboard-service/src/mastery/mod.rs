//! Mastery proxy — forwards to the external progress tracker.

pub mod client;
pub mod report;

pub use client::MasteryClient;
pub use report::{MasteryReport, TopicMastery};
