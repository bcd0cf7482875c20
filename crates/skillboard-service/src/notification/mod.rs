//! Notification feed: creation, role-filtered listing, and mark-read.

pub mod routing;
pub mod service;

pub use service::{CreateNotificationInput, NotificationFeed, NotificationService};
