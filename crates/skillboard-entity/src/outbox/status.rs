//! Outbox entry status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery state of an outbox entry.
///
/// `Pending → Delivering → Delivered`, with `Delivering → Pending` on a
/// retryable failure and `Delivering → Failed` once attempts are exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "outbox_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutboxStatus {
    /// Waiting to be claimed by the dispatcher.
    Pending,
    /// Claimed and currently being delivered.
    Delivering,
    /// Delivered to the notifications table.
    Delivered,
    /// Gave up after exhausting delivery attempts.
    Failed,
}

impl OutboxStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for OutboxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
