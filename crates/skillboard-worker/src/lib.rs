//! # skillboard-worker
//!
//! Asynchronous delivery of staged notifications.
//!
//! Services stage side-effect notifications in the outbox within the same
//! transaction as their primary write; this crate drains the outbox into
//! the notifications table with bounded retries.

pub mod dispatcher;
pub mod runner;

pub use dispatcher::OutboxDispatcher;
pub use runner::OutboxRunner;
