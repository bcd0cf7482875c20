//! # skillboard-entity
//!
//! Domain entity models for Skillboard. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod assignment;
pub mod notification;
pub mod outbox;
pub mod user;
