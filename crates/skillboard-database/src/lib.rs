//! # skillboard-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Skillboard entities.

pub mod connection;
pub mod migration;
pub mod repositories;
