//! # skillboard-api
//!
//! HTTP API layer for Skillboard built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, logging),
//! DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
