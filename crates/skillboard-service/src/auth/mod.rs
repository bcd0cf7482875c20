//! Registration and login.

pub mod service;

pub use service::{AuthService, LoginInput, RegisterInput};
