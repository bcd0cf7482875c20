//! # skillboard-auth
//!
//! Credential handling for Skillboard: Argon2id password hashing and
//! verification. Session state is deliberately out of scope — a successful
//! login hands the client its public user projection and nothing else.

pub mod password;

pub use password::PasswordHasher;
