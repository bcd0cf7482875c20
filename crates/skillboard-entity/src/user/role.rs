//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// A role is fixed at registration and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Receives assignments and mastery tracking.
    Student,
    /// Creates assignments and monitors student progress.
    Teacher,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Derive the role-scoped routing key minted at registration.
    ///
    /// The key doubles as the notification routing address for the account,
    /// e.g. `student-1717171717171`.
    pub fn routing_key(&self, timestamp_millis: i64) -> String {
        format!("{}-{timestamp_millis}", self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = skillboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(skillboard_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, teacher"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("student".parse::<UserRole>().unwrap(), UserRole::Student);
        assert_eq!("TEACHER".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_routing_key_prefix() {
        assert_eq!(
            UserRole::Student.routing_key(1717171717171),
            "student-1717171717171"
        );
        assert!(UserRole::Teacher.routing_key(1).starts_with("teacher-"));
    }
}
