//! Assignment difficulty level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "assignment_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentLevel {
    /// Introductory difficulty. Used when no level is specified.
    #[default]
    Easy,
    /// Intermediate difficulty.
    Medium,
    /// Advanced difficulty.
    Hard,
}

impl AssignmentLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for AssignmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssignmentLevel {
    type Err = skillboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(skillboard_core::AppError::validation(format!(
                "Invalid level: '{s}'. Expected one of: easy, medium, hard"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_easy() {
        assert_eq!(AssignmentLevel::default(), AssignmentLevel::Easy);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("Hard".parse::<AssignmentLevel>().unwrap(), AssignmentLevel::Hard);
        assert!("extreme".parse::<AssignmentLevel>().is_err());
    }
}
