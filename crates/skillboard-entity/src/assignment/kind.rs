//! Assignment kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of work an assignment asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "assignment_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    /// Multiple-choice practice questions.
    #[default]
    Mcq,
    /// A coding challenge.
    Coding,
}

impl AssignmentKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::Coding => "coding",
        }
    }
}

impl fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssignmentKind {
    type Err = skillboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcq" => Ok(Self::Mcq),
            "coding" => Ok(Self::Coding),
            _ => Err(skillboard_core::AppError::validation(format!(
                "Invalid assignment type: '{s}'. Expected one of: mcq, coding"
            ))),
        }
    }
}
