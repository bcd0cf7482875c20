//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed vocabulary of notification kinds.
///
/// Which kinds are visible to an account depends on its role; see the
/// routing rules in the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A new assignment was handed to a student.
    Assignment,
    /// Confirmation to a teacher that an assignment was sent.
    Confirmation,
    /// A student completed an assignment.
    Completion,
    /// A student earned a perfect-score achievement.
    Achievement,
    /// A new student registered on the platform.
    Registration,
    /// A reminder for a student.
    Reminder,
    /// An appreciation note for a student.
    Appreciation,
    /// An encouragement note for a student.
    Encouragement,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Confirmation => "confirmation",
            Self::Completion => "completion",
            Self::Achievement => "achievement",
            Self::Registration => "registration",
            Self::Reminder => "reminder",
            Self::Appreciation => "appreciation",
            Self::Encouragement => "encouragement",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = skillboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assignment" => Ok(Self::Assignment),
            "confirmation" => Ok(Self::Confirmation),
            "completion" => Ok(Self::Completion),
            "achievement" => Ok(Self::Achievement),
            "registration" => Ok(Self::Registration),
            "reminder" => Ok(Self::Reminder),
            "appreciation" => Ok(Self::Appreciation),
            "encouragement" => Ok(Self::Encouragement),
            _ => Err(skillboard_core::AppError::validation(format!(
                "Invalid notification type: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for kind in [
            NotificationKind::Assignment,
            NotificationKind::Confirmation,
            NotificationKind::Completion,
            NotificationKind::Achievement,
            NotificationKind::Registration,
            NotificationKind::Reminder,
            NotificationKind::Appreciation,
            NotificationKind::Encouragement,
        ] {
            assert_eq!(kind.as_str().parse::<NotificationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!("broadcast".parse::<NotificationKind>().is_err());
    }
}
