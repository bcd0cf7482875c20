//! Notification visibility rules — which kinds each role sees in its feed.

use skillboard_entity::notification::NotificationKind;
use skillboard_entity::user::UserRole;

/// The notification kinds visible to a role's feed.
///
/// Teachers see what students do to their assignments plus roster changes;
/// students see what teachers send them. Anything outside the allow-list is
/// filtered out even when addressed to the account.
pub fn visible_kinds(role: UserRole) -> &'static [NotificationKind] {
    match role {
        UserRole::Teacher => &[
            NotificationKind::Completion,
            NotificationKind::Confirmation,
            NotificationKind::Registration,
        ],
        UserRole::Student => &[
            NotificationKind::Assignment,
            NotificationKind::Reminder,
            NotificationKind::Appreciation,
            NotificationKind::Encouragement,
            NotificationKind::Achievement,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_lists_are_disjoint() {
        let teacher = visible_kinds(UserRole::Teacher);
        let student = visible_kinds(UserRole::Student);
        for kind in teacher {
            assert!(!student.contains(kind), "{kind} visible to both roles");
        }
    }

    #[test]
    fn test_every_kind_is_routed_somewhere() {
        let all = [
            NotificationKind::Assignment,
            NotificationKind::Confirmation,
            NotificationKind::Completion,
            NotificationKind::Achievement,
            NotificationKind::Registration,
            NotificationKind::Reminder,
            NotificationKind::Appreciation,
            NotificationKind::Encouragement,
        ];
        let teacher = visible_kinds(UserRole::Teacher);
        let student = visible_kinds(UserRole::Student);
        for kind in all {
            assert!(
                teacher.contains(&kind) || student.contains(&kind),
                "{kind} routed to no role"
            );
        }
    }

    #[test]
    fn test_role_specific_examples() {
        assert!(visible_kinds(UserRole::Teacher).contains(&NotificationKind::Confirmation));
        assert!(visible_kinds(UserRole::Student).contains(&NotificationKind::Assignment));
        assert!(!visible_kinds(UserRole::Student).contains(&NotificationKind::Confirmation));
    }
}
