//! Moderation decisions - approve or reject pending entities.
//!
//! Decisions are copy-on-write: the caller's collection is borrowed and a new
//! collection is returned. On any error the caller simply keeps its original.

use crate::{
    entities::{Decision, Moderatable},
    errors::{Error, Result},
};
use tracing::{info, warn};

/// Applies `decision` to the entity with `id`.
///
/// Returns a new collection that differs from `entities` only in the target's
/// status. Only the first entity with `id` is checked and rewritten.
///
/// # Errors
/// - [`Error::EntityNotFound`] if no entity has `id`
/// - [`Error::NotActionable`] if the entity is already approved or rejected
pub fn apply_decision<T: Moderatable>(
    entities: &[T],
    id: i64,
    decision: Decision,
) -> Result<Vec<T>> {
    let index = entities
        .iter()
        .position(|entity| entity.id() == id)
        .ok_or_else(|| {
            warn!("{} {} not found for {}", T::KIND, id, decision);
            Error::EntityNotFound { kind: T::KIND, id }
        })?;

    let current = entities[index].status();
    let next = current.transition(decision).ok_or_else(|| {
        warn!(
            "Refusing to {} {} {}: already {}",
            decision,
            T::KIND,
            id,
            current
        );
        Error::NotActionable {
            kind: T::KIND,
            id,
            status: current,
        }
    })?;

    info!("{} {} moved from {} to {}", T::KIND, id, current, next);

    let mut updated = entities.to_vec();
    updated[index] = entities[index].with_status(next);
    Ok(updated)
}

/// Confirmation text shown after a successful decision, e.g.
/// `"User approved successfully!"`.
#[must_use]
pub fn confirmation_message(kind: &str, decision: Decision) -> String {
    format!("{kind} {} successfully!", decision.target_status())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::seed,
        entities::{ModerationStatus, UserAccount},
        test_utils::{fixed_now, init_test_tracing, make_user},
    };

    #[test]
    fn test_approve_pending_user() {
        init_test_tracing();
        let users = seed::reference_users(fixed_now());
        let updated = apply_decision(&users, 1, Decision::Approve).unwrap();

        assert_eq!(updated.len(), users.len());
        assert_eq!(updated[0].status, ModerationStatus::Approved);
        for (before, after) in users.iter().zip(&updated).skip(1) {
            assert_eq!(before, after);
        }
        // Source snapshot untouched
        assert_eq!(users[0].status, ModerationStatus::Pending);
    }

    #[test]
    fn test_reject_pending_item() {
        let items = seed::reference_items(fixed_now());
        let updated = apply_decision(&items, 4, Decision::Reject).unwrap();
        let target = updated.iter().find(|i| i.id == 4).unwrap();
        assert_eq!(target.status, ModerationStatus::Rejected);
        assert_eq!(target.title, "Item 4");
    }

    #[test]
    fn test_terminal_entities_are_not_actionable() {
        init_test_tracing();
        let users: Vec<UserAccount> = vec![
            make_user(1, ModerationStatus::Approved),
            make_user(2, ModerationStatus::Rejected),
        ];

        for user in &users {
            for decision in [Decision::Approve, Decision::Reject] {
                let err = apply_decision(&users, user.id, decision).unwrap_err();
                match err {
                    Error::NotActionable { kind, id, status } => {
                        assert_eq!(kind, "User");
                        assert_eq!(id, user.id);
                        assert_eq!(status, user.status);
                    }
                    other => panic!("unexpected error: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_decision_cannot_be_applied_twice() {
        let users = vec![make_user(9, ModerationStatus::Pending)];
        let once = apply_decision(&users, 9, Decision::Reject).unwrap();
        let twice = apply_decision(&once, 9, Decision::Approve);
        assert!(matches!(
            twice,
            Err(Error::NotActionable {
                status: ModerationStatus::Rejected,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_id_rewrites_only_checked_entity() {
        let users = vec![
            make_user(1, ModerationStatus::Pending),
            make_user(1, ModerationStatus::Approved),
        ];
        let updated = apply_decision(&users, 1, Decision::Reject).unwrap();
        let statuses: Vec<ModerationStatus> = updated.iter().map(|u| u.status).collect();
        assert_eq!(
            statuses,
            vec![ModerationStatus::Rejected, ModerationStatus::Approved]
        );

        let terminal_first = vec![
            make_user(1, ModerationStatus::Approved),
            make_user(1, ModerationStatus::Pending),
        ];
        assert!(matches!(
            apply_decision(&terminal_first, 1, Decision::Reject),
            Err(Error::NotActionable { .. })
        ));
    }

    #[test]
    fn test_unknown_id() {
        let users = vec![make_user(1, ModerationStatus::Pending)];
        let result = apply_decision(&users, 42, Decision::Approve);
        assert!(matches!(
            result,
            Err(Error::EntityNotFound { kind: "User", id: 42 })
        ));
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(
            confirmation_message("User", Decision::Approve),
            "User approved successfully!"
        );
        assert_eq!(
            confirmation_message("Item", Decision::Reject),
            "Item rejected successfully!"
        );
    }
}
