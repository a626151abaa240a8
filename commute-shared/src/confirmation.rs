//! Single-slot confirmation gate for destructive admin actions.
//!
//! Deleting or banning a user goes through a modal confirmation. The gate
//! holds at most one pending target, so "delete pending" and "ban pending"
//! can never be true at the same time.

use uuid::Uuid;

/// User targeted by a pending ban or unban.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanTarget {
    pub id: Uuid,
    pub email: String,
    /// Ban state at the time the confirmation was opened.
    pub is_banned: bool,
}

impl BanTarget {
    /// Name of the action the confirmation will perform, `"ban"` or `"unban"`.
    #[must_use]
    pub fn action(&self) -> &'static str {
        if self.is_banned { "unban" } else { "ban" }
    }
}

/// User targeted by a pending deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: Uuid,
    pub email: String,
}

/// Mutation released by a confirmed gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmedAction {
    Delete { id: Uuid },
    SetBanned { id: Uuid, banned: bool },
}

impl ConfirmedAction {
    #[must_use]
    pub const fn target(&self) -> Uuid {
        match self {
            Self::Delete { id } | Self::SetBanned { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    ConfirmingDelete(DeleteTarget),
    ConfirmingBan(BanTarget),
}

impl ConfirmationGate {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Opens the delete confirmation. Refused while another one is open.
    pub fn request_delete(&mut self, id: Uuid, email: impl Into<String>) -> bool {
        if !self.is_idle() {
            tracing::debug!("delete confirmation for {id} refused, gate busy");
            return false;
        }
        *self = Self::ConfirmingDelete(DeleteTarget {
            id,
            email: email.into(),
        });
        true
    }

    /// Opens the ban/unban confirmation. Refused while another one is open.
    pub fn request_ban(&mut self, target: BanTarget) -> bool {
        if !self.is_idle() {
            tracing::debug!("ban confirmation for {} refused, gate busy", target.id);
            return false;
        }
        *self = Self::ConfirmingBan(target);
        true
    }

    /// The mutation the open confirmation would release, without closing it.
    #[must_use]
    pub fn pending_action(&self) -> Option<ConfirmedAction> {
        match self {
            Self::Idle => None,
            Self::ConfirmingDelete(target) => Some(ConfirmedAction::Delete { id: target.id }),
            Self::ConfirmingBan(target) => Some(ConfirmedAction::SetBanned {
                id: target.id,
                banned: !target.is_banned,
            }),
        }
    }

    /// Accepts the open confirmation and returns to idle.
    ///
    /// Yields the mutation to run exactly once; an idle gate yields nothing.
    pub fn confirm(&mut self) -> Option<ConfirmedAction> {
        let action = self.pending_action();
        *self = Self::Idle;
        action
    }

    /// Dismisses the open confirmation without side effects.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn user_to_delete(&self) -> Option<&DeleteTarget> {
        match self {
            Self::ConfirmingDelete(target) => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_to_ban(&self) -> Option<&BanTarget> {
        match self {
            Self::ConfirmingBan(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log;

    #[test]
    fn refused_requests_reach_the_log() {
        test_log::install();
        let mut gate = ConfirmationGate::default();
        assert!(gate.request_delete(Uuid::from_u128(0x51), "first@example.com"));
        assert!(!gate.request_delete(Uuid::from_u128(0x52), "second@example.com"));
        assert!(test_log::seen(&format!(
            "delete confirmation for {} refused",
            Uuid::from_u128(0x52)
        )));

        let target = BanTarget {
            id: Uuid::from_u128(0x53),
            email: "third@example.com".to_string(),
            is_banned: false,
        };
        assert!(!gate.request_ban(target));
        assert!(test_log::seen(&format!(
            "ban confirmation for {} refused",
            Uuid::from_u128(0x53)
        )));
    }

    fn ban_target(is_banned: bool) -> BanTarget {
        BanTarget {
            id: Uuid::from_u128(7),
            email: "rider@example.com".to_string(),
            is_banned,
        }
    }

    #[test]
    fn new_gate_is_idle() {
        let gate = ConfirmationGate::default();
        assert!(gate.is_idle());
        assert!(gate.user_to_delete().is_none());
        assert!(gate.user_to_ban().is_none());
    }

    #[test]
    fn confirming_delete_releases_the_target_once() {
        let id = Uuid::from_u128(1);
        let mut gate = ConfirmationGate::default();
        assert!(gate.request_delete(id, "rider@example.com"));
        assert_eq!(gate.user_to_delete().map(|t| t.id), Some(id));

        assert_eq!(gate.confirm(), Some(ConfirmedAction::Delete { id }));
        assert!(gate.is_idle());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn ban_confirmation_flips_the_recorded_state() {
        let mut gate = ConfirmationGate::default();
        gate.request_ban(ban_target(false));
        assert_eq!(
            gate.confirm(),
            Some(ConfirmedAction::SetBanned {
                id: Uuid::from_u128(7),
                banned: true
            })
        );

        gate.request_ban(ban_target(true));
        assert_eq!(
            gate.confirm(),
            Some(ConfirmedAction::SetBanned {
                id: Uuid::from_u128(7),
                banned: false
            })
        );
    }

    #[test]
    fn only_one_confirmation_at_a_time() {
        let mut gate = ConfirmationGate::default();
        assert!(gate.request_delete(Uuid::from_u128(1), "a@example.com"));
        assert!(!gate.request_ban(ban_target(false)));
        assert!(!gate.request_delete(Uuid::from_u128(2), "b@example.com"));

        assert!(gate.user_to_ban().is_none());
        assert_eq!(gate.user_to_delete().map(|t| t.id), Some(Uuid::from_u128(1)));
    }

    #[test]
    fn cancel_returns_to_idle_without_action() {
        let mut gate = ConfirmationGate::default();
        gate.request_ban(ban_target(false));
        gate.cancel();
        assert!(gate.is_idle());
        assert_eq!(gate.confirm(), None);
        assert!(gate.request_delete(Uuid::from_u128(3), "c@example.com"));
    }

    #[test]
    fn labels_follow_ban_state() {
        assert_eq!(ban_target(false).action(), "ban");
        assert_eq!(ban_target(true).action(), "unban");
    }
}
