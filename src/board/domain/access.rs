//! Authorization guards for board content.
//!
//! Every guard is evaluated from the explicit acting user, the board, and the
//! actor's membership role; nothing is read from ambient session state.

use super::{Board, MemberRole};
use crate::error::AccessDenied;
use crate::identity::domain::UserId;

/// An acting user's standing on a particular board.
#[derive(Debug, Clone, Copy)]
pub struct BoardAccess<'a> {
    board: &'a Board,
    actor: UserId,
    membership: Option<MemberRole>,
}

impl<'a> BoardAccess<'a> {
    /// Evaluates `actor` against `board` given their membership role, if any.
    #[must_use]
    pub const fn new(board: &'a Board, actor: UserId, membership: Option<MemberRole>) -> Self {
        Self {
            board,
            actor,
            membership,
        }
    }

    /// Returns the board being guarded.
    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns the acting user.
    #[must_use]
    pub const fn actor(&self) -> UserId {
        self.actor
    }

    /// Returns the actor's stored membership role, if any.
    #[must_use]
    pub const fn membership(&self) -> Option<MemberRole> {
        self.membership
    }

    /// Returns `true` when the actor created the board.
    #[must_use]
    pub fn is_creator(&self) -> bool {
        self.board.is_creator(self.actor)
    }

    /// Returns the role shown for the actor; the creator is always owner.
    #[must_use]
    pub fn effective_role(&self) -> Option<MemberRole> {
        if self.is_creator() {
            Some(MemberRole::Owner)
        } else {
            self.membership
        }
    }

    /// A board is visible when it is public, or the actor is its creator or
    /// one of its members.
    #[must_use]
    pub fn can_view(&self) -> bool {
        !self.board.is_private() || self.is_creator() || self.membership.is_some()
    }

    /// Creator, or a member whose role permits editing.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.effective_role().is_some_and(MemberRole::can_edit)
    }

    /// Only the creator may archive or delete a board.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.is_creator()
    }

    /// Only the creator may invite or remove members.
    #[must_use]
    pub fn can_manage_members(&self) -> bool {
        self.is_creator()
    }

    /// Board creator or the item's creator may manage the item's tasks.
    #[must_use]
    pub fn can_manage_tasks(&self, item_creator: UserId) -> bool {
        self.can_view() && (self.is_creator() || self.actor == item_creator)
    }

    /// Board creator or the item's creator may delete the item.
    #[must_use]
    pub fn can_delete_item(&self, item_creator: UserId) -> bool {
        self.can_manage_tasks(item_creator)
    }

    /// Rejects actors that cannot see the board.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the board is invisible to the actor.
    pub fn require_view(&self) -> Result<(), AccessDenied> {
        guard(
            self.can_view(),
            "You do not have permission to view this board.",
        )
    }

    /// Rejects actors that cannot edit board content.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the actor is neither the creator nor an
    /// editing member.
    pub fn require_edit(&self) -> Result<(), AccessDenied> {
        self.require_view()?;
        guard(
            self.can_edit(),
            "You do not have permission to change items on this board.",
        )
    }

    /// Rejects actors other than the creator.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the actor did not create the board.
    pub fn require_delete(&self) -> Result<(), AccessDenied> {
        guard(
            self.can_delete(),
            "Only the board creator can archive or delete this board.",
        )
    }

    /// Rejects actors other than the creator.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the actor did not create the board.
    pub fn require_member_management(&self) -> Result<(), AccessDenied> {
        guard(
            self.can_manage_members(),
            "Only the board creator can manage members.",
        )
    }

    /// Rejects actors that may not delete the item.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the actor is neither the board creator
    /// nor the item creator.
    pub fn require_item_deletion(&self, item_creator: UserId) -> Result<(), AccessDenied> {
        guard(
            self.can_delete_item(item_creator),
            "Only the board creator or the item creator can delete this item.",
        )
    }

    /// Rejects actors that may not manage the item's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the actor is neither the board creator
    /// nor the item creator.
    pub fn require_task_management(&self, item_creator: UserId) -> Result<(), AccessDenied> {
        guard(
            self.can_manage_tasks(item_creator),
            "Only the board creator or the item creator can manage its tasks.",
        )
    }
}

fn guard(allowed: bool, message: &str) -> Result<(), AccessDenied> {
    if allowed {
        Ok(())
    } else {
        Err(AccessDenied::new(message))
    }
}
