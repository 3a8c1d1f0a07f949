//! Service layer for inviting and removing board members.

use super::{BoardContext, BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{BoardId, MemberRole},
    ports::BoardRepository,
};
use crate::error::ValidationErrors;
use crate::identity::{domain::UserId, ports::UserDirectory};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Board membership orchestration service.
pub struct BoardMembershipService<C>
where
    C: Clock + Send + Sync,
{
    boards: Arc<dyn BoardRepository>,
    users: Arc<dyn UserDirectory>,
    clock: Arc<C>,
}

impl<C> Clone for BoardMembershipService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> BoardMembershipService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new membership service.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        users: Arc<dyn UserDirectory>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            boards,
            users,
            clock,
        }
    }

    /// Adds `user_ids` to the board with role `member`.
    ///
    /// Repeated identifiers are collapsed and existing members are skipped,
    /// so repeating an invitation changes nothing. Returns the number of
    /// memberships created.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Forbidden`] unless `actor` created the
    /// board, [`BoardServiceError::Validation`] when the list is empty or names
    /// an unknown user (nothing is inserted), and
    /// [`BoardServiceError::NotFound`] for missing boards.
    pub async fn invite_members(
        &self,
        actor: UserId,
        board_id: BoardId,
        user_ids: &[UserId],
    ) -> BoardServiceResult<usize> {
        self.creator_context(actor, board_id).await?;

        let mut seen = HashSet::with_capacity(user_ids.len());
        let invitees: Vec<UserId> = user_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();
        if invitees.is_empty() {
            return Err(
                ValidationErrors::single("user_ids", "At least one user must be selected.").into(),
            );
        }

        let known: HashSet<UserId> = self
            .users
            .find_many(&invitees)
            .await?
            .into_iter()
            .map(|user| user.id())
            .collect();
        let mut errors = ValidationErrors::new();
        for id in invitees.iter().filter(|id| !known.contains(id)) {
            errors.add("user_ids", format!("The selected user {id} is invalid."));
        }
        errors.into_result()?;

        let inserted = self
            .boards
            .add_members(board_id, &invitees, MemberRole::Member, self.clock.utc())
            .await?;
        info!(%board_id, requested = invitees.len(), inserted, "members invited");
        Ok(inserted)
    }

    /// Removes `user_id` from the board. Removing a non-member is a no-op and
    /// returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Forbidden`] unless `actor` created the
    /// board, [`BoardServiceError::Validation`] when `user_id` is the creator,
    /// and [`BoardServiceError::NotFound`] for missing boards.
    pub async fn remove_member(
        &self,
        actor: UserId,
        board_id: BoardId,
        user_id: UserId,
    ) -> BoardServiceResult<bool> {
        let context = self.creator_context(actor, board_id).await?;
        if context.board().is_creator(user_id) {
            return Err(
                ValidationErrors::single("user_id", "The board creator cannot be removed.").into(),
            );
        }

        let removed = self.boards.remove_member(board_id, user_id).await?;
        if removed {
            info!(%board_id, member = %user_id, "member removed");
        } else {
            debug!(%board_id, member = %user_id, "member removal skipped, not a member");
        }
        Ok(removed)
    }

    async fn creator_context(
        &self,
        actor: UserId,
        board_id: BoardId,
    ) -> BoardServiceResult<BoardContext> {
        let context = BoardContext::load(self.boards.as_ref(), board_id, actor)
            .await?
            .ok_or(BoardServiceError::NotFound(board_id))?;
        if let Err(denied) = context.access().require_member_management() {
            warn!(%board_id, %actor, "membership change rejected");
            return Err(denied.into());
        }
        Ok(context)
    }
}
