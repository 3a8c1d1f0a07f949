//! Service layer for votes and comments on items.

use super::{ItemContext, ItemServiceError, ItemServiceResult};
use crate::board::ports::BoardRepository;
use crate::error::{AccessDenied, ValidationErrors};
use crate::identity::domain::UserId;
use crate::item::{
    domain::{Comment, CommentId, ItemId, VoteOutcome},
    ports::{BoardItemRepository, CommentRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Vote and comment orchestration service.
pub struct ItemEngagementService<C>
where
    C: Clock + Send + Sync,
{
    boards: Arc<dyn BoardRepository>,
    items: Arc<dyn BoardItemRepository>,
    comments: Arc<dyn CommentRepository>,
    clock: Arc<C>,
}

impl<C> Clone for ItemEngagementService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            items: Arc::clone(&self.items),
            comments: Arc::clone(&self.comments),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> ItemEngagementService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new engagement service.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        items: Arc<dyn BoardItemRepository>,
        comments: Arc<dyn CommentRepository>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            boards,
            items,
            comments,
            clock,
        }
    }

    /// Casts the actor's vote, or retracts it when already cast.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::ItemNotFound`] for missing items and
    /// [`ItemServiceError::Forbidden`] when the board is invisible to the
    /// actor or voting is disabled.
    pub async fn toggle_vote(&self, actor: UserId, item_id: ItemId) -> ItemServiceResult<VoteOutcome> {
        let context = self.item_context(actor, item_id).await?;
        let access = context.board().access();
        access.require_view()?;
        if !context.board().board().settings().enable_voting {
            warn!(%item_id, "vote rejected, voting disabled");
            return Err(AccessDenied::new("Voting is disabled on this board.").into());
        }

        let outcome = self
            .items
            .toggle_vote(item_id, actor, self.clock.utc())
            .await?;
        info!(%item_id, voted = outcome.voted, votes = outcome.vote_count, "vote toggled");
        Ok(outcome)
    }

    /// Adds a comment to an item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::ItemNotFound`] for missing items,
    /// [`ItemServiceError::Forbidden`] when the board is invisible or comments
    /// are disabled, and [`ItemServiceError::Validation`] for blank or
    /// oversized content.
    pub async fn add_comment(
        &self,
        actor: UserId,
        item_id: ItemId,
        content: &str,
    ) -> ItemServiceResult<Comment> {
        let context = self.item_context(actor, item_id).await?;
        context.board().access().require_view()?;
        if !context.board().board().settings().allow_comments {
            warn!(%item_id, "comment rejected, comments disabled");
            return Err(AccessDenied::new("Comments are disabled on this board.").into());
        }

        let comment = Comment::create(item_id, actor, content, &*self.clock)
            .map_err(ValidationErrors::from)?;
        self.comments.store(&comment).await?;
        info!(comment_id = %comment.id(), %item_id, "comment added");
        Ok(comment)
    }

    /// Soft-deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::CommentNotFound`] for missing comments and
    /// [`ItemServiceError::Forbidden`] unless the actor wrote the comment or
    /// created the board.
    pub async fn delete_comment(
        &self,
        actor: UserId,
        comment_id: CommentId,
    ) -> ItemServiceResult<()> {
        let mut comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(ItemServiceError::CommentNotFound(comment_id))?;
        let context = ItemContext::load::<ItemServiceError>(
            self.boards.as_ref(),
            self.items.as_ref(),
            comment.item_id(),
            actor,
        )
        .await?
        .ok_or(ItemServiceError::CommentNotFound(comment_id))?;

        if comment.author_id() != actor && !context.board().access().is_creator() {
            warn!(%comment_id, %actor, "comment deletion rejected");
            return Err(AccessDenied::new(
                "Only the comment author or the board creator can delete this comment.",
            )
            .into());
        }

        comment.mark_deleted(&*self.clock);
        self.comments.update(&comment).await?;
        info!(%comment_id, "comment deleted");
        Ok(())
    }

    async fn item_context(&self, actor: UserId, item_id: ItemId) -> ItemServiceResult<ItemContext> {
        ItemContext::load::<ItemServiceError>(
            self.boards.as_ref(),
            self.items.as_ref(),
            item_id,
            actor,
        )
        .await?
        .ok_or(ItemServiceError::ItemNotFound(item_id))
    }
}
