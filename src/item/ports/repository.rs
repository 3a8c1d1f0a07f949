//! Repository port for board items and their votes.

use crate::board::domain::BoardId;
use crate::db::PersistenceFailure;
use crate::identity::domain::UserId;
use crate::item::domain::{BoardItem, ItemId, VoteOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board item repository operations.
pub type BoardItemRepositoryResult<T> = Result<T, BoardItemRepositoryError>;

/// Board item persistence contract.
#[async_trait]
pub trait BoardItemRepository: Send + Sync {
    /// Stores a new item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardItemRepositoryError::DuplicateItem`] when the identifier
    /// already exists.
    async fn store(&self, item: &BoardItem) -> BoardItemRepositoryResult<()>;

    /// Persists status, soft deletion, and timestamp changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardItemRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn update(&self, item: &BoardItem) -> BoardItemRepositoryResult<()>;

    /// Finds an item that has not been soft-deleted.
    async fn find_by_id(&self, id: ItemId) -> BoardItemRepositoryResult<Option<BoardItem>>;

    /// Lists the live items of a board, most recent first.
    async fn list_for_board(&self, board: BoardId) -> BoardItemRepositoryResult<Vec<BoardItem>>;

    /// Casts `user`'s vote on `item` if absent, retracts it otherwise.
    ///
    /// The vote row and the item's vote count change together.
    ///
    /// # Errors
    ///
    /// Returns [`BoardItemRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn toggle_vote(
        &self,
        item: ItemId,
        user: UserId,
        voted_at: DateTime<Utc>,
    ) -> BoardItemRepositoryResult<VoteOutcome>;

    /// Returns the subset of `items` that `user` has voted on.
    async fn voted_by(
        &self,
        user: UserId,
        items: &[ItemId],
    ) -> BoardItemRepositoryResult<Vec<ItemId>>;
}

/// Errors returned by board item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardItemRepositoryError {
    /// An item with the same identifier already exists.
    #[error("duplicate item identifier: {0}")]
    DuplicateItem(ItemId),

    /// The item was not found.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceFailure for BoardItemRepositoryError {
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
