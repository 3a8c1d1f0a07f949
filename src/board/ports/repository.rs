//! Repository port for boards and their member pivot.

use crate::board::domain::{Board, BoardId, BoardMember, BoardSlug, MemberRole};
use crate::db::PersistenceFailure;
use crate::identity::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new board and records its creator as `owner` member.
    ///
    /// Both writes succeed or neither is visible.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the identifier
    /// exists or [`BoardRepositoryError::DuplicateSlug`] when the slug is taken.
    async fn create_with_owner(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Persists changes to an existing board (status, soft deletion,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not exist.
    async fn update(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Finds a board that has not been soft-deleted.
    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>>;

    /// Lists boards visible to `viewer`, newest first.
    ///
    /// A board is visible when it is public, created by the viewer, or the
    /// viewer is a member.
    async fn list_visible(
        &self,
        viewer: UserId,
        offset: usize,
        limit: usize,
    ) -> BoardRepositoryResult<Vec<Board>>;

    /// Returns the stored role of `user` on `board`, if any.
    async fn membership(
        &self,
        board: BoardId,
        user: UserId,
    ) -> BoardRepositoryResult<Option<MemberRole>>;

    /// Returns every stored membership of the board, oldest first.
    async fn members(&self, board: BoardId) -> BoardRepositoryResult<Vec<BoardMember>>;

    /// Inserts memberships for users that are not already members.
    ///
    /// Returns the number of rows inserted; existing pairs are left untouched.
    async fn add_members(
        &self,
        board: BoardId,
        users: &[UserId],
        role: MemberRole,
        joined_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize>;

    /// Removes the membership of `user`, returning `true` when a row existed.
    async fn remove_member(&self, board: BoardId, user: UserId) -> BoardRepositoryResult<bool>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board with the same identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// Another board already uses the slug.
    #[error("duplicate board slug: {0}")]
    DuplicateSlug(BoardSlug),

    /// The board was not found.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceFailure for BoardRepositoryError {
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
