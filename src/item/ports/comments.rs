//! Repository port for item comments.

use crate::db::PersistenceFailure;
use crate::item::domain::{Comment, CommentId, ItemId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::DuplicateComment`] when the
    /// identifier already exists.
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Persists soft deletion and timestamp changes.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::NotFound`] when the comment does not
    /// exist.
    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Finds a comment that has not been soft-deleted.
    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>>;

    /// Counts the live comments of each item. Items without comments are
    /// absent from the map.
    async fn count_for_items(
        &self,
        items: &[ItemId],
    ) -> CommentRepositoryResult<HashMap<ItemId, usize>>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// The comment was not found.
    #[error("comment not found: {0}")]
    NotFound(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceFailure for CommentRepositoryError {
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
