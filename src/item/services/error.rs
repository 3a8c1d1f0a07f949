//! Service-level errors for item operations.

use crate::board::{domain::BoardId, ports::BoardRepositoryError};
use crate::error::{AccessDenied, ValidationErrors};
use crate::item::{
    domain::{CommentId, ItemId},
    ports::{BoardItemRepositoryError, CommentRepositoryError},
};
use thiserror::Error;

/// Errors returned by item services.
#[derive(Debug, Error)]
pub enum ItemServiceError {
    /// Request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The actor lacks the required role or ownership.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// The board does not exist or was deleted.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    /// The item does not exist or was deleted.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    /// The comment does not exist or was deleted.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),
    /// Board repository operation failed.
    #[error(transparent)]
    Boards(#[from] BoardRepositoryError),
    /// Item repository operation failed.
    #[error(transparent)]
    Items(#[from] BoardItemRepositoryError),
    /// Comment repository operation failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
}

/// Result type for item service operations.
pub type ItemServiceResult<T> = Result<T, ItemServiceError>;
