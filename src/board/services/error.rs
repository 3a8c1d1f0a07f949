//! Service-level errors for board lifecycle and membership operations.

use crate::board::{domain::BoardId, ports::BoardRepositoryError};
use crate::error::{AccessDenied, ValidationErrors};
use crate::identity::ports::UserDirectoryError;
use thiserror::Error;

/// Errors returned by board services.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The actor lacks the required role or ownership.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// The board does not exist or was deleted.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// Board repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
