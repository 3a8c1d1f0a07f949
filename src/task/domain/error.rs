//! Error types for task domain validation.

use crate::error::ValidationErrors;
use thiserror::Error;

/// Errors returned while constructing or renaming tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("task title must not exceed {max} characters")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl From<TaskDomainError> for ValidationErrors {
    fn from(err: TaskDomainError) -> Self {
        Self::single("title", err.to_string())
    }
}
