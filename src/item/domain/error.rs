//! Error types for item domain validation and parsing.

use crate::error::ValidationErrors;
use thiserror::Error;

/// Errors returned while constructing item domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemDomainError {
    /// The item title is blank after trimming.
    #[error("item title must not be empty")]
    TitleRequired,

    /// The item title exceeds the maximum length.
    #[error("item title must not exceed {max} characters")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The item description exceeds the maximum length.
    #[error("item description must not exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The status label is blank after trimming.
    #[error("status must not be empty")]
    StatusRequired,

    /// The status label exceeds the maximum length.
    #[error("status must not exceed {max} characters")]
    StatusTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The status is not one of the board columns.
    #[error("status '{0}' is not a board column")]
    UnknownStatus(String),

    /// The comment content is blank after trimming.
    #[error("comment must not be empty")]
    CommentRequired,

    /// The comment content exceeds the maximum length.
    #[error("comment must not exceed {max} characters")]
    CommentTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl ItemDomainError {
    /// Returns the request field the error applies to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TitleRequired | Self::TitleTooLong { .. } => "title",
            Self::DescriptionTooLong { .. } => "description",
            Self::StatusRequired | Self::StatusTooLong { .. } | Self::UnknownStatus(_) => "status",
            Self::CommentRequired | Self::CommentTooLong { .. } => "content",
        }
    }
}

impl From<ItemDomainError> for ValidationErrors {
    fn from(err: ItemDomainError) -> Self {
        Self::single(err.field(), err.to_string())
    }
}

/// Error returned while parsing item priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority '{0}', expected low, medium, high, or urgent")]
pub struct ParsePriorityError(pub String);

impl From<ParsePriorityError> for ValidationErrors {
    fn from(err: ParsePriorityError) -> Self {
        Self::single("priority", err.to_string())
    }
}
