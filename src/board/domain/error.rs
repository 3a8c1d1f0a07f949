//! Error types for board domain validation and parsing.

use crate::error::ValidationErrors;
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board name is shorter than the minimum after trimming.
    #[error("board name must be at least {min} characters")]
    NameTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The board name exceeds the maximum length.
    #[error("board name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// No URL-safe slug can be derived from the name.
    #[error("board name '{0}' must contain at least one letter or digit")]
    NameWithoutSlug(String),

    /// The description exceeds the maximum length.
    #[error("board description must not exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// The board type identifier is not positive.
    #[error("invalid board type {0}, expected a positive identifier")]
    InvalidBoardType(i64),

    /// The requested status cannot be assigned at creation.
    #[error("board status '{0}' is not allowed, expected active or draft")]
    StatusNotAllowed(String),
}

impl BoardDomainError {
    /// Returns the request field the error applies to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } | Self::NameTooLong { .. } | Self::NameWithoutSlug(_) => {
                "name"
            }
            Self::DescriptionTooLong { .. } => "description",
            Self::InvalidBoardType(_) => "type_id",
            Self::StatusNotAllowed(_) => "status",
        }
    }
}

impl From<BoardDomainError> for ValidationErrors {
    fn from(err: BoardDomainError) -> Self {
        Self::single(err.field(), err.to_string())
    }
}

/// Error returned while parsing board statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board status: {0}")]
pub struct ParseBoardStatusError(pub String);

/// Error returned while parsing member roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown member role: {0}")]
pub struct ParseMemberRoleError(pub String);
