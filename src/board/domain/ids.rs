//! Identifier types for the board domain.

use super::BoardDomainError;
use crate::ids::uuid_id;
use serde::{Deserialize, Serialize};
use std::fmt;

uuid_id! {
    /// Unique identifier of a board.
    BoardId
}

/// Identifier of the team a board may be scoped to.
pub use crate::identity::domain::TeamId;

/// Positive identifier of a board type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoardTypeId(i64);

impl BoardTypeId {
    /// Creates a validated board type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidBoardType`] when the value is not
    /// positive.
    pub const fn new(value: i64) -> Result<Self, BoardDomainError> {
        if value <= 0 {
            return Err(BoardDomainError::InvalidBoardType(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for BoardTypeId {
    type Error = BoardDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoardTypeId> for i64 {
    fn from(value: BoardTypeId) -> Self {
        value.0
    }
}

impl fmt::Display for BoardTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
