//! Loading a board together with the acting user's standing on it.

use crate::board::{
    domain::{Board, BoardAccess, BoardId, MemberRole},
    ports::{BoardRepository, BoardRepositoryResult},
};
use crate::identity::domain::UserId;

/// A live board and the acting user's membership role, read fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardContext {
    board: Board,
    actor: UserId,
    membership: Option<MemberRole>,
}

impl BoardContext {
    /// Loads `board_id` for `actor`.
    ///
    /// Returns `Ok(None)` when the board does not exist or was soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns the repository error when either lookup fails.
    pub async fn load(
        boards: &dyn BoardRepository,
        board_id: BoardId,
        actor: UserId,
    ) -> BoardRepositoryResult<Option<Self>> {
        let Some(board) = boards.find_by_id(board_id).await? else {
            return Ok(None);
        };
        let membership = boards.membership(board_id, actor).await?;
        Ok(Some(Self {
            board,
            actor,
            membership,
        }))
    }

    /// Returns the guards evaluated for the acting user.
    #[must_use]
    pub const fn access(&self) -> BoardAccess<'_> {
        BoardAccess::new(&self.board, self.actor, self.membership)
    }

    /// Returns the loaded board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the acting user.
    #[must_use]
    pub const fn actor(&self) -> UserId {
        self.actor
    }

    /// Consumes the context, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
