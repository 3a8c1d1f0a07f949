//! Loading an item together with its board and the actor's standing.

use crate::board::{ports::BoardRepository, ports::BoardRepositoryError, services::BoardContext};
use crate::identity::domain::UserId;
use crate::item::{
    domain::{BoardItem, ItemId},
    ports::{BoardItemRepository, BoardItemRepositoryError},
};

/// A live item, its live board, and the acting user's membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContext {
    item: BoardItem,
    board: BoardContext,
}

impl ItemContext {
    /// Loads `item_id` and its board for `actor`.
    ///
    /// Returns `Ok(None)` when the item or its board is missing or
    /// soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns the repository error of the failing lookup.
    pub async fn load<E>(
        boards: &dyn BoardRepository,
        items: &dyn BoardItemRepository,
        item_id: ItemId,
        actor: UserId,
    ) -> Result<Option<Self>, E>
    where
        E: From<BoardRepositoryError> + From<BoardItemRepositoryError>,
    {
        let Some(item) = items.find_by_id(item_id).await? else {
            return Ok(None);
        };
        let Some(board) = BoardContext::load(boards, item.board_id(), actor).await? else {
            return Ok(None);
        };
        Ok(Some(Self { item, board }))
    }

    /// Returns the item.
    #[must_use]
    pub const fn item(&self) -> &BoardItem {
        &self.item
    }

    /// Returns the board context.
    #[must_use]
    pub const fn board(&self) -> &BoardContext {
        &self.board
    }

    /// Consumes the context, returning the item.
    #[must_use]
    pub fn into_item(self) -> BoardItem {
        self.item
    }
}
