//! In-memory repository for board items and votes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::BoardId;
use crate::db::PersistenceFailure;
use crate::identity::domain::UserId;
use crate::item::{
    domain::{BoardItem, ItemId, VoteOutcome},
    ports::{BoardItemRepository, BoardItemRepositoryError, BoardItemRepositoryResult},
};

/// Thread-safe in-memory board item repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardItemRepository {
    state: Arc<RwLock<InMemoryItemState>>,
}

#[derive(Debug, Default)]
struct InMemoryItemState {
    items: HashMap<ItemId, BoardItem>,
    votes: HashMap<(ItemId, UserId), DateTime<Utc>>,
}

impl InMemoryBoardItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> BoardItemRepositoryError {
    BoardItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardItemRepository for InMemoryBoardItemRepository {
    async fn store(&self, item: &BoardItem) -> BoardItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.items.contains_key(&item.id()) {
            return Err(BoardItemRepositoryError::DuplicateItem(item.id()));
        }
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(&self, item: &BoardItem) -> BoardItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .items
            .get_mut(&item.id())
            .ok_or(BoardItemRepositoryError::NotFound(item.id()))?;
        let vote_count = stored.vote_count();
        *stored = item.clone();
        stored.set_vote_count(vote_count);
        Ok(())
    }

    async fn find_by_id(&self, id: ItemId) -> BoardItemRepositoryResult<Option<BoardItem>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .items
            .get(&id)
            .filter(|item| item.deleted_at().is_none())
            .cloned())
    }

    async fn list_for_board(&self, board: BoardId) -> BoardItemRepositoryResult<Vec<BoardItem>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut items: Vec<BoardItem> = state
            .items
            .values()
            .filter(|item| item.board_id() == board && item.deleted_at().is_none())
            .cloned()
            .collect();
        items.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.position().cmp(&left.position()))
        });
        Ok(items)
    }

    async fn toggle_vote(
        &self,
        item: ItemId,
        user: UserId,
        voted_at: DateTime<Utc>,
    ) -> BoardItemRepositoryResult<VoteOutcome> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.items.contains_key(&item) {
            return Err(BoardItemRepositoryError::NotFound(item));
        }

        let voted = if state.votes.remove(&(item, user)).is_some() {
            false
        } else {
            state.votes.insert((item, user), voted_at);
            true
        };
        let count = state
            .votes
            .keys()
            .filter(|(voted_item, _)| *voted_item == item)
            .count();
        let vote_count = u32::try_from(count).map_err(BoardItemRepositoryError::persistence)?;
        if let Some(stored) = state.items.get_mut(&item) {
            stored.set_vote_count(vote_count);
        }
        Ok(VoteOutcome { voted, vote_count })
    }

    async fn voted_by(
        &self,
        user: UserId,
        items: &[ItemId],
    ) -> BoardItemRepositoryResult<Vec<ItemId>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(items
            .iter()
            .copied()
            .filter(|item| state.votes.contains_key(&(*item, user)))
            .collect())
    }
}
