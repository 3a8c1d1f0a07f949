//! In-memory repository for boards and memberships.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Board, BoardId, BoardMember, MemberRole},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::db::PersistenceFailure;
use crate::identity::domain::UserId;

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    boards: HashMap<BoardId, Board>,
    slug_index: HashMap<String, BoardId>,
    members: HashMap<BoardId, Vec<BoardMember>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BoardRepositoryResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardRepositoryResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryBoardState {
    fn role_of(&self, board: BoardId, user: UserId) -> Option<MemberRole> {
        self.members
            .get(&board)
            .and_then(|members| members.iter().find(|member| member.user_id() == user))
            .map(BoardMember::role)
    }

    fn is_visible_to(&self, board: &Board, viewer: UserId) -> bool {
        !board.is_private()
            || board.is_creator(viewer)
            || self.role_of(board.id(), viewer).is_some()
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn create_with_owner(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.write()?;
        if state.boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        if state.slug_index.contains_key(board.slug().as_str()) {
            return Err(BoardRepositoryError::DuplicateSlug(board.slug().clone()));
        }

        state
            .slug_index
            .insert(board.slug().as_str().to_owned(), board.id());
        state.members.insert(
            board.id(),
            vec![BoardMember::new(
                board.id(),
                board.creator_id(),
                MemberRole::Owner,
                board.created_at(),
            )],
        );
        state.boards.insert(board.id(), board.clone());
        Ok(())
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .boards
            .get_mut(&board.id())
            .ok_or(BoardRepositoryError::NotFound(board.id()))?;
        *stored = board.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let state = self.read()?;
        Ok(state
            .boards
            .get(&id)
            .filter(|board| !board.is_deleted())
            .cloned())
    }

    async fn list_visible(
        &self,
        viewer: UserId,
        offset: usize,
        limit: usize,
    ) -> BoardRepositoryResult<Vec<Board>> {
        let state = self.read()?;
        let mut visible: Vec<&Board> = state
            .boards
            .values()
            .filter(|board| !board.is_deleted() && state.is_visible_to(board, viewer))
            .collect();
        visible.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(visible
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn membership(
        &self,
        board: BoardId,
        user: UserId,
    ) -> BoardRepositoryResult<Option<MemberRole>> {
        Ok(self.read()?.role_of(board, user))
    }

    async fn members(&self, board: BoardId) -> BoardRepositoryResult<Vec<BoardMember>> {
        Ok(self.read()?.members.get(&board).cloned().unwrap_or_default())
    }

    async fn add_members(
        &self,
        board: BoardId,
        users: &[UserId],
        role: MemberRole,
        joined_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize> {
        let mut state = self.write()?;
        if !state.boards.contains_key(&board) {
            return Err(BoardRepositoryError::NotFound(board));
        }
        let members = state.members.entry(board).or_default();
        let mut inserted = 0;
        for user in users {
            if members.iter().any(|member| member.user_id() == *user) {
                continue;
            }
            members.push(BoardMember::new(board, *user, role, joined_at));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn remove_member(&self, board: BoardId, user: UserId) -> BoardRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(members) = state.members.get_mut(&board) else {
            return Ok(false);
        };
        let before = members.len();
        members.retain(|member| member.user_id() != user);
        Ok(members.len() != before)
    }
}
