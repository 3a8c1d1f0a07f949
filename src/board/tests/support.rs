//! Shared in-memory wiring for board service tests.

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::Board,
    services::{BoardLifecycleService, BoardMembershipService, CreateBoardRequest},
};
use crate::identity::{
    adapters::memory::InMemoryUserDirectory,
    domain::{UserId, UserSummary},
};
use mockable::DefaultClock;
use std::sync::Arc;

pub(super) struct Harness {
    pub(super) boards: Arc<InMemoryBoardRepository>,
    pub(super) users: InMemoryUserDirectory,
    pub(super) lifecycle: BoardLifecycleService<DefaultClock>,
    pub(super) membership: BoardMembershipService<DefaultClock>,
    pub(super) owner: UserId,
}

impl Harness {
    pub(super) fn new(page_size: usize) -> Self {
        let boards = Arc::new(InMemoryBoardRepository::new());
        let users = InMemoryUserDirectory::new();
        let clock = Arc::new(DefaultClock);
        let owner = Self::register_in(&users, "Olivia Owner");

        Self {
            lifecycle: BoardLifecycleService::new(boards.clone(), Arc::clone(&clock), page_size),
            membership: BoardMembershipService::new(
                boards.clone(),
                Arc::new(users.clone()),
                clock,
            ),
            boards,
            users,
            owner,
        }
    }

    pub(super) fn register(&self, name: &str) -> UserId {
        Self::register_in(&self.users, name)
    }

    fn register_in(users: &InMemoryUserDirectory, name: &str) -> UserId {
        let id = UserId::new();
        let email = format!("{}@example.test", name.to_ascii_lowercase().replace(' ', "."));
        users
            .insert(UserSummary::new(id, name, email))
            .expect("user insert should succeed");
        id
    }

    pub(super) async fn board(&self, name: &str, is_private: bool) -> Board {
        self.lifecycle
            .create_board(self.owner, CreateBoardRequest::new(name, 1).private(is_private))
            .await
            .expect("board creation should succeed")
    }
}
