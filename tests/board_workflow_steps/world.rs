//! Shared world state for board workflow BDD scenarios.

use std::collections::HashMap;

use rstest::fixture;
use taskboard::app::Repositories;
use taskboard::board::domain::Board;
use taskboard::http::AppState;
use taskboard::identity::{
    adapters::memory::InMemoryUserDirectory,
    domain::{UserId, UserSummary},
};
use taskboard::item::{
    domain::{ColumnSet, ItemId, KanbanView, MoveOutcome},
    ports::StatusSinkError,
};

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub users: InMemoryUserDirectory,
    pub repositories: Repositories,
    pub state: AppState,
    pub owner: Option<UserId>,
    pub stranger: Option<UserId>,
    pub board: Option<Board>,
    pub items: HashMap<String, ItemId>,
    pub view: Option<KanbanView>,
    pub last_move: Option<Result<MoveOutcome, StatusSinkError>>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let users = InMemoryUserDirectory::new();
        let repositories = Repositories::in_memory(users.clone());
        let state = AppState::new(&repositories, &ColumnSet::default(), 20);
        Self {
            users,
            repositories,
            state,
            owner: None,
            stranger: None,
            board: None,
            items: HashMap::new(),
            view: None,
            last_move: None,
        }
    }

    /// Registers a user in the directory.
    pub fn register(&self, name: &str) -> Result<UserId, eyre::Report> {
        let id = UserId::new();
        let email = format!("{}@example.test", id.into_inner().simple());
        self.users
            .insert(UserSummary::new(id, name, email))
            .map_err(|err| eyre::eyre!("register {name}: {err}"))?;
        Ok(id)
    }

    /// Returns the registered board owner.
    pub fn owner(&self) -> Result<UserId, eyre::Report> {
        self.owner
            .ok_or_else(|| eyre::eyre!("missing owner in scenario world"))
    }

    /// Returns the board created in this scenario.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Looks up an item by title.
    pub fn item(&self, title: &str) -> Result<ItemId, eyre::Report> {
        self.items
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown item {title}"))
    }

    /// Loads the board's kanban view as its owner.
    pub fn load_view(&self) -> Result<KanbanView, eyre::Report> {
        let owner = self.owner()?;
        let board_id = self.board()?.id();
        Ok(run_async(self.state.detail.kanban(owner, board_id))?)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
