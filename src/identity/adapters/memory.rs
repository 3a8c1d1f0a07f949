//! In-memory user directory for tests and database-free runs.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::db::PersistenceFailure;
use crate::identity::{
    domain::{TeamId, UserId, UserSummary},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

#[derive(Debug, Default)]
struct DirectoryState {
    users: HashMap<UserId, UserSummary>,
    teams: HashMap<TeamId, BTreeSet<UserId>>,
}

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

fn poisoned(err: impl std::fmt::Display) -> UserDirectoryError {
    UserDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, user: UserSummary) -> UserDirectoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.users.insert(user.id(), user);
        Ok(())
    }

    /// Records `user` as part of `team`. Repeated calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Persistence`] when the lock is poisoned.
    pub fn add_to_team(&self, team: TeamId, user: UserId) -> UserDirectoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.teams.entry(team).or_default().insert(user);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_many(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<UserSummary>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }

    async fn team_users(&self, team: TeamId) -> UserDirectoryResult<Vec<UserSummary>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut found: Vec<UserSummary> = state
            .teams
            .get(&team)
            .into_iter()
            .flatten()
            .filter_map(|id| state.users.get(id).cloned())
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(found)
    }
}
