//! Port contract for user lookups.

use super::domain::{TeamId, UserId, UserSummary};
use crate::db::PersistenceFailure;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Lookup contract over the externally owned user table.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the users among `ids` that exist, in unspecified order.
    ///
    /// Unknown identifiers are silently omitted.
    async fn find_many(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<UserSummary>>;

    /// Returns a single user, or `None` when it does not exist.
    async fn find(&self, id: UserId) -> UserDirectoryResult<Option<UserSummary>> {
        Ok(self.find_many(&[id]).await?.into_iter().next())
    }

    /// Returns the users belonging to `team`, ordered by name.
    ///
    /// An unknown team has no users.
    async fn team_users(&self, team: TeamId) -> UserDirectoryResult<Vec<UserSummary>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceFailure for UserDirectoryError {
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
