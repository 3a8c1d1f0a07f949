//! Port through which the status engine persists cross-column moves.

use crate::item::domain::{ItemId, StatusLabel};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Durable target for item status changes.
#[async_trait]
pub trait StatusSink: Send + Sync {
    /// Persists `status` as the item's column.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSinkError`] when the change was not persisted.
    async fn switch_status(&self, item: ItemId, status: &StatusLabel)
    -> Result<(), StatusSinkError>;
}

/// Failure reported by a [`StatusSink`].
#[derive(Debug, Clone, Error)]
#[error("status update failed: {0}")]
pub struct StatusSinkError(Arc<dyn std::error::Error + Send + Sync>);

impl StatusSinkError {
    /// Wraps the underlying failure.
    #[must_use]
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Returns the underlying failure.
    #[must_use]
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}
