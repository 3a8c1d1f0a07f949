//! In-memory repository for item comments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::PersistenceFailure;
use crate::item::{
    domain::{Comment, CommentId, ItemId},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<CommentId, Comment>>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> CommentRepositoryError {
    CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        if comments.contains_key(&comment.id()) {
            return Err(CommentRepositoryError::DuplicateComment(comment.id()));
        }
        comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        let stored = comments
            .get_mut(&comment.id())
            .ok_or(CommentRepositoryError::NotFound(comment.id()))?;
        *stored = comment.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        let comments = self.comments.read().map_err(poisoned)?;
        Ok(comments
            .get(&id)
            .filter(|comment| comment.deleted_at().is_none())
            .cloned())
    }

    async fn count_for_items(
        &self,
        items: &[ItemId],
    ) -> CommentRepositoryResult<HashMap<ItemId, usize>> {
        let comments = self.comments.read().map_err(poisoned)?;
        let mut counts = HashMap::new();
        for comment in comments
            .values()
            .filter(|comment| comment.deleted_at().is_none() && items.contains(&comment.item_id()))
        {
            *counts.entry(comment.item_id()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
