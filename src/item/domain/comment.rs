//! Comments left on board items.

use super::{CommentId, ItemDomainError, ItemId};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum comment length in characters.
const MAX_CONTENT_LENGTH: usize = 2000;

/// A comment on a board item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    item_id: ItemId,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted identifier.
    pub id: CommentId,
    /// Persisted item.
    pub item_id: ItemId,
    /// Persisted author.
    pub author_id: UserId,
    /// Persisted content.
    pub content: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Creates a comment by `author_id` on `item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::CommentRequired`] for blank content or
    /// [`ItemDomainError::CommentTooLong`] past 2000 characters.
    pub fn create(
        item_id: ItemId,
        author_id: UserId,
        content: &str,
        clock: &impl Clock,
    ) -> Result<Self, ItemDomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ItemDomainError::CommentRequired);
        }
        if trimmed.chars().count() > MAX_CONTENT_LENGTH {
            return Err(ItemDomainError::CommentTooLong {
                max: MAX_CONTENT_LENGTH,
            });
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: CommentId::new(),
            item_id,
            author_id,
            content: trimmed.to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            item_id: data.item_id,
            author_id: data.author_id,
            content: data.content,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the commented item.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-deletion timestamp, if deleted.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Soft-deletes the comment.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
    }
}
