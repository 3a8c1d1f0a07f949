//! Board item aggregate.

use super::{ItemDomainError, ItemId, Priority, StatusLabel};
use crate::board::domain::BoardId;
use crate::error::ValidationErrors;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum item title length in characters.
const MAX_TITLE_LENGTH: usize = 255;

/// Maximum item description length in characters.
const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Parameter object for creating a board item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoardItem {
    /// Owning board.
    pub board_id: BoardId,
    /// Acting user creating the item.
    pub creator_id: UserId,
    /// Raw title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Initial column.
    pub status: StatusLabel,
    /// Priority.
    pub priority: Priority,
    /// Creation-time position on the board.
    pub position: i32,
}

/// A card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    id: ItemId,
    board_id: BoardId,
    creator_id: UserId,
    title: String,
    description: Option<String>,
    status: StatusLabel,
    priority: Priority,
    position: i32,
    vote_count: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted board item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardItemData {
    /// Persisted identifier.
    pub id: ItemId,
    /// Persisted board.
    pub board_id: BoardId,
    /// Persisted creator.
    pub creator_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted status.
    pub status: StatusLabel,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted position.
    pub position: i32,
    /// Persisted vote count.
    pub vote_count: u32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl BoardItem {
    /// Creates an item with no votes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when the title is blank or too long, or
    /// the description is too long.
    pub fn create(new: NewBoardItem, clock: &impl Clock) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = new.title.trim().to_owned();
        if title.is_empty() {
            errors.merge(ItemDomainError::TitleRequired.into());
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            errors.merge(
                ItemDomainError::TitleTooLong {
                    max: MAX_TITLE_LENGTH,
                }
                .into(),
            );
        }

        let description = new
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());
        if description
            .as_ref()
            .is_some_and(|text| text.chars().count() > MAX_DESCRIPTION_LENGTH)
        {
            errors.merge(
                ItemDomainError::DescriptionTooLong {
                    max: MAX_DESCRIPTION_LENGTH,
                }
                .into(),
            );
        }
        errors.into_result()?;

        let timestamp = clock.utc();
        Ok(Self {
            id: ItemId::new(),
            board_id: new.board_id,
            creator_id: new.creator_id,
            title,
            description,
            status: new.status,
            priority: new.priority,
            position: new.position,
            vote_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        })
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardItemData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            creator_id: data.creator_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            position: data.position,
            vote_count: data.vote_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the owning board.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current column.
    #[must_use]
    pub const fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation-time position.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Returns the number of votes cast.
    #[must_use]
    pub const fn vote_count(&self) -> u32 {
        self.vote_count
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

    /// Moves the item to `status`. Returns `false` when it is already there.
    pub fn switch_status(&mut self, status: StatusLabel, clock: &impl Clock) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = clock.utc();
        true
    }

    /// Replaces the cached vote count after votes changed in storage.
    pub const fn set_vote_count(&mut self, vote_count: u32) {
        self.vote_count = vote_count;
    }

    /// Soft-deletes the item.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
    }
}

/// Result of toggling a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    /// Whether the actor's vote is now cast.
    pub voted: bool,
    /// Item vote count after the toggle.
    pub vote_count: u32,
}
