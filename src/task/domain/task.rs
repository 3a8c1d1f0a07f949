//! Task entity.

use super::{TaskDomainError, TaskId};
use crate::item::domain::ItemId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum task title length in characters.
const MAX_TITLE_LENGTH: usize = 255;

/// A checklist entry on a board item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    board_item_id: ItemId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Persisted owning item.
    pub board_item_id: ItemId,
    /// Persisted title.
    pub title: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task on `board_item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title or
    /// [`TaskDomainError::TitleTooLong`] past 255 characters.
    pub fn create(
        board_item_id: ItemId,
        title: &str,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let validated = validate_title(title)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            board_item_id,
            title: validated,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            board_item_id: data.board_item_id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning item.
    #[must_use]
    pub const fn board_item_id(&self) -> ItemId {
        self.board_item_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` once the task is ticked off.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
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

    /// Renames the task.
    ///
    /// A blank or unchanged title leaves the task untouched and returns
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooLong`] past 255 characters.
    pub fn rename(&mut self, title: &str, clock: &impl Clock) -> Result<bool, TaskDomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() || trimmed == self.title {
            return Ok(false);
        }
        self.title = validate_title(trimmed)?;
        self.updated_at = clock.utc();
        Ok(true)
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self, clock: &impl Clock) -> bool {
        self.completed = !self.completed;
        self.updated_at = clock.utc();
        self.completed
    }
}

fn validate_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(TaskDomainError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(trimmed.to_owned())
}
