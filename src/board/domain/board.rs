//! Board aggregate root.

use super::{
    BoardDomainError, BoardId, BoardSettings, BoardSlug, BoardTypeId, ParseBoardStatusError,
    TeamId,
};
use crate::error::ValidationErrors;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Minimum board name length in characters.
const MIN_NAME_LENGTH: usize = 3;

/// Maximum board name length in characters.
const MAX_NAME_LENGTH: usize = 255;

/// Maximum board description length in characters.
const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Board publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    /// Board is in use.
    Active,
    /// Board is being prepared.
    Draft,
    /// Board is read-only history.
    Archived,
}

impl BoardStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

impl TryFrom<&str> for BoardStatus {
    type Error = ParseBoardStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseBoardStatusError(value.to_owned())),
        }
    }
}

/// Parameter object for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    /// Raw board name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Board type.
    pub type_id: BoardTypeId,
    /// Acting user creating the board.
    pub creator_id: UserId,
    /// Optional owning team.
    pub team_id: Option<TeamId>,
    /// Whether the board is restricted to its creator and members.
    pub is_private: bool,
    /// Feature toggles.
    pub settings: BoardSettings,
    /// Initial status; only active or draft are accepted.
    pub status: BoardStatus,
}

/// Board aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    name: String,
    slug: BoardSlug,
    description: Option<String>,
    type_id: BoardTypeId,
    creator_id: UserId,
    team_id: Option<TeamId>,
    is_private: bool,
    settings: BoardSettings,
    status: BoardStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted identifier.
    pub id: BoardId,
    /// Persisted name.
    pub name: String,
    /// Persisted slug.
    pub slug: BoardSlug,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted board type.
    pub type_id: BoardTypeId,
    /// Persisted creator.
    pub creator_id: UserId,
    /// Persisted team.
    pub team_id: Option<TeamId>,
    /// Persisted privacy flag.
    pub is_private: bool,
    /// Persisted settings.
    pub settings: BoardSettings,
    /// Persisted status.
    pub status: BoardStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Creates a board, deriving its slug from the name.
    ///
    /// All field failures are collected so callers can report them together.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] keyed by request field when the name,
    /// description, or status is invalid.
    pub fn create(new: NewBoard, clock: &impl Clock) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = new.name.trim().to_owned();
        let name_length = name.chars().count();
        if name_length < MIN_NAME_LENGTH {
            record(&mut errors, BoardDomainError::NameTooShort { min: MIN_NAME_LENGTH });
        } else if name_length > MAX_NAME_LENGTH {
            record(&mut errors, BoardDomainError::NameTooLong { max: MAX_NAME_LENGTH });
        }
        let slug = BoardSlug::from_name(&name)
            .map_err(|err| record(&mut errors, err))
            .ok();

        let description = new
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());
        if description
            .as_ref()
            .is_some_and(|text| text.chars().count() > MAX_DESCRIPTION_LENGTH)
        {
            record(
                &mut errors,
                BoardDomainError::DescriptionTooLong {
                    max: MAX_DESCRIPTION_LENGTH,
                },
            );
        }

        if new.status == BoardStatus::Archived {
            record(
                &mut errors,
                BoardDomainError::StatusNotAllowed(new.status.as_str().to_owned()),
            );
        }

        errors.into_result()?;
        let Some(derived_slug) = slug else {
            return Err(ValidationErrors::single("name", "board name is invalid"));
        };

        let timestamp = clock.utc();
        Ok(Self {
            id: BoardId::new(),
            name,
            slug: derived_slug,
            description,
            type_id: new.type_id,
            creator_id: new.creator_id,
            team_id: new.team_id,
            is_private: new.is_private,
            settings: new.settings,
            status: new.status,
            created_at: timestamp,
            updated_at: timestamp,
            deleted_at: None,
        })
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            slug: data.slug,
            description: data.description,
            type_id: data.type_id,
            creator_id: data.creator_id,
            team_id: data.team_id,
            is_private: data.is_private,
            settings: data.settings,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            deleted_at: data.deleted_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slug derived at creation.
    #[must_use]
    pub const fn slug(&self) -> &BoardSlug {
        &self.slug
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the board type.
    #[must_use]
    pub const fn type_id(&self) -> BoardTypeId {
        self.type_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the owning team, if any.
    #[must_use]
    pub const fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    /// Returns `true` when the board is restricted to creator and members.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.is_private
    }

    /// Returns the feature toggles.
    #[must_use]
    pub const fn settings(&self) -> BoardSettings {
        self.settings
    }

    /// Returns the publication status.
    #[must_use]
    pub const fn status(&self) -> BoardStatus {
        self.status
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

    /// Returns `true` once the board has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns `true` when `user` created the board.
    #[must_use]
    pub fn is_creator(&self, user: UserId) -> bool {
        self.creator_id == user
    }

    /// Marks the board archived. Returns `false` when it already was.
    pub fn archive(&mut self, clock: &impl Clock) -> bool {
        if self.status == BoardStatus::Archived {
            return false;
        }
        self.status = BoardStatus::Archived;
        self.touch(clock);
        true
    }

    /// Soft-deletes the board; the row is retained and flagged.
    pub fn mark_deleted(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn record(errors: &mut ValidationErrors, err: BoardDomainError) {
    errors.add(err.field(), err.to_string());
}
