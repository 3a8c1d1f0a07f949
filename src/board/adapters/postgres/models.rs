//! Diesel row models for board persistence.

use super::schema::{board_members, boards};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for board records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Optional description.
    pub description: Option<String>,
    /// Publication status.
    pub status: String,
    /// Board type identifier.
    pub type_id: i64,
    /// Creating user.
    pub creator_id: uuid::Uuid,
    /// Optional owning team.
    pub team_id: Option<uuid::Uuid>,
    /// Privacy flag.
    pub is_private: bool,
    /// Feature toggles JSON payload.
    pub settings: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for board records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Optional description.
    pub description: Option<String>,
    /// Publication status.
    pub status: String,
    /// Board type identifier.
    pub type_id: i64,
    /// Creating user.
    pub creator_id: uuid::Uuid,
    /// Optional owning team.
    pub team_id: Option<uuid::Uuid>,
    /// Privacy flag.
    pub is_private: bool,
    /// Feature toggles JSON payload.
    pub settings: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for board memberships, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = board_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    /// Board identifier.
    pub board_id: uuid::Uuid,
    /// Member user identifier.
    pub user_id: uuid::Uuid,
    /// Member role.
    pub role: String,
    /// Membership timestamp.
    pub joined_at: DateTime<Utc>,
}
