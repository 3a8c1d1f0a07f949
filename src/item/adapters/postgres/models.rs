//! Diesel row models for items, votes, and comments.

use super::schema::{board_item_comments, board_item_votes, board_items};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row model for board items, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = board_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Owning board.
    pub board_id: uuid::Uuid,
    /// Creating user.
    pub creator_id: uuid::Uuid,
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status column label.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Creation-time position.
    pub position: i32,
    /// Cached vote count.
    pub votes: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for votes.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_item_votes)]
pub struct NewVoteRow {
    /// Voted item.
    pub board_item_id: uuid::Uuid,
    /// Voting user.
    pub user_id: uuid::Uuid,
    /// Vote timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row model for comments, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = board_item_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Commented item.
    pub board_item_id: uuid::Uuid,
    /// Author.
    pub author_id: uuid::Uuid,
    /// Comment body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}
