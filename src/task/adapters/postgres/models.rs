//! Diesel row model for tasks.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row model for task records, used for both reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning board item.
    pub board_item_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
