//! Domain model for board items, comments, votes, and the kanban view.

mod columns;
mod comment;
mod error;
mod ids;
mod item;
mod kanban;
mod priority;

pub use columns::{ColumnSet, ColumnSetError, StatusLabel};
pub use comment::{Comment, PersistedCommentData};
pub use error::{ItemDomainError, ParsePriorityError};
pub use ids::{CommentId, ItemId};
pub use item::{BoardItem, NewBoardItem, PersistedBoardItemData, VoteOutcome};
pub use kanban::{DropTarget, ItemCard, KanbanColumn, KanbanView, MoveOutcome, MoveRequest};
pub use priority::Priority;
