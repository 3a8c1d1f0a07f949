//! Port contracts for item persistence and status updates.

pub mod comments;
pub mod repository;
pub mod status;

pub use comments::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
pub use repository::{BoardItemRepository, BoardItemRepositoryError, BoardItemRepositoryResult};
pub use status::{StatusSink, StatusSinkError};
