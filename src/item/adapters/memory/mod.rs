//! In-memory adapters for items and comments.

mod comments;
mod items;

pub use comments::InMemoryCommentRepository;
pub use items::InMemoryBoardItemRepository;
