//! `PostgreSQL` adapters for items, votes, and comments.

mod comments;
mod items;
mod models;
mod schema;

pub use comments::PostgresCommentRepository;
pub use items::PostgresBoardItemRepository;
