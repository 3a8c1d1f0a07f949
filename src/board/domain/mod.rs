//! Domain model for boards and board membership.

mod access;
mod board;
mod error;
mod ids;
mod member;
mod settings;
mod slug;

pub use access::BoardAccess;
pub use board::{Board, BoardStatus, NewBoard, PersistedBoardData};
pub use error::{BoardDomainError, ParseBoardStatusError, ParseMemberRoleError};
pub use ids::{BoardId, BoardTypeId, TeamId};
pub use member::{BoardMember, MemberRole};
pub use settings::BoardSettings;
pub use slug::BoardSlug;
