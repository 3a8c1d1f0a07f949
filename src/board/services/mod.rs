//! Application services for board lifecycle, membership, and detail.

mod context;
mod detail;
mod error;
mod lifecycle;
mod membership;

pub use context::BoardContext;
pub use detail::{
    BoardDetail, BoardDetailError, BoardDetailService, ColumnDetail, ItemDetail, MemberDetail,
};
pub use error::{BoardServiceError, BoardServiceResult};
pub use lifecycle::{BoardLifecycleService, BoardPage, CreateBoardRequest};
pub use membership::BoardMembershipService;
