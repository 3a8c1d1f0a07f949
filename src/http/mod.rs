//! JSON-over-HTTP surface.
//!
//! The acting user is taken from the `x-user-id` header set by the upstream
//! authentication layer. Service errors map to `422` (field errors), `403`,
//! `404`, and `500` responses.

mod actor;
mod boards;
mod error;
mod items;
mod members;
mod state;
mod tasks;

pub use actor::{ACTOR_HEADER, Actor};
pub use error::ApiError;
pub use state::AppState;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use serde_json::json;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route("/boards", get(boards::list_boards).post(boards::create_board))
        .route(
            "/boards/:board",
            get(boards::show_board).delete(boards::delete_board),
        )
        .route("/boards/:board/archive", put(boards::archive_board))
        .route("/boards/items/store", post(items::create_item))
        .route("/boards/items/:item", delete(items::delete_item))
        .route(
            "/boardItem/switchBoardStatus/:item",
            put(items::switch_status),
        )
        .route("/boards/items/:item/vote", post(items::toggle_vote))
        .route("/boards/items/:item/comments", post(items::add_comment))
        .route("/comments/:comment", delete(items::delete_comment))
        .route("/task/store", post(tasks::create_task))
        .route("/task/tasks/:task", put(tasks::rename_task))
        .route("/task/toogleTask/:task", put(tasks::toggle_task))
        .route("/task/delete/:task", delete(tasks::delete_task))
        .route(
            "/boards/members/inviteMembers/:board",
            post(members::invite_members),
        )
        .route(
            "/boards/members/deleteMember/:board/:user",
            delete(members::remove_member),
        )
        .with_state(state)
}
