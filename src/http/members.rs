//! Board membership handlers.

use super::{Actor, ApiError, AppState};
use crate::board::domain::BoardId;
use crate::identity::domain::UserId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct InviteBody {
    #[serde(default)]
    user_ids: Vec<UserId>,
}

#[derive(Debug, Serialize)]
pub(super) struct InviteResponse {
    invited: usize,
}

pub(super) async fn invite_members(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(board_id): Path<BoardId>,
    Json(body): Json<InviteBody>,
) -> Result<Json<InviteResponse>, ApiError> {
    let invited = state
        .members
        .invite_members(actor, board_id, &body.user_ids)
        .await?;
    Ok(Json(InviteResponse { invited }))
}

pub(super) async fn remove_member(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path((board_id, user_id)): Path<(BoardId, UserId)>,
) -> Result<StatusCode, ApiError> {
    state.members.remove_member(actor, board_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
