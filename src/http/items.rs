//! Item, vote, and comment handlers.

use super::{Actor, ApiError, AppState};
use crate::board::domain::BoardId;
use crate::item::{
    domain::{BoardItem, Comment, CommentId, ItemId, VoteOutcome},
    services::CreateItemRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateItemBody {
    #[serde(alias = "boardId")]
    board_id: BoardId,
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
}

impl From<CreateItemBody> for CreateItemRequest {
    fn from(body: CreateItemBody) -> Self {
        let mut request = Self::new(body.board_id, body.title);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        if let Some(priority) = body.priority {
            request = request.with_priority(priority);
        }
        request
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct StatusBody {
    status: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentBody {
    content: String,
}

pub(super) async fn create_item(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<CreateItemBody>,
) -> Result<(StatusCode, Json<BoardItem>), ApiError> {
    let item = state.items.create_item(actor, body.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub(super) async fn switch_status(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(item_id): Path<ItemId>,
    Json(body): Json<StatusBody>,
) -> Result<Json<BoardItem>, ApiError> {
    let item = state
        .items
        .switch_status(actor, item_id, &body.status)
        .await?;
    Ok(Json(item))
}

pub(super) async fn delete_item(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(item_id): Path<ItemId>,
) -> Result<StatusCode, ApiError> {
    state.items.delete_item(actor, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn toggle_vote(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(item_id): Path<ItemId>,
) -> Result<Json<VoteOutcome>, ApiError> {
    let outcome = state.engagement.toggle_vote(actor, item_id).await?;
    Ok(Json(outcome))
}

pub(super) async fn add_comment(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(item_id): Path<ItemId>,
    Json(body): Json<CommentBody>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state
        .engagement
        .add_comment(actor, item_id, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub(super) async fn delete_comment(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(comment_id): Path<CommentId>,
) -> Result<StatusCode, ApiError> {
    state.engagement.delete_comment(actor, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
