//! Board handlers.

use super::{Actor, ApiError, AppState};
use crate::board::{
    domain::{Board, BoardId, BoardSettings, TeamId},
    services::{BoardDetail, BoardPage, CreateBoardRequest},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(super) struct PageQuery {
    page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateBoardBody {
    name: String,
    description: Option<String>,
    type_id: i64,
    team_id: Option<TeamId>,
    #[serde(default)]
    is_private: bool,
    settings: Option<BoardSettings>,
    status: Option<String>,
}

impl From<CreateBoardBody> for CreateBoardRequest {
    fn from(body: CreateBoardBody) -> Self {
        let mut request = Self::new(body.name, body.type_id).private(body.is_private);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(team_id) = body.team_id {
            request = request.with_team(team_id);
        }
        if let Some(settings) = body.settings {
            request = request.with_settings(settings);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        request
    }
}

pub(super) async fn list_boards(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<PageQuery>,
) -> Result<Json<BoardPage>, ApiError> {
    let page = state
        .boards
        .list_boards(actor, query.page.unwrap_or(1))
        .await?;
    Ok(Json(page))
}

pub(super) async fn create_board(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<CreateBoardBody>,
) -> Result<(StatusCode, Json<Board>), ApiError> {
    let board = state.boards.create_board(actor, body.into()).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub(super) async fn show_board(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(board_id): Path<BoardId>,
) -> Result<Json<BoardDetail>, ApiError> {
    let detail = state.detail.show_board(actor, board_id).await?;
    Ok(Json(detail))
}

pub(super) async fn archive_board(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(board_id): Path<BoardId>,
) -> Result<Json<Board>, ApiError> {
    let board = state.boards.archive_board(actor, board_id).await?;
    Ok(Json(board))
}

pub(super) async fn delete_board(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(board_id): Path<BoardId>,
) -> Result<StatusCode, ApiError> {
    state.boards.delete_board(actor, board_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
