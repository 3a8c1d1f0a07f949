//! Task handlers.

use super::{Actor, ApiError, AppState};
use crate::item::domain::ItemId;
use crate::task::domain::{Task, TaskId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateTaskBody {
    board_item_id: ItemId,
    title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RenameTaskBody {
    title: String,
}

pub(super) async fn create_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state
        .tasks
        .create_task(actor, body.board_item_id, &body.title)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn rename_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(task_id): Path<TaskId>,
    Json(body): Json<RenameTaskBody>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.rename_task(actor, task_id, &body.title).await?;
    Ok(Json(task))
}

pub(super) async fn toggle_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(task_id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.toggle_task(actor, task_id).await?;
    Ok(Json(task))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(task_id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete_task(actor, task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
