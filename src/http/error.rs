//! Mapping of service errors to HTTP responses.

use crate::board::services::{BoardDetailError, BoardServiceError};
use crate::error::ValidationErrors;
use crate::item::services::ItemServiceError;
use crate::task::services::TaskServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The actor header is missing or not a UUID.
    #[error("missing or invalid actor header")]
    Unauthorized,
    /// Request fields failed validation.
    #[error(transparent)]
    Validation(ValidationErrors),
    /// The actor lacks the required role or ownership.
    #[error("{0}")]
    Forbidden(String),
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A store failure; the cause is logged, not returned.
    #[error("internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Unauthenticated." }),
            ),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": "The given data was invalid.", "errors": errors }),
            ),
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, json!({ "message": message })),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            Self::Internal(err) => {
                error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Something went wrong, please try again." }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<BoardServiceError> for ApiError {
    fn from(err: BoardServiceError) -> Self {
        match err {
            BoardServiceError::Validation(errors) => Self::Validation(errors),
            BoardServiceError::Forbidden(denied) => Self::Forbidden(denied.message().to_owned()),
            BoardServiceError::NotFound(id) => Self::NotFound(format!("Board {id} not found.")),
            other => Self::internal(other),
        }
    }
}

impl From<BoardDetailError> for ApiError {
    fn from(err: BoardDetailError) -> Self {
        match err {
            BoardDetailError::Forbidden(denied) => Self::Forbidden(denied.message().to_owned()),
            BoardDetailError::NotFound(id) => Self::NotFound(format!("Board {id} not found.")),
            other => Self::internal(other),
        }
    }
}

impl From<ItemServiceError> for ApiError {
    fn from(err: ItemServiceError) -> Self {
        match err {
            ItemServiceError::Validation(errors) => Self::Validation(errors),
            ItemServiceError::Forbidden(denied) => Self::Forbidden(denied.message().to_owned()),
            ItemServiceError::BoardNotFound(id) => {
                Self::NotFound(format!("Board {id} not found."))
            }
            ItemServiceError::ItemNotFound(id) => Self::NotFound(format!("Item {id} not found.")),
            ItemServiceError::CommentNotFound(id) => {
                Self::NotFound(format!("Comment {id} not found."))
            }
            other => Self::internal(other),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(errors) => Self::Validation(errors),
            TaskServiceError::Forbidden(denied) => Self::Forbidden(denied.message().to_owned()),
            TaskServiceError::ItemNotFound(id) => Self::NotFound(format!("Item {id} not found.")),
            TaskServiceError::TaskNotFound(id) => Self::NotFound(format!("Task {id} not found.")),
            other => Self::internal(other),
        }
    }
}
