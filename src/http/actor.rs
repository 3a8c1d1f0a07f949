//! Extraction of the acting user from request headers.

use super::ApiError;
use crate::identity::domain::UserId;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the authenticated user's identifier.
pub const ACTOR_HEADER: &str = "x-user-id";

/// The authenticated user performing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<UserId>().ok())
            .map(Self)
            .ok_or(ApiError::Unauthorized)
    }
}
