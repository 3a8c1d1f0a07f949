//! Shared request helpers for HTTP API tests.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use eyre::WrapErr;
use rstest::fixture;
use serde_json::Value;
use taskboard::{
    app::Repositories,
    http::{ACTOR_HEADER, AppState, router},
    identity::{
        adapters::memory::InMemoryUserDirectory,
        domain::{TeamId, UserId, UserSummary},
    },
    item::domain::ColumnSet,
};
use tower::ServiceExt;

/// Router wired to fresh in-memory stores with one registered owner.
pub struct TestApp {
    router: Router,
    users: InMemoryUserDirectory,
    /// User that creates boards in most tests.
    pub owner: UserId,
}

/// Decoded response.
#[derive(Debug)]
pub struct Reply {
    /// Response status.
    pub status: StatusCode,
    /// JSON body, or `Null` for empty bodies.
    pub body: Value,
}

impl TestApp {
    /// Builds an app with the standard columns and a page size of 5.
    ///
    /// # Panics
    ///
    /// Panics when the owner cannot be registered.
    #[must_use]
    pub fn new() -> Self {
        let users = InMemoryUserDirectory::new();
        let repositories = Repositories::in_memory(users.clone());
        let state = AppState::new(&repositories, &ColumnSet::standard(), 5);
        let app = Self {
            router: router(state),
            users,
            owner: UserId::new(),
        };
        app.register_as(app.owner, "Olivia Owner");
        app
    }

    /// Registers a new user and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics when the directory rejects the insert.
    #[must_use]
    pub fn register(&self, name: &str) -> UserId {
        let id = UserId::new();
        self.register_as(id, name);
        id
    }

    /// Adds `user` to the roster of `team`.
    ///
    /// # Panics
    ///
    /// Panics when the directory rejects the insert.
    pub fn join_team(&self, team: TeamId, user: UserId) {
        self.users
            .add_to_team(team, user)
            .expect("team insert should succeed");
    }

    fn register_as(&self, id: UserId, name: &str) {
        self.users
            .insert(UserSummary::new(id, name, format!("{id}@example.test")))
            .expect("user insert should succeed");
    }

    /// Sends a body-less request with a raw actor header value.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or the body is not
    /// JSON.
    pub async fn send_with_header(
        &self,
        method: Method,
        uri: &str,
        actor_header: Option<&str>,
    ) -> eyre::Result<Reply> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = actor_header {
            builder = builder.header(ACTOR_HEADER, value);
        }
        self.dispatch(builder.body(Body::empty()).wrap_err("build request")?)
            .await
    }

    /// Sends a request as `actor` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or the body is not
    /// JSON.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        actor: Option<UserId>,
        body: Option<Value>,
    ) -> eyre::Result<Reply> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = actor {
            builder = builder.header(ACTOR_HEADER, user.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .wrap_err("build request")?;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> eyre::Result<Reply> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .wrap_err("route request")?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .wrap_err("read response body")?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).wrap_err("decode response body")?
        };
        Ok(Reply { status, body })
    }

    /// Creates a board owned by [`TestApp::owner`] and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error when the board is not created.
    pub async fn create_board(&self, name: &str, is_private: bool) -> eyre::Result<String> {
        let reply = self
            .send(
                Method::POST,
                "/boards",
                Some(self.owner),
                Some(serde_json::json!({
                    "name": name,
                    "type_id": 1,
                    "is_private": is_private,
                })),
            )
            .await?;
        eyre::ensure!(
            reply.status == StatusCode::CREATED,
            "board creation failed: {reply:?}"
        );
        string_field(&reply.body, "id")
    }

    /// Creates an item as `actor` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error when the item is not created.
    pub async fn create_item(
        &self,
        actor: UserId,
        board_id: &str,
        title: &str,
    ) -> eyre::Result<String> {
        let reply = self
            .send(
                Method::POST,
                "/boards/items/store",
                Some(actor),
                Some(serde_json::json!({ "boardId": board_id, "title": title })),
            )
            .await?;
        eyre::ensure!(
            reply.status == StatusCode::CREATED,
            "item creation failed: {reply:?}"
        );
        string_field(&reply.body, "id")
    }

    /// Invites `user` to `board_id` as the owner.
    ///
    /// # Errors
    ///
    /// Returns an error when the invitation fails.
    pub async fn invite(&self, board_id: &str, user: UserId) -> eyre::Result<()> {
        let reply = self
            .send(
                Method::POST,
                &format!("/boards/members/inviteMembers/{board_id}"),
                Some(self.owner),
                Some(serde_json::json!({ "user_ids": [user] })),
            )
            .await?;
        eyre::ensure!(reply.status == StatusCode::OK, "invite failed: {reply:?}");
        Ok(())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh app.
#[fixture]
pub fn app() -> TestApp {
    TestApp::new()
}

/// Reads a string field from a JSON object.
///
/// # Errors
///
/// Returns an error when the field is missing or not a string.
pub fn string_field(body: &Value, field: &str) -> eyre::Result<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("missing string field {field} in {body}"))
}
