//! Board route tests.

use super::helpers::{TestApp, app, string_field};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;
use taskboard::{
    app::Repositories,
    board::services::CreateBoardRequest,
    http::AppState,
    identity::{
        adapters::memory::InMemoryUserDirectory,
        domain::{TeamId, UserId, UserSummary},
    },
    item::domain::ColumnSet,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_is_public(app: TestApp) -> eyre::Result<()> {
    let reply = app.send(Method::GET, "/health", None, None).await?;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({ "status": "ok" }));
    Ok(())
}

#[rstest]
#[case(None)]
#[case(Some("not-a-uuid"))]
#[tokio::test(flavor = "multi_thread")]
async fn missing_or_invalid_actor_is_unauthorized(
    app: TestApp,
    #[case] header: Option<&str>,
) -> eyre::Result<()> {
    let reply = app.send_with_header(Method::GET, "/boards", header).await?;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["message"], "Unauthenticated.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_board_returns_slug_and_default_settings(app: TestApp) -> eyre::Result<()> {
    let reply = app
        .send(
            Method::POST,
            "/boards",
            Some(app.owner),
            Some(json!({ "name": "Sprint 12", "type_id": 1 })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["slug"], "sprint-12");
    assert_eq!(reply.body["status"], "active");
    assert_eq!(
        reply.body["settings"],
        json!({ "enable_voting": true, "allow_comments": true, "show_creator": true })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accented_names_produce_ascii_slugs(app: TestApp) -> eyre::Result<()> {
    let reply = app
        .send(
            Method::POST,
            "/boards",
            Some(app.owner),
            Some(json!({ "name": "Café Roadmap", "type_id": 1 })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["slug"], "cafe-roadmap");
    assert_eq!(reply.body["name"], "Café Roadmap");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_detail_lists_invitable_team_users(app: TestApp) -> eyre::Result<()> {
    let team = TeamId::new();
    let member = app.register("Mia Member");
    let candidate = app.register("Carl Candidate");
    for user in [app.owner, member, candidate] {
        app.join_team(team, user);
    }
    let created = app
        .send(
            Method::POST,
            "/boards",
            Some(app.owner),
            Some(json!({ "name": "Team plan", "type_id": 1, "team_id": team })),
        )
        .await?;
    let board_id = string_field(&created.body, "id")?;
    app.invite(&board_id, member).await?;

    let reply = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(app.owner), None)
        .await?;

    assert_eq!(reply.status, StatusCode::OK);
    let invitable = reply.body["invitable_users"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("invitable_users should be an array"))?;
    assert_eq!(invitable.len(), 1);
    assert_eq!(invitable[0]["id"], json!(candidate));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_state_serves_the_same_stores() -> eyre::Result<()> {
    let users = InMemoryUserDirectory::new();
    let owner = UserId::new();
    users.insert(UserSummary::new(owner, "Olivia Owner", "olivia@example.test"))?;
    let state = AppState::new(&Repositories::in_memory(users), &ColumnSet::standard(), 5);
    let cloned = state.clone();

    let board = cloned
        .boards
        .create_board(owner, CreateBoardRequest::new("Shared", 1))
        .await?;
    let page = state.boards.list_boards(owner, 1).await?;

    assert_eq!(page.boards.first().map(|b| b.id()), Some(board.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_board_is_unprocessable(app: TestApp) -> eyre::Result<()> {
    let reply = app
        .send(
            Method::POST,
            "/boards",
            Some(app.owner),
            Some(json!({ "name": "ab", "type_id": 1 })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body["message"], "The given data was invalid.");
    assert!(reply.body["errors"]["name"].is_array());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_pages_visible_boards(app: TestApp) -> eyre::Result<()> {
    app.create_board("Public", false).await?;
    app.create_board("Private", true).await?;
    let stranger = app.register("Sam Stranger");

    let mine = app.send(Method::GET, "/boards?page=1", Some(app.owner), None).await?;
    let theirs = app.send(Method::GET, "/boards", Some(stranger), None).await?;

    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body["boards"].as_array().map(Vec::len), Some(2));
    assert_eq!(mine.body["has_more"], false);
    assert_eq!(theirs.body["boards"].as_array().map(Vec::len), Some(1));
    assert_eq!(theirs.body["boards"][0]["name"], "Public");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detail_of_private_board_is_forbidden_to_strangers(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Hidden", true).await?;
    let stranger = app.register("Sam Stranger");

    let reply = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(stranger), None)
        .await?;

    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert!(reply.body["message"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detail_renders_columns_and_capabilities(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Launch", false).await?;
    app.create_item(app.owner, &board_id, "Write copy").await?;

    let reply = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(app.owner), None)
        .await?;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["can_delete"], true);
    assert_eq!(reply.body["role"], "owner");
    assert_eq!(reply.body["columns"][0]["status"], "todo");
    assert_eq!(reply.body["columns"][0]["items"][0]["title"], "Write copy");
    assert_eq!(reply.body["columns"][0]["items"][0]["votes_count"], 0);
    assert_eq!(reply.body["creator"]["name"], "Olivia Owner");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archive_and_delete_require_the_creator(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Roadmap", false).await?;
    let other = app.register("Otto Other");

    let rejected = app
        .send(Method::PUT, &format!("/boards/{board_id}/archive"), Some(other), None)
        .await?;
    let archived = app
        .send(Method::PUT, &format!("/boards/{board_id}/archive"), Some(app.owner), None)
        .await?;
    let deleted = app
        .send(Method::DELETE, &format!("/boards/{board_id}"), Some(app.owner), None)
        .await?;
    let missing = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(app.owner), None)
        .await?;

    assert_eq!(rejected.status, StatusCode::FORBIDDEN);
    assert_eq!(archived.status, StatusCode::OK);
    assert_eq!(string_field(&archived.body, "status")?, "archived");
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    Ok(())
}
