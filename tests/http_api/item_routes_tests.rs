//! Item, vote, and comment route tests.

use super::helpers::{TestApp, app, string_field};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_accepts_board_id_in_either_spelling(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Launch", false).await?;

    let camel = app
        .send(
            Method::POST,
            "/boards/items/store",
            Some(app.owner),
            Some(json!({ "boardId": board_id, "title": "Camel" })),
        )
        .await?;
    let snake = app
        .send(
            Method::POST,
            "/boards/items/store",
            Some(app.owner),
            Some(json!({ "board_id": board_id, "title": "Snake", "priority": "high", "status": "done" })),
        )
        .await?;

    assert_eq!(camel.status, StatusCode::CREATED);
    assert_eq!(camel.body["status"], "todo");
    assert_eq!(camel.body["priority"], "medium");
    assert_eq!(snake.status, StatusCode::CREATED);
    assert_eq!(snake.body["status"], "done");
    assert_eq!(snake.body["priority"], "high");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_reports_field_errors(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Launch", false).await?;

    let reply = app
        .send(
            Method::POST,
            "/boards/items/store",
            Some(app.owner),
            Some(json!({ "boardId": board_id, "title": "", "status": "someday" })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(reply.body["errors"]["title"].is_array());
    assert!(reply.body["errors"]["status"].is_array());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switch_status_moves_and_rejects_unknown_columns(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Launch", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Ship").await?;
    let uri = format!("/boardItem/switchBoardStatus/{item_id}");

    let moved = app
        .send(Method::PUT, &uri, Some(app.owner), Some(json!({ "status": "done" })))
        .await?;
    let unknown = app
        .send(Method::PUT, &uri, Some(app.owner), Some(json!({ "status": "shipped" })))
        .await?;

    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["status"], "done");
    assert_eq!(unknown.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(unknown.body["errors"]["status"].is_array());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn votes_toggle_and_show_in_detail(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Ideas", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Dark mode").await?;
    let voter = app.register("Val Voter");
    let uri = format!("/boards/items/{item_id}/vote");

    let cast = app.send(Method::POST, &uri, Some(voter), None).await?;
    let detail = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(voter), None)
        .await?;
    let retracted = app.send(Method::POST, &uri, Some(voter), None).await?;

    assert_eq!(cast.body, json!({ "voted": true, "vote_count": 1 }));
    assert_eq!(detail.body["columns"][0]["items"][0]["is_voted"], true);
    assert_eq!(detail.body["columns"][0]["items"][0]["votes_count"], 1);
    assert_eq!(retracted.body, json!({ "voted": false, "vote_count": 0 }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_can_be_added_and_removed(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Ideas", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Dark mode").await?;
    let reader = app.register("Rita Reader");
    let other = app.register("Otto Other");

    let added = app
        .send(
            Method::POST,
            &format!("/boards/items/{item_id}/comments"),
            Some(reader),
            Some(json!({ "content": "Yes please" })),
        )
        .await?;
    let comment_id = string_field(&added.body, "id")?;
    let rejected = app
        .send(Method::DELETE, &format!("/comments/{comment_id}"), Some(other), None)
        .await?;
    let removed = app
        .send(Method::DELETE, &format!("/comments/{comment_id}"), Some(reader), None)
        .await?;
    let missing = app
        .send(Method::DELETE, &format!("/comments/{comment_id}"), Some(reader), None)
        .await?;

    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.body["content"], "Yes please");
    assert_eq!(rejected.status, StatusCode::FORBIDDEN);
    assert_eq!(removed.status, StatusCode::NO_CONTENT);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn items_are_deleted_by_their_creators(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Ideas", false).await?;
    let member = app.register("Mia Member");
    let other = app.register("Otto Other");
    app.invite(&board_id, member).await?;
    app.invite(&board_id, other).await?;
    let item_id = app.create_item(member, &board_id, "Mine").await?;
    let uri = format!("/boards/items/{item_id}");

    let rejected = app.send(Method::DELETE, &uri, Some(other), None).await?;
    let removed = app.send(Method::DELETE, &uri, Some(member), None).await?;
    let gone = app.send(Method::DELETE, &uri, Some(member), None).await?;

    assert_eq!(rejected.status, StatusCode::FORBIDDEN);
    assert_eq!(removed.status, StatusCode::NO_CONTENT);
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    Ok(())
}
