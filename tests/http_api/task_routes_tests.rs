//! Task route tests.

use super::helpers::{TestApp, app, string_field};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_round_trip(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Release", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Ship 1.0").await?;

    let created = app
        .send(
            Method::POST,
            "/task/store",
            Some(app.owner),
            Some(json!({ "board_item_id": item_id, "title": "Tag release" })),
        )
        .await?;
    let task_id = string_field(&created.body, "id")?;
    let renamed = app
        .send(
            Method::PUT,
            &format!("/task/tasks/{task_id}"),
            Some(app.owner),
            Some(json!({ "title": "Tag and publish" })),
        )
        .await?;
    let toggled = app
        .send(Method::PUT, &format!("/task/toogleTask/{task_id}"), Some(app.owner), None)
        .await?;
    let detail = app
        .send(Method::GET, &format!("/boards/{board_id}"), Some(app.owner), None)
        .await?;
    let deleted = app
        .send(Method::DELETE, &format!("/task/delete/{task_id}"), Some(app.owner), None)
        .await?;
    let missing = app
        .send(Method::PUT, &format!("/task/toogleTask/{task_id}"), Some(app.owner), None)
        .await?;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["completed"], false);
    assert_eq!(renamed.body["title"], "Tag and publish");
    assert_eq!(toggled.body["completed"], true);
    assert_eq!(
        detail.body["columns"][0]["items"][0]["tasks"][0]["title"],
        "Tag and publish"
    );
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_members_cannot_change_tasks(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Release", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Ship 1.0").await?;
    let member = app.register("Mia Member");
    app.invite(&board_id, member).await?;

    let reply = app
        .send(
            Method::POST,
            "/task/store",
            Some(member),
            Some(json!({ "board_item_id": item_id, "title": "Sneaky" })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_task_title_is_unprocessable(app: TestApp) -> eyre::Result<()> {
    let board_id = app.create_board("Release", false).await?;
    let item_id = app.create_item(app.owner, &board_id, "Ship 1.0").await?;

    let reply = app
        .send(
            Method::POST,
            "/task/store",
            Some(app.owner),
            Some(json!({ "board_item_id": item_id, "title": " " })),
        )
        .await?;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(reply.body["errors"]["title"].is_array());
    Ok(())
}
