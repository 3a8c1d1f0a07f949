//! Item, vote, and comment persistence against `PostgreSQL`.

use super::helpers::{PgHarness, harness};
use rstest::rstest;
use taskboard::item::{domain::Priority, services::CreateItemRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn items_round_trip_with_positions(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let board = pg.board(owner, "Items", false).await?;

    let first = pg
        .state
        .items
        .create_item(owner, CreateItemRequest::new(board.id(), "First"))
        .await?;
    let second = pg
        .state
        .items
        .create_item(
            owner,
            CreateItemRequest::new(board.id(), "Second")
                .with_status("done")
                .with_priority("urgent")
                .with_description("details"),
        )
        .await?;
    let stored = pg.repositories.items.find_by_id(second.id()).await?;

    assert_eq!(first.position(), 0);
    assert_eq!(second.position(), 1);
    let stored = stored.ok_or_else(|| eyre::eyre!("item should be stored"))?;
    assert_eq!(stored.title(), "Second");
    assert_eq!(stored.description(), Some("details"));
    assert_eq!(stored.status().as_str(), "done");
    assert_eq!(stored.priority(), Priority::Urgent);
    assert_eq!(stored.creator_id(), owner);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_switch_and_soft_delete_persist(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let board = pg.board(owner, "Moves", false).await?;
    let item = pg
        .state
        .items
        .create_item(owner, CreateItemRequest::new(board.id(), "Move me"))
        .await?;

    pg.state.items.switch_status(owner, item.id(), "in-progress").await?;
    let moved = pg.repositories.items.find_by_id(item.id()).await?;
    pg.state.items.delete_item(owner, item.id()).await?;
    let live = pg.repositories.items.list_for_board(board.id()).await?;

    assert_eq!(
        moved.map(|found| found.status().as_str().to_owned()),
        Some("in-progress".to_owned())
    );
    assert!(live.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn votes_keep_the_cached_count_in_step(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let voter = pg.register("Val Voter").await?;
    let board = pg.board(owner, "Votes", false).await?;
    let item = pg
        .state
        .items
        .create_item(owner, CreateItemRequest::new(board.id(), "Popular"))
        .await?;

    let by_owner = pg.state.engagement.toggle_vote(owner, item.id()).await?;
    let by_voter = pg.state.engagement.toggle_vote(voter, item.id()).await?;
    let voted = pg.repositories.items.voted_by(voter, &[item.id()]).await?;
    let retracted = pg.state.engagement.toggle_vote(owner, item.id()).await?;
    let stored = pg.repositories.items.find_by_id(item.id()).await?;

    assert_eq!((by_owner.voted, by_owner.vote_count), (true, 1));
    assert_eq!((by_voter.voted, by_voter.vote_count), (true, 2));
    assert_eq!(voted, vec![item.id()]);
    assert_eq!((retracted.voted, retracted.vote_count), (false, 1));
    assert_eq!(stored.map(|found| found.vote_count()), Some(1));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_comments_drop_out_of_counts(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let board = pg.board(owner, "Talk", false).await?;
    let item = pg
        .state
        .items
        .create_item(owner, CreateItemRequest::new(board.id(), "Discuss"))
        .await?;

    let kept = pg.state.engagement.add_comment(owner, item.id(), "keep").await?;
    let dropped = pg.state.engagement.add_comment(owner, item.id(), "drop").await?;
    pg.state.engagement.delete_comment(owner, dropped.id()).await?;
    let counts = pg.repositories.comments.count_for_items(&[item.id()]).await?;

    assert_eq!(counts.get(&item.id()).copied(), Some(1));
    assert!(pg.repositories.comments.find_by_id(kept.id()).await?.is_some());
    assert!(pg.repositories.comments.find_by_id(dropped.id()).await?.is_none());
    Ok(())
}
