//! Board repository behaviour against `PostgreSQL`.

use super::helpers::{PgHarness, harness};
use rstest::rstest;
use taskboard::board::{
    domain::{BoardSettings, BoardStatus, MemberRole},
    services::{BoardServiceError, CreateBoardRequest},
};
use taskboard::identity::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_records_owner_membership(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;

    let board = pg.board(owner, "Roadmap", false).await?;
    let members = pg.repositories.boards.members(board.id()).await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id(), owner);
    assert_eq!(members[0].role(), MemberRole::Owner);
    assert_eq!(board.settings(), BoardSettings::default());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_slugs_are_rejected(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let name = format!("Dup {}", UserId::new().into_inner().simple());

    pg.state
        .boards
        .create_board(owner, CreateBoardRequest::new(name.clone(), 1))
        .await?;
    let second = pg
        .state
        .boards
        .create_board(owner, CreateBoardRequest::new(name, 1))
        .await;

    assert!(matches!(second, Err(BoardServiceError::Validation(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn private_boards_are_listed_for_members_only(
    #[from(harness)] pg: PgHarness,
) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let member = pg.register("Mia Member").await?;
    let stranger = pg.register("Sam Stranger").await?;
    let board = pg.board(owner, "Secret", true).await?;
    pg.state
        .members
        .invite_members(owner, board.id(), &[member, member])
        .await?;

    let for_member = pg.repositories.boards.list_visible(member, 0, 500).await?;
    let for_stranger = pg.repositories.boards.list_visible(stranger, 0, 500).await?;

    assert!(for_member.iter().any(|found| found.id() == board.id()));
    assert!(!for_stranger.iter().any(|found| found.id() == board.id()));
    assert_eq!(
        pg.repositories.boards.membership(board.id(), member).await?,
        Some(MemberRole::Member)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invitations_are_idempotent_and_removable(
    #[from(harness)] pg: PgHarness,
) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let member = pg.register("Mia Member").await?;
    let board = pg.board(owner, "Team", false).await?;

    let first = pg.state.members.invite_members(owner, board.id(), &[member]).await?;
    let second = pg.state.members.invite_members(owner, board.id(), &[member]).await?;
    let removed = pg.state.members.remove_member(owner, board.id(), member).await?;
    let again = pg.state.members.remove_member(owner, board.id(), member).await?;

    assert_eq!((first, second), (1, 0));
    assert!(removed);
    assert!(!again);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archive_then_delete_hides_the_board(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let owner = pg.register("Olivia Owner").await?;
    let board = pg.board(owner, "Old", false).await?;

    let archived = pg.state.boards.archive_board(owner, board.id()).await?;
    let reloaded = pg.repositories.boards.find_by_id(board.id()).await?;
    pg.state.boards.delete_board(owner, board.id()).await?;
    let gone = pg.repositories.boards.find_by_id(board.id()).await?;

    assert_eq!(archived.status(), BoardStatus::Archived);
    assert_eq!(reloaded.map(|found| found.status()), Some(BoardStatus::Archived));
    assert!(gone.is_none());
    Ok(())
}
