//! User directory and team roster lookups against `PostgreSQL`.

use super::helpers::{PgHarness, harness};
use rstest::rstest;
use taskboard::board::services::CreateBoardRequest;
use taskboard::identity::domain::{TeamId, UserId};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_users_are_listed_by_name(#[from(harness)] pg: PgHarness) -> eyre::Result<()> {
    let team = TeamId::new();
    let zed = pg.register("Zed Zimmer").await?;
    let amy = pg.register("Amy Adler").await?;
    let elsewhere = pg.register("Eli Elsewhere").await?;
    pg.join_team(team, zed).await?;
    pg.join_team(team, amy).await?;
    pg.join_team(TeamId::new(), elsewhere).await?;

    let listed: Vec<UserId> = pg
        .repositories
        .users
        .team_users(team)
        .await?
        .iter()
        .map(|user| user.id())
        .collect();

    assert_eq!(listed, [amy, zed]);
    assert!(pg.repositories.users.team_users(TeamId::new()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_detail_offers_uninvited_team_users(
    #[from(harness)] pg: PgHarness,
) -> eyre::Result<()> {
    let team = TeamId::new();
    let owner = pg.register("Olivia Owner").await?;
    let member = pg.register("Mia Member").await?;
    let candidate = pg.register("Carl Candidate").await?;
    for user in [owner, member, candidate] {
        pg.join_team(team, user).await?;
    }
    let board = pg
        .state
        .boards
        .create_board(owner, CreateBoardRequest::new("Team plan", 1).with_team(team))
        .await?;
    pg.state.members.invite_members(owner, board.id(), &[member]).await?;

    let detail = pg.state.detail.show_board(owner, board.id()).await?;

    let invitable: Vec<UserId> = detail.invitable_users.iter().map(|user| user.id()).collect();
    assert_eq!(invitable, [candidate]);
    Ok(())
}
