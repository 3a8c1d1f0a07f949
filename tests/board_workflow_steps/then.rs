//! Then steps for board workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::board::domain::{BoardSettings, MemberRole};
use taskboard::item::domain::StatusLabel;

#[then(r#"the board slug is "{slug}""#)]
fn board_slug_is(world: &BoardWorld, slug: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    if board.slug().as_str() != slug {
        return Err(eyre::eyre!("expected slug {slug}, found {}", board.slug()));
    }
    Ok(())
}

#[then("the board uses the default settings")]
fn board_uses_default_settings(world: &BoardWorld) -> Result<(), eyre::Report> {
    let settings = world.board()?.settings();
    if settings != BoardSettings::default() {
        return Err(eyre::eyre!("unexpected settings {settings:?}"));
    }
    Ok(())
}

#[then("the board has exactly one owner membership")]
fn board_has_one_owner(world: &BoardWorld) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let members = run_async(world.repositories.boards.members(world.board()?.id()))?;
    match members.as_slice() {
        [only] if only.user_id() == owner && only.role() == MemberRole::Owner => Ok(()),
        other => Err(eyre::eyre!("expected a single owner row, found {other:?}")),
    }
}

#[then(r#""{title}" is the last card in column "{status}""#)]
fn last_card_in_column(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let item = world.item(&title)?;
    let view = world
        .view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view in scenario world"))?;
    let column = view
        .column(&StatusLabel::new(status.as_str())?)
        .ok_or_else(|| eyre::eyre!("unknown column {status}"))?;
    if column.card_ids().last() != Some(&item) {
        return Err(eyre::eyre!("{title} is not last in {status}"));
    }
    Ok(())
}

#[then(r#""{title}" is still in column "{status}""#)]
fn still_in_column(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let item = world.item(&title)?;
    let view = world
        .view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view in scenario world"))?;
    match view.locate(item) {
        Some((found, _)) if found.as_str() == status => Ok(()),
        other => Err(eyre::eyre!("expected {title} in {status}, found {other:?}")),
    }
}

#[then(r#"the stored status of "{title}" is "{status}""#)]
fn stored_status_is(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let item = world.item(&title)?;
    let stored = run_async(world.repositories.items.find_by_id(item))?
        .ok_or_else(|| eyre::eyre!("{title} is not stored"))?;
    if stored.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected stored status {status}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the move is rejected")]
fn move_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_move.as_ref() {
        Some(Err(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a rejected move, got {other:?}")),
    }
}
