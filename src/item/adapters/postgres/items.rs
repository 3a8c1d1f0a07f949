//! `PostgreSQL` repository implementation for board items and votes.

use super::{
    models::{ItemRow, NewVoteRow},
    schema::{board_item_votes, board_items},
};
use crate::board::domain::BoardId;
use crate::db::{PersistenceFailure, PgPool, run_blocking};
use crate::identity::domain::UserId;
use crate::item::{
    domain::{BoardItem, ItemId, PersistedBoardItemData, Priority, StatusLabel, VoteOutcome},
    ports::{BoardItemRepository, BoardItemRepositoryError, BoardItemRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed board item repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardItemRepository {
    pool: PgPool,
}

impl PostgresBoardItemRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<DieselError> for BoardItemRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl BoardItemRepository for PostgresBoardItemRepository {
    async fn store(&self, item: &BoardItem) -> BoardItemRepositoryResult<()> {
        let item_id = item.id();
        let row = to_row(item)?;

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(board_items::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardItemRepositoryError::DuplicateItem(item_id)
                    }
                    _ => BoardItemRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, item: &BoardItem) -> BoardItemRepositoryResult<()> {
        let item_id = item.id();
        let status = item.status().as_str().to_owned();
        let updated_at = item.updated_at();
        let deleted_at = item.deleted_at();

        run_blocking(&self.pool, move |connection| {
            let updated =
                diesel::update(board_items::table.filter(board_items::id.eq(item_id.into_inner())))
                    .set((
                        board_items::status.eq(status),
                        board_items::updated_at.eq(updated_at),
                        board_items::deleted_at.eq(deleted_at),
                    ))
                    .execute(connection)?;
            if updated == 0 {
                return Err(BoardItemRepositoryError::NotFound(item_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ItemId) -> BoardItemRepositoryResult<Option<BoardItem>> {
        run_blocking(&self.pool, move |connection| {
            let row = board_items::table
                .filter(board_items::id.eq(id.into_inner()))
                .filter(board_items::deleted_at.is_null())
                .select(ItemRow::as_select())
                .first::<ItemRow>(connection)
                .optional()?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn list_for_board(&self, board: BoardId) -> BoardItemRepositoryResult<Vec<BoardItem>> {
        run_blocking(&self.pool, move |connection| {
            let rows = board_items::table
                .filter(board_items::board_id.eq(board.into_inner()))
                .filter(board_items::deleted_at.is_null())
                .order((board_items::created_at.desc(), board_items::position.desc()))
                .select(ItemRow::as_select())
                .load::<ItemRow>(connection)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn toggle_vote(
        &self,
        item: ItemId,
        user: UserId,
        voted_at: DateTime<Utc>,
    ) -> BoardItemRepositoryResult<VoteOutcome> {
        let item_uuid = item.into_inner();
        let user_uuid = user.into_inner();

        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, BoardItemRepositoryError, _>(|tx| {
                let existing: i64 = board_items::table
                    .filter(board_items::id.eq(item_uuid))
                    .count()
                    .get_result(tx)?;
                if existing == 0 {
                    return Err(BoardItemRepositoryError::NotFound(item));
                }

                let retracted = diesel::delete(
                    board_item_votes::table
                        .filter(board_item_votes::board_item_id.eq(item_uuid))
                        .filter(board_item_votes::user_id.eq(user_uuid)),
                )
                .execute(tx)?;
                let voted = retracted == 0;
                if voted {
                    diesel::insert_into(board_item_votes::table)
                        .values(&NewVoteRow {
                            board_item_id: item_uuid,
                            user_id: user_uuid,
                            created_at: voted_at,
                        })
                        .execute(tx)?;
                }

                let total: i64 = board_item_votes::table
                    .filter(board_item_votes::board_item_id.eq(item_uuid))
                    .count()
                    .get_result(tx)?;
                let stored_total =
                    i32::try_from(total).map_err(BoardItemRepositoryError::persistence)?;
                diesel::update(board_items::table.filter(board_items::id.eq(item_uuid)))
                    .set(board_items::votes.eq(stored_total))
                    .execute(tx)?;

                let vote_count =
                    u32::try_from(total).map_err(BoardItemRepositoryError::persistence)?;
                Ok(VoteOutcome { voted, vote_count })
            })
        })
        .await
    }

    async fn voted_by(
        &self,
        user: UserId,
        items: &[ItemId],
    ) -> BoardItemRepositoryResult<Vec<ItemId>> {
        let item_ids: Vec<uuid::Uuid> = items.iter().map(|id| id.into_inner()).collect();

        run_blocking(&self.pool, move |connection| {
            let voted = board_item_votes::table
                .filter(board_item_votes::user_id.eq(user.into_inner()))
                .filter(board_item_votes::board_item_id.eq_any(item_ids))
                .select(board_item_votes::board_item_id)
                .load::<uuid::Uuid>(connection)?;
            Ok(voted.into_iter().map(ItemId::from_uuid).collect())
        })
        .await
    }
}

fn to_row(item: &BoardItem) -> BoardItemRepositoryResult<ItemRow> {
    let votes = i32::try_from(item.vote_count()).map_err(BoardItemRepositoryError::persistence)?;
    Ok(ItemRow {
        id: item.id().into_inner(),
        board_id: item.board_id().into_inner(),
        creator_id: item.creator_id().into_inner(),
        title: item.title().to_owned(),
        description: item.description().map(str::to_owned),
        status: item.status().as_str().to_owned(),
        priority: item.priority().as_str().to_owned(),
        position: item.position(),
        votes,
        created_at: item.created_at(),
        updated_at: item.updated_at(),
        deleted_at: item.deleted_at(),
    })
}

fn row_to_item(row: ItemRow) -> BoardItemRepositoryResult<BoardItem> {
    let status = StatusLabel::new(&row.status).map_err(BoardItemRepositoryError::persistence)?;
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(BoardItemRepositoryError::persistence)?;
    let vote_count = u32::try_from(row.votes).map_err(BoardItemRepositoryError::persistence)?;

    Ok(BoardItem::from_persisted(PersistedBoardItemData {
        id: ItemId::from_uuid(row.id),
        board_id: BoardId::from_uuid(row.board_id),
        creator_id: UserId::from_uuid(row.creator_id),
        title: row.title,
        description: row.description,
        status,
        priority,
        position: row.position,
        vote_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
        deleted_at: row.deleted_at,
    }))
}
