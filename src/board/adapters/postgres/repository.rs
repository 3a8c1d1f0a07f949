//! `PostgreSQL` repository implementation for boards and memberships.

use super::{
    models::{BoardRow, MemberRow, NewBoardRow},
    schema::{board_members, boards},
};
use crate::board::{
    domain::{
        Board, BoardId, BoardMember, BoardSettings, BoardSlug, BoardStatus, BoardTypeId,
        MemberRole, PersistedBoardData, TeamId,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::db::{PersistenceFailure, PgPool, run_blocking};
use crate::identity::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Unique index guarding board slugs.
const SLUG_UNIQUE_INDEX: &str = "idx_boards_slug_unique";

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: PgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<DieselError> for BoardRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn create_with_owner(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id();
        let slug = board.slug().clone();
        let board_row = to_new_row(board)?;
        let owner_row = MemberRow {
            board_id: board_id.into_inner(),
            user_id: board.creator_id().into_inner(),
            role: MemberRole::Owner.as_str().to_owned(),
            joined_at: board.created_at(),
        };

        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, BoardRepositoryError, _>(|tx| {
                diesel::insert_into(boards::table)
                    .values(&board_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                            if is_slug_unique_violation(info.as_ref()) =>
                        {
                            BoardRepositoryError::DuplicateSlug(slug.clone())
                        }
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            BoardRepositoryError::DuplicateBoard(board_id)
                        }
                        _ => BoardRepositoryError::persistence(err),
                    })?;

                diesel::insert_into(board_members::table)
                    .values(&owner_row)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id();
        let status = board.status().as_str().to_owned();
        let updated_at = board.updated_at();
        let deleted_at = board.deleted_at();

        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(boards::table.filter(boards::id.eq(board_id.into_inner())))
                .set((
                    boards::status.eq(status),
                    boards::updated_at.eq(updated_at),
                    boards::deleted_at.eq(deleted_at),
                ))
                .execute(connection)?;
            if updated == 0 {
                return Err(BoardRepositoryError::NotFound(board_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        run_blocking(&self.pool, move |connection| {
            let row = boards::table
                .filter(boards::id.eq(id.into_inner()))
                .filter(boards::deleted_at.is_null())
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn list_visible(
        &self,
        viewer: UserId,
        offset: usize,
        limit: usize,
    ) -> BoardRepositoryResult<Vec<Board>> {
        let viewer_id = viewer.into_inner();
        let offset_rows = i64::try_from(offset).map_err(BoardRepositoryError::persistence)?;
        let limit_rows = i64::try_from(limit).map_err(BoardRepositoryError::persistence)?;

        run_blocking(&self.pool, move |connection| {
            let memberships = board_members::table
                .filter(board_members::user_id.eq(viewer_id))
                .select(board_members::board_id);
            let rows = boards::table
                .filter(boards::deleted_at.is_null())
                .filter(
                    boards::is_private
                        .eq(false)
                        .or(boards::creator_id.eq(viewer_id))
                        .or(boards::id.eq_any(memberships)),
                )
                .order(boards::created_at.desc())
                .offset(offset_rows)
                .limit(limit_rows)
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)?;
            rows.into_iter().map(row_to_board).collect()
        })
        .await
    }

    async fn membership(
        &self,
        board: BoardId,
        user: UserId,
    ) -> BoardRepositoryResult<Option<MemberRole>> {
        run_blocking(&self.pool, move |connection| {
            let role = board_members::table
                .filter(board_members::board_id.eq(board.into_inner()))
                .filter(board_members::user_id.eq(user.into_inner()))
                .select(board_members::role)
                .first::<String>(connection)
                .optional()?;
            role.map(|value| {
                MemberRole::try_from(value.as_str()).map_err(BoardRepositoryError::persistence)
            })
            .transpose()
        })
        .await
    }

    async fn members(&self, board: BoardId) -> BoardRepositoryResult<Vec<BoardMember>> {
        run_blocking(&self.pool, move |connection| {
            let rows = board_members::table
                .filter(board_members::board_id.eq(board.into_inner()))
                .order(board_members::joined_at.asc())
                .select(MemberRow::as_select())
                .load::<MemberRow>(connection)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }

    async fn add_members(
        &self,
        board: BoardId,
        users: &[UserId],
        role: MemberRole,
        joined_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize> {
        let rows: Vec<MemberRow> = users
            .iter()
            .map(|user| MemberRow {
                board_id: board.into_inner(),
                user_id: user.into_inner(),
                role: role.as_str().to_owned(),
                joined_at,
            })
            .collect();

        run_blocking(&self.pool, move |connection| {
            ensure_board_exists(connection, board)?;
            if rows.is_empty() {
                return Ok(0);
            }
            let inserted = diesel::insert_into(board_members::table)
                .values(&rows)
                .on_conflict((board_members::board_id, board_members::user_id))
                .do_nothing()
                .execute(connection)?;
            Ok(inserted)
        })
        .await
    }

    async fn remove_member(&self, board: BoardId, user: UserId) -> BoardRepositoryResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(
                board_members::table
                    .filter(board_members::board_id.eq(board.into_inner()))
                    .filter(board_members::user_id.eq(user.into_inner())),
            )
            .execute(connection)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn ensure_board_exists(connection: &mut PgConnection, board: BoardId) -> BoardRepositoryResult<()> {
    let count: i64 = boards::table
        .filter(boards::id.eq(board.into_inner()))
        .count()
        .get_result(connection)?;
    if count == 0 {
        return Err(BoardRepositoryError::NotFound(board));
    }
    Ok(())
}

fn to_new_row(board: &Board) -> BoardRepositoryResult<NewBoardRow> {
    let settings =
        serde_json::to_value(board.settings()).map_err(BoardRepositoryError::persistence)?;

    Ok(NewBoardRow {
        id: board.id().into_inner(),
        name: board.name().to_owned(),
        slug: board.slug().as_str().to_owned(),
        description: board.description().map(str::to_owned),
        status: board.status().as_str().to_owned(),
        type_id: board.type_id().value(),
        creator_id: board.creator_id().into_inner(),
        team_id: board.team_id().map(TeamId::into_inner),
        is_private: board.is_private(),
        settings,
        created_at: board.created_at(),
        updated_at: board.updated_at(),
    })
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        id,
        name,
        slug,
        description,
        status: persisted_status,
        type_id: persisted_type_id,
        creator_id,
        team_id,
        is_private,
        settings: persisted_settings,
        created_at,
        updated_at,
        deleted_at,
    } = row;

    let status = BoardStatus::try_from(persisted_status.as_str())
        .map_err(BoardRepositoryError::persistence)?;
    let type_id =
        BoardTypeId::new(persisted_type_id).map_err(BoardRepositoryError::persistence)?;
    let settings = serde_json::from_value::<BoardSettings>(persisted_settings)
        .map_err(BoardRepositoryError::persistence)?;

    Ok(Board::from_persisted(PersistedBoardData {
        id: BoardId::from_uuid(id),
        name,
        slug: BoardSlug::from_persisted(slug),
        description,
        type_id,
        creator_id: UserId::from_uuid(creator_id),
        team_id: team_id.map(TeamId::from_uuid),
        is_private,
        settings,
        status,
        created_at,
        updated_at,
        deleted_at,
    }))
}

fn row_to_member(row: MemberRow) -> BoardRepositoryResult<BoardMember> {
    let role = MemberRole::try_from(row.role.as_str()).map_err(BoardRepositoryError::persistence)?;
    Ok(BoardMember::new(
        BoardId::from_uuid(row.board_id),
        UserId::from_uuid(row.user_id),
        role,
        row.joined_at,
    ))
}

fn is_slug_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == SLUG_UNIQUE_INDEX)
}
