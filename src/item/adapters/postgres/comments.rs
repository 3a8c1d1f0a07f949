//! `PostgreSQL` repository implementation for item comments.

use super::{models::CommentRow, schema::board_item_comments};
use crate::db::{PersistenceFailure, PgPool, run_blocking};
use crate::identity::domain::UserId;
use crate::item::{
    domain::{Comment, CommentId, ItemId, PersistedCommentData},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let comment_id = comment.id();
        let row = to_row(comment);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(board_item_comments::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        CommentRepositoryError::DuplicateComment(comment_id)
                    }
                    _ => CommentRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let comment_id = comment.id();
        let updated_at = comment.updated_at();
        let deleted_at = comment.deleted_at();

        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(
                board_item_comments::table
                    .filter(board_item_comments::id.eq(comment_id.into_inner())),
            )
            .set((
                board_item_comments::updated_at.eq(updated_at),
                board_item_comments::deleted_at.eq(deleted_at),
            ))
            .execute(connection)
            .map_err(CommentRepositoryError::persistence)?;
            if updated == 0 {
                return Err(CommentRepositoryError::NotFound(comment_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        run_blocking(&self.pool, move |connection| {
            let row = board_item_comments::table
                .filter(board_item_comments::id.eq(id.into_inner()))
                .filter(board_item_comments::deleted_at.is_null())
                .select(CommentRow::as_select())
                .first::<CommentRow>(connection)
                .optional()
                .map_err(CommentRepositoryError::persistence)?;
            Ok(row.map(row_to_comment))
        })
        .await
    }

    async fn count_for_items(
        &self,
        items: &[ItemId],
    ) -> CommentRepositoryResult<HashMap<ItemId, usize>> {
        let item_ids: Vec<uuid::Uuid> = items.iter().map(|id| id.into_inner()).collect();

        run_blocking(&self.pool, move |connection| {
            let rows = board_item_comments::table
                .filter(board_item_comments::board_item_id.eq_any(item_ids))
                .filter(board_item_comments::deleted_at.is_null())
                .group_by(board_item_comments::board_item_id)
                .select((board_item_comments::board_item_id, count_star()))
                .load::<(uuid::Uuid, i64)>(connection)
                .map_err(CommentRepositoryError::persistence)?;
            rows.into_iter()
                .map(|(item, count)| {
                    usize::try_from(count)
                        .map(|total| (ItemId::from_uuid(item), total))
                        .map_err(CommentRepositoryError::persistence)
                })
                .collect()
        })
        .await
    }
}

fn to_row(comment: &Comment) -> CommentRow {
    CommentRow {
        id: comment.id().into_inner(),
        board_item_id: comment.item_id().into_inner(),
        author_id: comment.author_id().into_inner(),
        content: comment.content().to_owned(),
        created_at: comment.created_at(),
        updated_at: comment.updated_at(),
        deleted_at: comment.deleted_at(),
    }
}

fn row_to_comment(row: CommentRow) -> Comment {
    Comment::from_persisted(PersistedCommentData {
        id: CommentId::from_uuid(row.id),
        item_id: ItemId::from_uuid(row.board_item_id),
        author_id: UserId::from_uuid(row.author_id),
        content: row.content,
        created_at: row.created_at,
        updated_at: row.updated_at,
        deleted_at: row.deleted_at,
    })
}
