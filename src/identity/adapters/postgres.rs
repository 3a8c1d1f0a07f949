//! `PostgreSQL` user directory.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{PersistenceFailure, PgPool, run_blocking};
use crate::identity::{
    domain::{TeamId, UserId, UserSummary},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

mod schema {
    diesel::table! {
        /// Users owned by the authentication system.
        users (id) {
            /// User identifier.
            id -> Uuid,
            /// Display name.
            #[max_length = 255]
            name -> Varchar,
            /// Email address.
            #[max_length = 255]
            email -> Varchar,
        }
    }

    diesel::table! {
        /// Team rosters owned by the authentication system.
        team_user (team_id, user_id) {
            /// Team identifier.
            team_id -> Uuid,
            /// Member user.
            user_id -> Uuid,
        }
    }

    diesel::joinable!(team_user -> users (user_id));
    diesel::allow_tables_to_appear_in_same_query!(team_user, users);
}

use schema::{team_user, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct UserRow {
    id: uuid::Uuid,
    name: String,
    email: String,
}

/// `PostgreSQL`-backed user directory.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a directory from a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<UserRow> for UserSummary {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::from_uuid(row.id), row.name, row.email)
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_many(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<UserSummary>> {
        let keys: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        run_blocking(&self.pool, move |connection| {
            let rows = users::table
                .filter(users::id.eq_any(keys))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserDirectoryError::persistence)?;
            Ok(rows.into_iter().map(UserSummary::from).collect())
        })
        .await
    }

    async fn team_users(&self, team: TeamId) -> UserDirectoryResult<Vec<UserSummary>> {
        let team_key = team.into_inner();
        run_blocking(&self.pool, move |connection| {
            let rows = users::table
                .inner_join(team_user::table)
                .filter(team_user::team_id.eq(team_key))
                .order(users::name.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserDirectoryError::persistence)?;
            Ok(rows.into_iter().map(UserSummary::from).collect())
        })
        .await
    }
}
