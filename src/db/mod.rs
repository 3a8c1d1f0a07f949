//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Diesel connections are blocking, so every unit of work runs on the tokio
//! blocking pool against a connection checked out from an r2d2 pool.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by every adapter.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the board system tables.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-18-000000_create_board_tables/up.sql");

/// SQL dropping the board system tables.
pub const DROP_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-18-000000_create_board_tables/down.sql");

/// Repository errors that can wrap an opaque persistence failure.
pub trait PersistenceFailure: Sized {
    /// Wraps a persistence-layer error.
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// # Errors
///
/// Returns the closure's error, or a persistence error when no connection can
/// be checked out or the blocking task fails to complete.
pub async fn run_blocking<F, T, E>(pool: &PgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: PersistenceFailure + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(E::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(E::persistence)?
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns the r2d2 error when the pool cannot be initialised.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, diesel::r2d2::PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}

/// Applies the bundled schema. Statements are idempotent.
///
/// # Errors
///
/// Returns the Diesel error raised by the first failing statement.
pub fn apply_schema(connection: &mut PgConnection) -> diesel::QueryResult<()> {
    connection.batch_execute(SCHEMA_SQL)
}
