//! Repository wiring and the server entry point.

use crate::board::{
    adapters::{memory::InMemoryBoardRepository, postgres::PostgresBoardRepository},
    ports::BoardRepository,
};
use crate::config::{ConfigError, ServerConfig, StorageMode};
use crate::db::{self, PgPool};
use crate::http::{AppState, router};
use crate::identity::{
    adapters::{memory::InMemoryUserDirectory, postgres::PostgresUserDirectory},
    ports::UserDirectory,
};
use crate::item::{
    adapters::{
        memory::{InMemoryBoardItemRepository, InMemoryCommentRepository},
        postgres::{PostgresBoardItemRepository, PostgresCommentRepository},
    },
    ports::{BoardItemRepository, CommentRepository},
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Port implementations shared by every service.
#[derive(Clone)]
pub struct Repositories {
    /// User lookups.
    pub users: Arc<dyn UserDirectory>,
    /// Boards and memberships.
    pub boards: Arc<dyn BoardRepository>,
    /// Board items and votes.
    pub items: Arc<dyn BoardItemRepository>,
    /// Item comments.
    pub comments: Arc<dyn CommentRepository>,
    /// Item tasks.
    pub tasks: Arc<dyn TaskRepository>,
}

impl Repositories {
    /// Process-local stores over `users`.
    #[must_use]
    pub fn in_memory(users: InMemoryUserDirectory) -> Self {
        Self {
            users: Arc::new(users),
            boards: Arc::new(InMemoryBoardRepository::new()),
            items: Arc::new(InMemoryBoardItemRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
        }
    }

    /// `PostgreSQL` stores sharing `pool`.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserDirectory::new(pool.clone())),
            boards: Arc::new(PostgresBoardRepository::new(pool.clone())),
            items: Arc::new(PostgresBoardItemRepository::new(pool.clone())),
            comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
        }
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration was incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A pooled connection could not be checked out.
    #[error("failed to check out connection: {0}")]
    Connection(#[from] diesel::r2d2::Error),
    /// The bundled schema failed to apply.
    #[error("failed to apply schema: {0}")]
    Schema(#[from] diesel::result::Error),
    /// A blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// Binding or serving failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The log subscriber could not be installed.
    #[error(transparent)]
    Telemetry(#[from] crate::telemetry::TelemetryError),
}

/// Builds the repositories selected by `config`, applying the schema first
/// when requested.
///
/// # Errors
///
/// Returns [`AppError`] when storage is unconfigured, the pool cannot be
/// built, or the schema fails to apply.
pub async fn build_repositories(config: &ServerConfig) -> Result<Repositories, AppError> {
    match config.storage()? {
        StorageMode::InMemory => {
            warn!("serving from in-memory stores; data is lost on exit");
            Ok(Repositories::in_memory(InMemoryUserDirectory::new()))
        }
        StorageMode::Postgres(url) => {
            let pool = db::build_pool(&url, config.pool_size)?;
            if config.apply_schema {
                let schema_pool = pool.clone();
                tokio::task::spawn_blocking(move || -> Result<(), AppError> {
                    let mut connection = schema_pool.get()?;
                    db::apply_schema(&mut connection)?;
                    Ok(())
                })
                .await??;
                info!("schema applied");
            }
            Ok(Repositories::postgres(&pool))
        }
    }
}

/// Serves the API until interrupted.
///
/// # Errors
///
/// Returns [`AppError`] when startup fails or the listener errors.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let repositories = build_repositories(&config).await?;
    let state = AppState::new(&repositories, &config.columns, config.page_size);
    let listener = TcpListener::bind(config.bind).await?;
    info!(address = %config.bind, columns = config.columns.len(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
