//! Command-line and environment configuration for the server binary.

use crate::item::domain::ColumnSet;
use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Server settings read from flags, falling back to environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", version, about = "Multi-tenant kanban board service")]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Address the HTTP listener binds to.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Maximum pooled database connections.
    #[arg(long, env = "TASKBOARD_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Comma-separated status columns in display order.
    #[arg(
        long,
        env = "TASKBOARD_COLUMNS",
        default_value = "todo,in-progress,done",
        value_parser = ColumnSet::parse
    )]
    pub columns: ColumnSet,

    /// Boards per page when listing.
    #[arg(long, env = "TASKBOARD_PAGE_SIZE", default_value_t = 5)]
    pub page_size: usize,

    /// Log filter directives, e.g. `info` or `taskboard=debug`.
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    pub log: String,

    /// Apply the bundled schema before serving.
    #[arg(long)]
    pub apply_schema: bool,

    /// Serve from in-memory stores instead of `PostgreSQL`.
    #[arg(long)]
    pub in_memory: bool,
}

/// Where the server keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// Process-local stores, lost on exit.
    InMemory,
    /// `PostgreSQL` at the given URL.
    Postgres(String),
}

/// Errors raised while interpreting configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a database URL nor in-memory mode was given.
    #[error("DATABASE_URL is required unless --in-memory is set")]
    MissingDatabaseUrl,
}

impl ServerConfig {
    /// Resolves the storage mode; `--in-memory` wins over a database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no storage is
    /// configured.
    pub fn storage(&self) -> Result<StorageMode, ConfigError> {
        if self.in_memory {
            return Ok(StorageMode::InMemory);
        }
        self.database_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .map(StorageMode::Postgres)
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}
