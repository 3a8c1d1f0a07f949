//! Taskboard HTTP server.
//!
//! ```text
//! taskboard --database-url postgres://localhost/taskboard --apply-schema
//! taskboard --in-memory --bind 0.0.0.0:8080
//! ```

use clap::Parser;
use taskboard::app::{self, AppError};
use taskboard::config::ServerConfig;
use taskboard::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ServerConfig::parse();
    init_tracing(&config.log)?;
    app::run(config).await
}
