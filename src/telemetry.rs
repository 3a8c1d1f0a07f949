//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs a formatted `tracing` subscriber filtered by `directives`.
///
/// `RUST_LOG`, when set, takes precedence over `directives`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the directives are invalid or a
/// subscriber is already installed.
pub fn init_tracing(directives: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directives))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(TelemetryError::Install)
}
