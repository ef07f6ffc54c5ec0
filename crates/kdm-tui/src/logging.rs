//! Tracing subscriber setup
//!
//! The interactive UI owns the terminal, so it only logs when given a file.
//! One-shot commands log to stderr. Filtering follows `KDM_LOG`
//! (`EnvFilter` syntax).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KDM_LOG";

const DEFAULT_FILTER: &str = "warn,kdm=info,kdm_tui=info,kdm_core=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not install log subscriber: {0}")]
    Init(String),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send logs to `path`, truncating it
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}

/// Send logs to stderr
pub fn init_stderr_logging() -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}
