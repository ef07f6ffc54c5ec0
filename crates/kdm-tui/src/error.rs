//! Top-level error for the `kdm` binary

use thiserror::Error;

use crate::cli::OneShotError;
use crate::config::ConfigError;
use crate::logging::LoggingError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    OneShot(#[from] OneShotError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
