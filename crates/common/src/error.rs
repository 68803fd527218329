//! Configuration error types

use thiserror::Error;

/// Errors raised while assembling client configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the configuration Error
pub type Result<T> = std::result::Result<T, Error>;
