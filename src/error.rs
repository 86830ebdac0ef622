//! Startup errors of the `eitherway` binary.
//!
//! `main` prints one of these and exits with status 1. Failures inside a
//! pipeline are values in an [`Either`](crate::Either) and never become an `AppError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
