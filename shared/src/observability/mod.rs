//! Observability utilities for logging and upstream call tracing
//!
//! Provides centralized observability setup for the gateway binary

pub mod logging;
pub mod upstream;

pub use logging::*;
pub use upstream::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Unknown log format: {0}")]
    UnknownFormat(String),

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
