//! Shared utilities for the data gateway workspace

// Re-export common dependencies
pub use thiserror;
pub use tracing;

pub mod observability;
