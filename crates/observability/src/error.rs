//! Error types for observability crate

use thiserror::Error;

/// Errors raised while installing the tracing stack
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Exporter or subscriber could not be built
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// A global subscriber is already installed
    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
