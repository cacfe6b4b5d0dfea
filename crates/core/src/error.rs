//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by collaborators and surfaced to the engine
///
/// Extraction misses and empty result sets are NOT errors; they are
/// represented by `None`/empty collections and always have a defined
/// fallback reply. Only true I/O failures from collaborators end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// A backing store (catalog, FAQ, order, history, social links) failed
    #[error("store error: {0}")]
    Store(String),

    /// The generative fallback failed or timed out
    #[error("generative error: {0}")]
    Generative(String),

    /// The incoming message failed validation before rule evaluation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration problem detected at startup
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a store error from any displayable cause
    pub fn store(cause: impl std::fmt::Display) -> Self {
        Error::Store(cause.to_string())
    }

    /// Create a generative error from any displayable cause
    pub fn generative(cause: impl std::fmt::Display) -> Self {
        Error::Generative(cause.to_string())
    }
}
