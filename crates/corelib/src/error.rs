//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The ring was built without identifiers while the config forbids it.
    #[error("Ring operation failed: cannot build an empty ring (allow_empty = false)")]
    EmptyRing,
    /// Invalid ring configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// More distinct members were requested than the ring holds.
    #[error("Insufficient members: requested {requested}, available {available}")]
    InsufficientMembers { requested: usize, available: usize },
}
