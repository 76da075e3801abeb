//! Error types for Stowage.

use thiserror::Error;

/// Result type alias for Stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a packing run.
///
/// An item that does not fit is never an error; it is reported in
/// [`PackingResult::unplaced`](crate::PackingResult::unplaced).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidGeometry(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
