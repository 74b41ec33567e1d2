//! Error types for praisal-client

use thiserror::Error;

/// Result type alias for praisal-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in praisal-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The session-token file could not be read or written.
    #[error("session store error: {0}")]
    SessionStore(#[from] std::io::Error),

    /// No per-user configuration directory exists on this platform.
    #[error("no configuration directory available for the session store")]
    NoConfigDir,
}
