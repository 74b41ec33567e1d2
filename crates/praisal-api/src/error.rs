//! Error types for praisal-api

use thiserror::Error;

/// Result type alias for praisal-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while bootstrapping the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The listener could not bind or serve.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured web origin is not a valid header value.
    #[error("invalid web origin '{origin}'")]
    InvalidOrigin {
        /// The rejected origin string.
        origin: String,
    },
}
