//! Error types for gateway operations.

/// Errors that can occur during gateway operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The gateway answered with an error. Propagated to the caller
    /// untouched; user-visible handling is the caller's decision.
    #[error("gateway error {code}: {message}")]
    Remote {
        /// Stable error code reported by the gateway.
        code: String,
        /// Human-readable message reported by the gateway.
        message: String,
    },

    /// A local precondition failed before any request was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// The HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The gateway base URL is malformed.
    #[error("invalid gateway URL: {0}")]
    InvalidUrl(String),

    /// A response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred reading local input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;
