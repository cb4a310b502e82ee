//! Error types for CLI detection and configuration.

/// Errors that can occur during detection or settings operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required path could not be determined.
    #[error("not found: {0}")]
    NotFound(String),

    /// An environment variable could not be read.
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The current platform is not supported.
    #[error("unsupported platform")]
    UnsupportedPlatform,

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary detection failed due to system error.
    #[error("binary detection error: {0}")]
    BinaryDetection(String),

    /// The settings store rejected a write.
    #[error("failed to persist setting '{key}': {reason}")]
    SettingsWrite {
        /// The setting key the write targeted.
        key: String,
        /// Why the underlying store rejected the write.
        reason: String,
    },

    /// The CLI's version output could not be parsed.
    #[error("unparseable version output: {0:?}")]
    VersionParse(String),

    /// Running the CLI to probe its version failed.
    #[error("version probe failed: {0}")]
    VersionProbe(String),
}

/// A specialized Result type for detection and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
