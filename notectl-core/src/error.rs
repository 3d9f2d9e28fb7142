/// Structured error types for notectl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (notectl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notectl-core operations
#[derive(Error, Debug)]
pub enum NotectlError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML
    #[error("Invalid config at {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for notectl-core operations
pub type Result<T> = std::result::Result<T, NotectlError>;

impl NotectlError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
