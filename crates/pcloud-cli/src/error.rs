//! Error types for pcloud-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pcloud-core
    #[error(transparent)]
    Core(#[from] pcloud_core::Error),

    /// Error from pcloud-meta
    #[error(transparent)]
    Meta(#[from] pcloud_meta::Error),

    /// Error from pcloud-client
    #[error(transparent)]
    Client(#[from] pcloud_client::ClientError),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
