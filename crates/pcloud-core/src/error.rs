//! Error types for pcloud-core

use std::path::PathBuf;

/// Result type for pcloud-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pcloud-core operations
///
/// Every variant is fatal for the operation that raised it; nothing in the
/// core retries or skips past a failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server refused the configured credentials
    #[error("Authentication rejected for user `{username}`")]
    AuthenticationRejected { username: String },

    /// An operation that mutates the remote catalog was run anonymously
    #[error("`{operation}` requires a username and password in the configuration")]
    MissingCredentials { operation: String },

    /// The catalog provider answered with something unusable
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Transport-level failure reported by the catalog provider
    #[error("Catalog request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Attachment file type outside the allow-list
    #[error("Unsupported attachment type `{extension}` for {path}")]
    UnsupportedAttachment { path: PathBuf, extension: String },

    /// Local file to upload does not exist
    #[error("File not found: {path}")]
    MissingFile { path: PathBuf },

    /// Alias pattern could not be compiled
    #[error("Invalid pattern `{pattern}` for alias `{alias}`: {reason}")]
    InvalidPattern {
        alias: String,
        pattern: String,
        reason: String,
    },

    /// Every file of an attachment batch was rejected
    #[error("No attachment left to upload ({rejected} rejected)")]
    NothingToUpload { rejected: usize },

    /// The operator declined the confirmation prompt
    #[error("Cancelled: nothing was sent")]
    Declined,

    /// The confirmation prompt was interrupted before an answer
    #[error("Prompt interrupted")]
    Interrupted,

    /// Filesystem error from pcloud-fs
    #[error(transparent)]
    Fs(#[from] pcloud_fs::Error),

    /// Configuration error from pcloud-meta
    #[error(transparent)]
    Meta(#[from] pcloud_meta::Error),
}

impl Error {
    /// Create a catalog error with the given message
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Wrap a transport error raised by a catalog provider
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }
}
