//! Error types for pcloud-meta

use std::path::PathBuf;

/// Result type for pcloud-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A key is present but its value is unusable
    #[error("Invalid configuration value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Unknown layout mode name
    #[error("Invalid layout mode: {mode} (expected `nested` or `flat`)")]
    InvalidLayout { mode: String },

    /// No per-user location to place the default config file
    #[error("Could not determine a configuration directory for the current user")]
    NoConfigDir,

    /// Filesystem error from pcloud-fs
    #[error(transparent)]
    Fs(#[from] pcloud_fs::Error),
}

impl Error {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
