//! Error types for pcloud-fs

use std::path::PathBuf;

/// Result type for pcloud-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pcloud-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Cannot expand `~`: no home directory for the current user")]
    NoHomeDir,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
