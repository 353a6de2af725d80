//! Error types for pcloud-client

/// Result type for pcloud-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to a PartitionCloud server
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// A page did not contain an expected element
    #[error("Unexpected page layout at {url}: missing {element}")]
    Markup { url: String, element: String },

    /// Reading a local file to send failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response body broke off or could not be written out
    #[error("Failed to transfer body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Connection, TLS or protocol failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<ClientError> for pcloud_core::Error {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { .. } | ClientError::Markup { .. } => {
                pcloud_core::Error::catalog(err.to_string())
            }
            other => pcloud_core::Error::transport(other),
        }
    }
}
