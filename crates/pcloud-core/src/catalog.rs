//! Catalog provider contract
//!
//! The core never speaks HTTP or parses markup itself; it drives a
//! [`CatalogClient`] that owns the session with the remote service.

use std::io::Write;
use std::path::{Path, PathBuf};

use pcloud_meta::Credentials;

use crate::model::{AlbumPage, AlbumRef, AttachmentRef, AuthOutcome, GroupPage, Overview};
use crate::{Error, Result};

/// File types accepted as partition attachments.
pub const ATTACHMENT_EXTENSIONS: &[&str] = &["mp3", "mid"];

/// A score document to add to an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionUpload {
    pub file: PathBuf,
    pub name: String,
    pub author: String,
    /// Free text shown with the score, usually lyrics
    pub body: String,
}

/// Remote catalog operations consumed by the sync engine and the upload
/// workflows.
///
/// Implementations keep whatever session state they need; calls block
/// until the remote answers. Any failure is returned as-is and aborts
/// the caller.
pub trait CatalogClient {
    /// Log in. Rejected credentials are reported as
    /// [`AuthOutcome::Rejected`], not as an error.
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome>;

    /// Groups and albums visible to the current identity.
    fn list_top_level(&self) -> Result<Overview>;

    /// Title and ordered documents of an album.
    fn album(&self, album_id: &str) -> Result<AlbumPage>;

    /// Title and ordered albums of a group.
    fn group(&self, group_id: &str) -> Result<GroupPage>;

    /// Stream a document body into `sink`, returning the number of bytes.
    fn stream_partition(&self, partition_id: &str, sink: &mut dyn Write) -> Result<u64>;

    /// Attachments currently attached to a document.
    fn list_attachments(&self, partition_id: &str) -> Result<Vec<AttachmentRef>>;

    /// Create an album; the returned reference carries the new identifier.
    fn create_album(&self, name: &str) -> Result<AlbumRef>;

    /// Add a document to an album.
    fn upload_partition(&self, album_id: &str, upload: &PartitionUpload) -> Result<()>;

    /// Attach a media file to a document under `name`.
    ///
    /// Implementations must call [`check_attachment`] before sending.
    fn upload_attachment(&self, partition_id: &str, file: &Path, name: &str) -> Result<()>;
}

/// Lowercased extension of `path`, if any.
pub fn attachment_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Ensure `path` has an allowed attachment extension.
pub fn check_attachment(path: &Path) -> Result<String> {
    let extension = attachment_extension(path).unwrap_or_default();
    if ATTACHMENT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(Error::UnsupportedAttachment {
            path: path.to_path_buf(),
            extension,
        })
    }
}

/// Log in with `credentials`, turning a rejection into an error.
pub fn authenticate(catalog: &dyn CatalogClient, credentials: &Credentials) -> Result<()> {
    match catalog.authenticate(credentials)? {
        AuthOutcome::Accepted => {
            tracing::debug!(user = %credentials.username, "authenticated");
            Ok(())
        }
        AuthOutcome::Rejected => Err(Error::AuthenticationRejected {
            username: credentials.username.clone(),
        }),
    }
}

/// Credentials for `operation`, or an error if none are configured.
pub fn require_credentials<'a>(
    credentials: Option<&'a Credentials>,
    operation: &str,
) -> Result<&'a Credentials> {
    credentials.ok_or_else(|| Error::MissingCredentials {
        operation: operation.to_string(),
    })
}
