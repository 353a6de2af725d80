//! [`FakeCatalog`]: in-memory [`CatalogClient`] for engine and workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pcloud_core::{
    AlbumPage, AlbumRef, AttachmentRef, AuthOutcome, CatalogClient, Error, GroupPage, GroupRef,
    Overview, PartitionRef, PartitionUpload, Result, check_attachment,
};
use pcloud_meta::Credentials;

/// A mutation recorded by [`FakeCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upload {
    Attachment {
        partition_id: String,
        file: PathBuf,
        name: String,
    },
    Partition {
        album_id: String,
        name: String,
        author: String,
    },
    Album {
        name: String,
    },
}

/// Catalog held in memory.
///
/// Built with the `with_*` methods, then used through `&self` like the
/// real client. Every call is counted and every login, content fetch and
/// upload is recorded for assertions.
///
/// # Example
///
/// ```rust
/// use pcloud_test_utils::FakeCatalog;
///
/// let catalog = FakeCatalog::new()
///     .with_album("abc", "Choir", &[("p1", "Alpha", ""), ("p2", "Beta", "J. Doe")]);
/// assert_eq!(catalog.network_calls(), 0);
/// ```
#[derive(Default)]
pub struct FakeCatalog {
    overview: Overview,
    albums: HashMap<String, AlbumPage>,
    groups: HashMap<String, GroupPage>,
    attachments: HashMap<String, Vec<AttachmentRef>>,
    reject_logins: bool,
    failing_stream: Option<String>,
    failing_album: Option<String>,
    next_album: Cell<usize>,

    calls: Cell<usize>,
    logins: RefCell<Vec<String>>,
    fetches: RefCell<Vec<String>>,
    uploads: RefCell<Vec<Upload>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an album visible in the listing.
    pub fn with_album(mut self, id: &str, title: &str, partitions: &[(&str, &str, &str)]) -> Self {
        self.overview.albums.push(AlbumRef::new(id, title));
        self.with_hidden_album(id, title, partitions)
    }

    /// Add an album reachable only by identifier.
    pub fn with_hidden_album(
        mut self,
        id: &str,
        title: &str,
        partitions: &[(&str, &str, &str)],
    ) -> Self {
        let partitions = partitions
            .iter()
            .map(|(pid, name, author)| PartitionRef::new(*pid, *name, *author))
            .collect();
        self.albums.insert(
            id.to_string(),
            AlbumPage {
                title: title.to_string(),
                partitions,
            },
        );
        self
    }

    /// Add a group visible in the listing, with its albums inlined as the
    /// overview page shows them. The albums need pages of their own.
    pub fn with_group(mut self, id: &str, name: &str, album_ids: &[&str]) -> Self {
        let albums = self.album_refs(album_ids);
        self.overview
            .groups
            .push(GroupRef::new(id, name).with_albums(albums));
        self.with_hidden_group(id, name, album_ids)
    }

    /// Add a group reachable only by identifier.
    pub fn with_hidden_group(mut self, id: &str, name: &str, album_ids: &[&str]) -> Self {
        let albums = self.album_refs(album_ids);
        self.groups.insert(
            id.to_string(),
            GroupPage {
                title: name.to_string(),
                albums,
            },
        );
        self
    }

    pub fn with_attachment(mut self, partition_id: &str, id: &str, extension: &str, title: &str) -> Self {
        self.attachments
            .entry(partition_id.to_string())
            .or_default()
            .push(AttachmentRef {
                id: id.to_string(),
                extension: extension.to_string(),
                title: title.to_string(),
            });
        self
    }

    /// Answer every login with [`AuthOutcome::Rejected`].
    pub fn rejecting_logins(mut self) -> Self {
        self.reject_logins = true;
        self
    }

    /// Fail the content stream of `partition_id` halfway through.
    pub fn failing_stream(mut self, partition_id: &str) -> Self {
        self.failing_stream = Some(partition_id.to_string());
        self
    }

    /// Fail every request for the page of `album_id`.
    pub fn failing_album(mut self, album_id: &str) -> Self {
        self.failing_album = Some(album_id.to_string());
        self
    }

    /// Body served for a partition.
    pub fn content_of(partition_id: &str) -> Vec<u8> {
        format!("%PDF-1.4 {partition_id}").into_bytes()
    }

    /// Total number of catalog calls made so far.
    pub fn network_calls(&self) -> usize {
        self.calls.get()
    }

    /// Usernames of every login attempt.
    pub fn logins(&self) -> Vec<String> {
        self.logins.borrow().clone()
    }

    /// Partition identifiers whose content was requested.
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.borrow().clone()
    }

    fn album_refs(&self, album_ids: &[&str]) -> Vec<AlbumRef> {
        album_ids
            .iter()
            .map(|id| match self.albums.get(*id) {
                Some(page) => AlbumRef::new(*id, page.title.clone()),
                None => AlbumRef::unnamed(*id),
            })
            .collect()
    }

    fn call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn connection_reset(what: &str) -> Error {
    Error::transport(io::Error::new(
        io::ErrorKind::ConnectionReset,
        format!("connection reset while fetching {what}"),
    ))
}

impl CatalogClient for FakeCatalog {
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome> {
        self.call();
        self.logins.borrow_mut().push(credentials.username.clone());
        Ok(if self.reject_logins {
            AuthOutcome::Rejected
        } else {
            AuthOutcome::Accepted
        })
    }

    fn list_top_level(&self) -> Result<Overview> {
        self.call();
        Ok(self.overview.clone())
    }

    fn album(&self, album_id: &str) -> Result<AlbumPage> {
        self.call();
        if self.failing_album.as_deref() == Some(album_id) {
            return Err(connection_reset(album_id));
        }
        self.albums
            .get(album_id)
            .cloned()
            .ok_or_else(|| Error::catalog(format!("album {album_id} not found")))
    }

    fn group(&self, group_id: &str) -> Result<GroupPage> {
        self.call();
        self.groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| Error::catalog(format!("group {group_id} not found")))
    }

    fn stream_partition(&self, partition_id: &str, sink: &mut dyn Write) -> Result<u64> {
        self.call();
        self.fetches.borrow_mut().push(partition_id.to_string());

        let body = Self::content_of(partition_id);
        if self.failing_stream.as_deref() == Some(partition_id) {
            sink.write_all(&body[..body.len() / 2])
                .map_err(Error::transport)?;
            return Err(connection_reset(partition_id));
        }

        sink.write_all(&body).map_err(Error::transport)?;
        Ok(body.len() as u64)
    }

    fn list_attachments(&self, partition_id: &str) -> Result<Vec<AttachmentRef>> {
        self.call();
        Ok(self.attachments.get(partition_id).cloned().unwrap_or_default())
    }

    fn create_album(&self, name: &str) -> Result<AlbumRef> {
        self.call();
        let n = self.next_album.get() + 1;
        self.next_album.set(n);
        self.uploads.borrow_mut().push(Upload::Album {
            name: name.to_string(),
        });
        Ok(AlbumRef::new(format!("new-album-{n}"), name))
    }

    fn upload_partition(&self, album_id: &str, upload: &PartitionUpload) -> Result<()> {
        self.call();
        self.uploads.borrow_mut().push(Upload::Partition {
            album_id: album_id.to_string(),
            name: upload.name.clone(),
            author: upload.author.clone(),
        });
        Ok(())
    }

    fn upload_attachment(&self, partition_id: &str, file: &Path, name: &str) -> Result<()> {
        self.call();
        check_attachment(file)?;
        self.uploads.borrow_mut().push(Upload::Attachment {
            partition_id: partition_id.to_string(),
            file: file.to_path_buf(),
            name: name.to_string(),
        });
        Ok(())
    }
}
