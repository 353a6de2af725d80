//! Listing records exchanged with the catalog provider
//!
//! Names in these records are exactly what the provider displayed; they
//! are sanitized only when a [`Container`](crate::Container) is built.

use pcloud_fs::file_safe_name;

/// Group entry from the overview listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub id: String,
    pub name: Option<String>,
    /// Albums shown with the group, when the listing already includes them
    pub albums: Option<Vec<AlbumRef>>,
}

impl GroupRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            albums: None,
        }
    }

    pub fn with_albums(mut self, albums: Vec<AlbumRef>) -> Self {
        self.albums = Some(albums);
        self
    }
}

/// Album entry from a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRef {
    pub id: String,
    pub name: Option<String>,
}

impl AlbumRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// An album known only by identifier; its name comes from its page.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// Document entry from an album page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRef {
    pub id: String,
    pub name: String,
    /// Empty when the document has no author
    pub author: String,
}

impl PartitionRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
        }
    }
}

/// Media attached to a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    pub id: String,
    pub extension: String,
    pub title: String,
}

/// Top-level listing visible to the current identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    pub groups: Vec<GroupRef>,
    pub albums: Vec<AlbumRef>,
}

/// Contents of one album page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPage {
    pub title: String,
    pub partitions: Vec<PartitionRef>,
}

/// Contents of one group page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPage {
    pub title: String,
    pub albums: Vec<AlbumRef>,
}

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted,
    Rejected,
}

/// A document inside an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub id: String,
    pub name: String,
    pub author: String,
    /// Identifier of the owning album
    pub album_id: String,
}

impl Partition {
    pub fn new(reference: PartitionRef, album_id: impl Into<String>) -> Self {
        Self {
            id: reference.id,
            name: reference.name,
            author: reference.author,
            album_id: album_id.into(),
        }
    }

    /// File name of the document without the `.pdf` extension.
    ///
    /// `"<name> - <author>"` when an author is set, otherwise the
    /// sanitized name. Path separators never survive, and an empty result
    /// falls back to the identifier.
    pub fn file_stem(&self) -> String {
        let stem = if self.author.is_empty() {
            file_safe_name(&self.name)
        } else {
            format!("{} - {}", self.name, self.author)
                .chars()
                .filter(|c| !matches!(c, '/' | '\\' | '\0'))
                .collect::<String>()
                .trim()
                .to_string()
        };

        if stem.is_empty() {
            file_safe_name(&self.id)
        } else {
            stem
        }
    }
}
