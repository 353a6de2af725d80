//! Groups and albums as lazily loaded containers
//!
//! Both kinds load their children from the catalog on first use and never
//! reload them during a run. The sync engine drives them only through the
//! [`Container`] trait.

use pcloud_fs::file_safe_name;

use crate::Result;
use crate::catalog::CatalogClient;
use crate::model::{AlbumRef, GroupRef, Partition};
use crate::sync::SyncRun;

/// Shared capability of groups and albums.
pub trait Container {
    /// Remote identifier.
    fn id(&self) -> &str;

    /// Sanitized display name, once known.
    fn name(&self) -> Option<&str>;

    /// Whether the children have been loaded.
    fn is_loaded(&self) -> bool;

    /// Fetch the children (and the name, if still unknown) from the
    /// catalog. Does nothing once loaded.
    fn load(&mut self, catalog: &dyn CatalogClient) -> Result<()>;

    /// Load if needed, then download every missing document below this
    /// container.
    fn update(&mut self, run: &mut SyncRun<'_>) -> Result<()>;
}

fn sanitized(name: Option<String>) -> Option<String> {
    name.map(|n| file_safe_name(&n))
}

/// Directory name for a container: its name, or its identifier when the
/// name sanitizes to nothing.
fn dir_name(id: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => file_safe_name(id),
    }
}

/// An album and its documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    id: String,
    name: Option<String>,
    partitions: Option<Vec<Partition>>,
}

impl Album {
    /// An album known by identifier only.
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            partitions: None,
        }
    }

    pub fn from_ref(reference: AlbumRef) -> Self {
        Self {
            id: reference.id,
            name: sanitized(reference.name),
            partitions: None,
        }
    }

    /// Loaded documents, empty before [`Container::load`].
    pub fn partitions(&self) -> &[Partition] {
        self.partitions.as_deref().unwrap_or(&[])
    }

    fn dir_name(&self) -> String {
        dir_name(&self.id, self.name.as_deref())
    }

    /// Download the documents of this album, with `group` bound as owner.
    pub(crate) fn sync_into(&mut self, group: Option<&str>, run: &mut SyncRun<'_>) -> Result<()> {
        self.load(run.catalog())?;

        let album = self.dir_name();
        for partition in self.partitions() {
            run.fetch(group, &album, partition)?;
        }
        Ok(())
    }
}

impl Container for Album {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_loaded(&self) -> bool {
        self.partitions.is_some()
    }

    fn load(&mut self, catalog: &dyn CatalogClient) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        let page = catalog.album(&self.id)?;
        if self.name.is_none() {
            self.name = Some(file_safe_name(&page.title));
        }
        tracing::debug!(album = %self.id, count = page.partitions.len(), "loaded album");

        self.partitions = Some(
            page.partitions
                .into_iter()
                .map(|p| Partition::new(p, self.id.clone()))
                .collect(),
        );
        Ok(())
    }

    fn update(&mut self, run: &mut SyncRun<'_>) -> Result<()> {
        self.sync_into(None, run)
    }
}

/// A group and its albums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: String,
    name: Option<String>,
    albums: Option<Vec<Album>>,
}

impl Group {
    /// A group known by identifier only.
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            albums: None,
        }
    }

    /// Build from a listing entry; albums shown in the listing count as
    /// loaded.
    pub fn from_ref(reference: GroupRef) -> Self {
        Self {
            id: reference.id,
            name: sanitized(reference.name),
            albums: reference
                .albums
                .map(|albums| albums.into_iter().map(Album::from_ref).collect()),
        }
    }

    /// Loaded albums, empty before [`Container::load`].
    pub fn albums(&self) -> &[Album] {
        self.albums.as_deref().unwrap_or(&[])
    }

    /// Whether `album_id` is one of the albums already known to belong here.
    pub fn owns(&self, album_id: &str) -> bool {
        self.albums().iter().any(|a| a.id == album_id)
    }
}

impl Container for Group {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_loaded(&self) -> bool {
        self.albums.is_some()
    }

    fn load(&mut self, catalog: &dyn CatalogClient) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        let page = catalog.group(&self.id)?;
        if self.name.is_none() {
            self.name = Some(file_safe_name(&page.title));
        }
        tracing::debug!(group = %self.id, count = page.albums.len(), "loaded group");

        self.albums = Some(page.albums.into_iter().map(Album::from_ref).collect());
        Ok(())
    }

    fn update(&mut self, run: &mut SyncRun<'_>) -> Result<()> {
        self.load(run.catalog())?;

        let group = dir_name(&self.id, self.name.as_deref());
        if let Some(albums) = self.albums.as_mut() {
            for album in albums.iter_mut() {
                album.sync_into(Some(&group), run)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_from_ref_sanitizes_name() {
        let album = Album::from_ref(AlbumRef::new("a1", "Noël: 2024!"));
        assert_eq!(album.name(), Some("Noël 2024"));
        assert!(!album.is_loaded());
    }

    #[test]
    fn test_group_from_ref_with_albums_is_loaded() {
        let group = Group::from_ref(
            GroupRef::new("g1", "Choir").with_albums(vec![AlbumRef::new("a1", "Mass")]),
        );
        assert!(group.is_loaded());
        assert!(group.owns("a1"));
        assert!(!group.owns("a2"));
    }

    #[test]
    fn test_unresolved_group_has_no_name() {
        let group = Group::unresolved("g1");
        assert_eq!(group.name(), None);
        assert!(group.albums().is_empty());
    }

    #[test]
    fn test_dir_name_falls_back_to_id() {
        assert_eq!(dir_name("abc-1", Some("")), "abc-1");
        assert_eq!(dir_name("abc-1", None), "abc-1");
        assert_eq!(dir_name("abc-1", Some("Mass")), "Mass");
    }
}
