//! Destination paths for downloaded documents

use std::path::PathBuf;

use pcloud_fs::file_safe_name;
use pcloud_meta::LayoutMode;

use crate::model::Partition;

/// Computes where a document lives under the storage root.
///
/// Built once with the storage root and layout; [`resolve`](Self::resolve)
/// is pure and never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
    layout: LayoutMode,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, layout: LayoutMode) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Destination of `partition`, owned by `album` and optionally `group`.
    ///
    /// Group and album names are sanitized again here so the path never
    /// depends on the caller having done it.
    pub fn resolve(&self, group: Option<&str>, album: &str, partition: &Partition) -> PathBuf {
        let file_name = format!("{}.pdf", partition.file_stem());

        match self.layout {
            LayoutMode::Flat => self.root.join(file_name),
            LayoutMode::Nested => {
                let mut path = self.root.clone();
                if let Some(group) = group {
                    path.push(file_safe_name(group));
                }
                path.push(file_safe_name(album));
                path.push(file_name);
                path
            }
        }
    }
}
