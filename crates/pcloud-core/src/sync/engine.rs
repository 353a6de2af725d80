//! SyncEngine implementation
//!
//! The engine authenticates (when credentials are configured), builds the
//! working set of albums and groups, then walks it in order and downloads
//! every document whose destination does not exist yet.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use pcloud_fs::io;
use pcloud_meta::{Config, Credentials, LayoutMode};

use super::report::SyncReport;
use crate::Result;
use crate::catalog::{self, CatalogClient};
use crate::container::{Album, Container, Group};
use crate::model::Partition;
use crate::resolver::PathResolver;

/// Inputs of a sync run, taken from the validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Identity to log in with; anonymous runs only see static identifiers
    pub credentials: Option<Credentials>,
    /// Album identifiers mirrored in addition to the listing
    pub albums: Vec<String>,
    /// Group identifiers mirrored in addition to the listing
    pub groups: Vec<String>,
    pub storage_root: PathBuf,
    pub layout: LayoutMode,
}

impl SyncSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: config.credentials(),
            albums: config.auth.albums.clone(),
            groups: config.auth.groups.clone(),
            storage_root: config.storage.path.clone(),
            layout: config.storage.layout,
        }
    }

    /// Override the configured layout.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }
}

/// Engine for mirroring the remote catalog
///
/// A run is strictly sequential and aborts on the first failure. Files
/// written before the failure stay on disk; the next run skips them.
pub struct SyncEngine<'a> {
    catalog: &'a dyn CatalogClient,
    settings: SyncSettings,
    resolver: PathResolver,
}

impl<'a> SyncEngine<'a> {
    pub fn new(catalog: &'a dyn CatalogClient, settings: SyncSettings) -> Self {
        let resolver = PathResolver::new(settings.storage_root.clone(), settings.layout);
        Self {
            catalog,
            settings,
            resolver,
        }
    }

    /// Run a full sync.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while authenticating, listing,
    /// creating directories or streaming a document.
    pub fn run(&self) -> Result<SyncReport> {
        let mut working_set = self.working_set()?;
        tracing::debug!(containers = working_set.len(), "built working set");

        let mut run = SyncRun::new(self.catalog, &self.resolver);
        for container in working_set.iter_mut() {
            container.update(&mut run)?;
        }

        let report = run.finish();
        tracing::info!(
            downloaded = report.downloaded.len(),
            skipped = report.skipped.len(),
            bytes = report.bytes,
            "sync complete"
        );
        Ok(report)
    }

    /// Albums first, then groups; listed entries before static ones.
    fn working_set(&self) -> Result<Vec<Box<dyn Container>>> {
        let mut albums = Vec::new();
        let mut groups = Vec::new();

        if let Some(credentials) = &self.settings.credentials {
            catalog::authenticate(self.catalog, credentials)?;

            let overview = self.catalog.list_top_level()?;
            tracing::debug!(
                albums = overview.albums.len(),
                groups = overview.groups.len(),
                "listed catalog"
            );
            groups.extend(overview.groups.into_iter().map(Group::from_ref));
            albums.extend(overview.albums.into_iter().map(Album::from_ref));
        }

        groups.extend(self.settings.groups.iter().map(Group::unresolved));
        albums.extend(self.settings.albums.iter().map(Album::unresolved));

        // Ownership is only known once a group's albums are loaded
        let mut groups = dedupe(groups);
        for group in groups.iter_mut() {
            group.load(self.catalog)?;
        }
        let albums: Vec<Album> = dedupe(albums)
            .into_iter()
            .filter(|album| !groups.iter().any(|g| g.owns(album.id())))
            .collect();

        let mut set: Vec<Box<dyn Container>> = Vec::with_capacity(albums.len() + groups.len());
        set.extend(albums.into_iter().map(|a| Box::new(a) as Box<dyn Container>));
        set.extend(groups.into_iter().map(|g| Box::new(g) as Box<dyn Container>));
        Ok(set)
    }
}

fn dedupe<C: Container>(containers: Vec<C>) -> Vec<C> {
    let mut seen = HashSet::new();
    containers
        .into_iter()
        .filter(|c| seen.insert(c.id().to_string()))
        .collect()
}

/// State shared by containers while a sync run walks them.
pub struct SyncRun<'r> {
    catalog: &'r dyn CatalogClient,
    resolver: &'r PathResolver,
    report: SyncReport,
}

impl<'r> SyncRun<'r> {
    pub(crate) fn new(catalog: &'r dyn CatalogClient, resolver: &'r PathResolver) -> Self {
        Self {
            catalog,
            resolver,
            report: SyncReport::new(),
        }
    }

    pub fn catalog(&self) -> &'r dyn CatalogClient {
        self.catalog
    }

    /// Download `partition` unless its destination already exists.
    pub fn fetch(&mut self, group: Option<&str>, album: &str, partition: &Partition) -> Result<()> {
        let path = self.resolver.resolve(group, album, partition);

        if path.is_file() {
            tracing::debug!(path = %path.display(), "already present");
            self.report.record_skip(path);
            return Ok(());
        }

        let bytes = {
            let mut file = io::create_file(&path)?;
            let bytes = self.catalog.stream_partition(&partition.id, &mut file)?;
            file.flush()
                .map_err(|e| pcloud_fs::Error::io(&path, e))?;
            bytes
        };

        tracing::info!(path = %path.display(), bytes, "downloaded");
        self.report.record_download(path, bytes);
        Ok(())
    }

    pub(crate) fn finish(self) -> SyncReport {
        self.report
    }
}
