//! Workflows that modify the remote catalog
//!
//! Each workflow validates locally, asks the [`ConfirmationGate`], and
//! only then logs in and sends. A declined prompt means no network call
//! at all.

use pcloud_meta::Credentials;

use crate::attachment::AttachmentPlan;
use crate::catalog::{self, CatalogClient, PartitionUpload, require_credentials};
use crate::confirm::ConfirmationGate;
use crate::model::{AlbumRef, AttachmentRef};
use crate::{Error, Result};

/// Runs upload workflows against a catalog.
pub struct Uploader<'a> {
    catalog: &'a dyn CatalogClient,
    gate: ConfirmationGate<'a>,
    credentials: Option<Credentials>,
}

impl<'a> Uploader<'a> {
    pub fn new(
        catalog: &'a dyn CatalogClient,
        gate: ConfirmationGate<'a>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            catalog,
            gate,
            credentials,
        }
    }

    /// Upload every accepted file of `plan`, in order.
    ///
    /// # Errors
    ///
    /// - [`Error::NothingToUpload`] if every file was rejected
    /// - [`Error::MissingCredentials`] if no identity is configured
    /// - [`Error::Declined`] if the operator refuses the mapping
    /// - the first authentication or transport failure
    pub fn attach(&self, plan: &AttachmentPlan) -> Result<usize> {
        if plan.is_empty() {
            return Err(Error::NothingToUpload {
                rejected: plan.rejected.len(),
            });
        }
        let credentials = require_credentials(self.credentials.as_ref(), "attach")?;

        let prompt = format!(
            "{}Upload {} attachment(s)?",
            plan.summary(),
            plan.accepted.len()
        );
        self.gate.require(&prompt, true)?;

        catalog::authenticate(self.catalog, credentials)?;
        for item in &plan.accepted {
            self.catalog
                .upload_attachment(&plan.partition_id, &item.path, &item.name)?;
            tracing::info!(
                partition = %plan.partition_id,
                path = %item.path.display(),
                name = %item.name,
                "attachment uploaded"
            );
        }
        Ok(plan.accepted.len())
    }

    /// Add a score document to `album_id`.
    pub fn upload_partition(&self, album_id: &str, upload: &PartitionUpload) -> Result<()> {
        if !upload.file.is_file() {
            return Err(Error::MissingFile {
                path: upload.file.clone(),
            });
        }
        let credentials = require_credentials(self.credentials.as_ref(), "upload")?;

        let prompt = format!(
            "Upload {} as `{}` to album {}?",
            upload.file.display(),
            upload.name,
            album_id
        );
        self.gate.require(&prompt, true)?;

        catalog::authenticate(self.catalog, credentials)?;
        self.catalog.upload_partition(album_id, upload)?;
        tracing::info!(album = album_id, name = %upload.name, "partition uploaded");
        Ok(())
    }

    /// Create an album named `name`.
    pub fn create_album(&self, name: &str) -> Result<AlbumRef> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::catalog("album name must not be empty"));
        }
        let credentials = require_credentials(self.credentials.as_ref(), "create-album")?;

        self.gate.require(&format!("Create album `{name}`?"), true)?;

        catalog::authenticate(self.catalog, credentials)?;
        let album = self.catalog.create_album(name)?;
        tracing::info!(album = %album.id, name, "album created");
        Ok(album)
    }
}

/// Attachments of a partition, logging in first when credentials exist.
pub fn list_attachments(
    catalog: &dyn CatalogClient,
    credentials: Option<&Credentials>,
    partition_id: &str,
) -> Result<Vec<AttachmentRef>> {
    if let Some(credentials) = credentials {
        catalog::authenticate(catalog, credentials)?;
    }
    let attachments = catalog.list_attachments(partition_id)?;
    tracing::debug!(partition = partition_id, count = attachments.len(), "listed attachments");
    Ok(attachments)
}
