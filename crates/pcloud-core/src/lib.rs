//! Core of the PartitionCloud mirror
//!
//! This crate implements everything that does not depend on the wire
//! format of the remote service:
//!
//! - **SyncEngine**: mirror every visible album and group to the storage root
//! - **PathResolver**: deterministic destination path of each document
//! - **AttachmentMatcher**: map local media files to attachment names
//! - **ConfirmationGate**: operator approval before any remote mutation
//! - **Uploader**: attachment, document and album creation workflows
//!
//! # Architecture
//!
//! The remote catalog is reached only through the [`CatalogClient`] trait,
//! implemented over HTTP by `pcloud-client` and in memory by
//! `pcloud-test-utils`:
//!
//! ```text
//!                    pcloud-cli
//!                        |
//!        +---------------+---------------+
//!        |                               |
//!   pcloud-core  <---- CatalogClient ---- pcloud-client
//!        |
//!   +----+------+
//!   |           |
//! pcloud-fs  pcloud-meta
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pcloud_core::{SyncEngine, SyncSettings};
//!
//! let settings = SyncSettings::from_config(&config);
//! let report = SyncEngine::new(&client, settings).run()?;
//! println!("{} new documents", report.downloaded.len());
//! ```

pub mod attachment;
pub mod catalog;
pub mod confirm;
pub mod container;
pub mod error;
pub mod model;
pub mod resolver;
pub mod sync;
pub mod upload;

pub use attachment::{
    AttachmentMatcher, AttachmentPlan, FileRef, PlannedAttachment, RejectReason, Rejection,
};
pub use catalog::{ATTACHMENT_EXTENSIONS, CatalogClient, PartitionUpload, check_attachment};
pub use confirm::{ConfirmPolicy, ConfirmationGate, Prompter};
pub use container::{Album, Container, Group};
pub use error::{Error, Result};
pub use model::{
    AlbumPage, AlbumRef, AttachmentRef, AuthOutcome, GroupPage, GroupRef, Overview, Partition,
    PartitionRef,
};
pub use resolver::PathResolver;
pub use sync::{SyncEngine, SyncReport, SyncRun, SyncSettings};
pub use upload::{Uploader, list_attachments};
