//! HTTP catalog client for PartitionCloud servers
//!
//! [`PartitionCloudClient`] implements [`pcloud_core::CatalogClient`] on
//! top of a blocking `reqwest` session with a cookie store. Pages are
//! parsed by the pure functions in [`markup`], which never touch the
//! network and are tested against saved HTML.

pub mod client;
pub mod error;
pub mod markup;

pub use client::PartitionCloudClient;
pub use error::{ClientError, Result};
