//! Command implementations for pcloud-cli
//!
//! Every command takes the catalog as `&dyn CatalogClient`, so the tests
//! run them against an in-memory catalog.

pub mod attach;
pub mod attachments;
pub mod create_album;
pub mod sync;
pub mod upload;

pub use attach::run_attach;
pub use attachments::run_attachments;
pub use create_album::run_create_album;
pub use sync::run_sync;
pub use upload::run_upload;
