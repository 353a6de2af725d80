//! Mirroring of the remote catalog to the storage root

mod engine;
mod report;

pub use engine::{SyncEngine, SyncRun, SyncSettings};
pub use report::SyncReport;
