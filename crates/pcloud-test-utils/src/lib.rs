//! Shared test utilities for the PartitionCloud mirror workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`catalog`]: [`FakeCatalog`], an in-memory catalog that records every call
//! - [`prompt`]: [`ScriptedPrompter`] with canned answers
//! - [`library`]: [`TestLibrary`] temporary storage root with assertions

pub mod catalog;
pub mod library;
pub mod prompt;

pub use catalog::{FakeCatalog, Upload};
pub use library::TestLibrary;
pub use prompt::ScriptedPrompter;
