//! Filesystem layer for the PartitionCloud mirror
//!
//! Provides the file-safe name sanitizer used for every path segment,
//! I/O helpers that carry the offending path in their errors, and
//! TOML configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod name;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use name::file_safe_name;
pub use path::expand_home;
