//! Configuration types for the PartitionCloud mirror.
//!
//! The configuration file is parsed once at startup into a validated
//! [`Config`]; missing or malformed keys fail here rather than deep inside
//! a sync run.

pub mod alias;
pub mod config;
pub mod error;
pub mod layout;

pub use alias::{AliasRule, AliasRules};
pub use config::{
    AttachmentsConfig, AuthConfig, Config, Credentials, ServerConfig, StorageConfig,
    default_config_path, install_sample, SAMPLE_CONFIG,
};
pub use error::{Error, Result};
pub use layout::LayoutMode;
