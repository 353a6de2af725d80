//! Configuration and policy shared by every command

use std::path::PathBuf;

use pcloud_core::ConfirmPolicy;
use pcloud_meta::{Config, default_config_path, install_sample};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
    pub policy: ConfirmPolicy,
}

impl Context {
    /// Load the configuration named on the command line, or the default
    /// one.
    ///
    /// A missing file is replaced by the sample configuration and reported
    /// as an error, so nothing runs against placeholder settings.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };

        let config = match Config::load(&config_path) {
            Ok(config) => config,
            Err(pcloud_meta::Error::ConfigNotFound { path }) => {
                install_sample(&path)?;
                return Err(CliError::user(format!(
                    "No configuration found; a sample was written to {}\nEdit it for your server and run again.",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let policy = if cli.yes {
            ConfirmPolicy::non_interactive()
        } else {
            ConfirmPolicy::interactive()
        };

        Ok(Self {
            config_path,
            config,
            policy,
        })
    }
}
