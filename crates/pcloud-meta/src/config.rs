//! Configuration file model and validation

use std::fmt;
use std::path::{Path, PathBuf};

use pcloud_fs::{ConfigStore, expand_home, io};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::alias::AliasRules;
use crate::error::{Error, Result};
use crate::layout::LayoutMode;

/// Template written when no configuration file exists yet.
pub const SAMPLE_CONFIG: &str = include_str!("../sample-config.toml");

/// Remote server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL including scheme, without trailing slash once validated
    pub hostname: String,
}

/// Identity and statically configured collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Album identifiers mirrored even without listing permission
    #[serde(default)]
    pub albums: Vec<String>,
    /// Group identifiers mirrored even without listing permission
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Local storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub layout: LayoutMode,
}

/// Attachment upload settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsConfig {
    #[serde(default)]
    pub aliases: AliasRules,
}

/// The validated configuration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub attachments: AttachmentsConfig,
}

/// Login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load and validate the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, so the
    /// caller can install [`SAMPLE_CONFIG`] there.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let config: Config = ConfigStore::new().load(path)?;
        let config = config.validate()?;
        tracing::debug!(path = %path.display(), host = %config.server.hostname, "loaded configuration");
        Ok(config)
    }

    /// Validate and normalize a parsed configuration.
    ///
    /// Trims the trailing slash from the hostname, expands `~` in the
    /// storage path and treats an empty username as anonymous access.
    pub fn validate(mut self) -> Result<Self> {
        let hostname = self.server.hostname.trim().trim_end_matches('/').to_string();
        if hostname.is_empty() {
            return Err(Error::invalid("server.hostname", "must not be empty"));
        }
        let url = Url::parse(&hostname)
            .map_err(|e| Error::invalid("server.hostname", format!("`{hostname}`: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid(
                "server.hostname",
                format!("`{hostname}` must start with http:// or https://"),
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(Error::invalid("server.hostname", format!("`{hostname}` has no host")));
        }
        self.server.hostname = hostname;

        let username = self
            .auth
            .username
            .take()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        if username.is_some() && self.auth.password.as_deref().unwrap_or("").is_empty() {
            return Err(Error::invalid("auth.password", "required when a username is set"));
        }
        self.auth.username = username;

        if self.storage.path.as_os_str().is_empty() {
            return Err(Error::invalid("storage.path", "must not be empty"));
        }
        self.storage.path = expand_home(&self.storage.path)?;

        for rule in self.attachments.aliases.iter() {
            if rule.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(Error::invalid(
                    "attachments.aliases",
                    format!("`{}` has an empty pattern", rule.name),
                ));
            }
        }

        Ok(self)
    }

    /// Credentials for logging in, if a username is configured.
    pub fn credentials(&self) -> Option<Credentials> {
        let username = self.auth.username.as_ref()?;
        Some(Credentials::new(
            username.clone(),
            self.auth.password.clone().unwrap_or_default(),
        ))
    }
}

/// Default location of the configuration file for the current user.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("partitioncloud").join("config.toml"))
        .ok_or(Error::NoConfigDir)
}

/// Write [`SAMPLE_CONFIG`] to `path` unless a file is already there.
pub fn install_sample(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    io::write_atomic(path, SAMPLE_CONFIG.as_bytes())?;
    tracing::info!(path = %path.display(), "installed sample configuration");
    Ok(())
}
