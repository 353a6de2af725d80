//! Path helpers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths that do not start with `~` are returned unchanged.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(rest))
}
