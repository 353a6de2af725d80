//! [`TestLibrary`]: temporary storage root for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use pcloud_meta::LayoutMode;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary storage root with assertion helpers.
pub struct TestLibrary {
    temp_dir: TempDir,
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLibrary {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a configuration file pointing at this library and return its
    /// path. `auth` is inserted verbatim under `[auth]`.
    pub fn write_config(&self, hostname: &str, auth: &str, layout: LayoutMode) -> PathBuf {
        let path = self.root().join("config.toml");
        let storage = self.root().join("library");
        let config = format!(
            "[server]\nhostname = \"{hostname}\"\n\n[auth]\n{auth}\n\n[storage]\npath = {storage:?}\nlayout = \"{layout}\"\n"
        );
        fs::write(&path, config).unwrap();
        path
    }

    /// Relative paths of every file below the root, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut out: Vec<String> = WalkDir::new(self.root())
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let rel = entry.path().strip_prefix(self.root()).unwrap();
                rel.to_string_lossy().replace('\\', "/")
            })
            .collect();
        out.sort();
        out
    }

    /// Assert that `path` (relative to the root) is a file.
    ///
    /// # Panics
    /// Panics with a descriptive message if it is not.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.is_file(),
            "Expected file to exist: {}\nFiles: {:?}",
            full_path.display(),
            self.files()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Write `content` at `path` (relative to the root), creating parents.
    pub fn write_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    pub fn read(&self, path: &str) -> Vec<u8> {
        fs::read(self.root().join(path)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_lists_nested_files_sorted() {
        let library = TestLibrary::new();
        library.write_file("Choir/Mass/Kyrie.pdf", b"x");
        library.write_file("Alpha.pdf", b"x");
        fs::create_dir_all(library.root().join("empty/dir")).unwrap();

        assert_eq!(
            library.files(),
            vec!["Alpha.pdf".to_string(), "Choir/Mass/Kyrie.pdf".to_string()]
        );
    }
}
