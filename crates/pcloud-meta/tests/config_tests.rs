//! Loading and validating configuration files

use std::fs;
use std::path::{Path, PathBuf};

use pcloud_meta::{Config, Error, LayoutMode, SAMPLE_CONFIG, install_sample};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

const FULL: &str = r#"
[server]
hostname = "https://scores.example.org/"

[auth]
username = "alice"
password = "secret"
albums = ["abc", "def"]
groups = ["g1"]

[storage]
path = "/srv/scores"
layout = "flat"

[attachments.aliases]
Piano = ["*.mp3"]
Drums = ["*.mid"]
"#;

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), FULL);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.server.hostname, "https://scores.example.org");
    assert_eq!(config.auth.albums, vec!["abc".to_string(), "def".to_string()]);
    assert_eq!(config.auth.groups, vec!["g1".to_string()]);
    assert_eq!(config.storage.path, PathBuf::from("/srv/scores"));
    assert_eq!(config.storage.layout, LayoutMode::Flat);

    let creds = config.credentials().unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "secret");

    let names: Vec<_> = config.attachments.aliases.iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Piano".to_string(), "Drums".to_string()]);
}

#[test]
fn test_load_minimal_config_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        "[server]\nhostname = \"http://localhost:5000\"\n\n[storage]\npath = \"/tmp/x\"\n",
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.storage.layout, LayoutMode::Nested);
    assert!(config.credentials().is_none());
    assert!(config.auth.albums.is_empty());
    assert!(config.attachments.aliases.is_empty());
}

#[test]
fn test_empty_username_means_anonymous() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        "[server]\nhostname = \"http://h\"\n[auth]\nusername = \"  \"\npassword = \"\"\n[storage]\npath = \"/tmp/x\"\n",
    );

    let config = Config::load(&path).unwrap();
    assert!(config.credentials().is_none());
}

#[test]
fn test_missing_file_is_config_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { path: p } if p == path));
}

#[rstest]
#[case::empty_host("[server]\nhostname = \"\"\n[storage]\npath = \"/x\"\n", "server.hostname")]
#[case::no_scheme("[server]\nhostname = \"scores.org\"\n[storage]\npath = \"/x\"\n", "server.hostname")]
#[case::scheme_only("[server]\nhostname = \"https://\"\n[storage]\npath = \"/x\"\n", "server.hostname")]
#[case::space_in_host("[server]\nhostname = \"http://ex ample\"\n[storage]\npath = \"/x\"\n", "server.hostname")]
#[case::other_scheme("[server]\nhostname = \"ftp://scores.org\"\n[storage]\npath = \"/x\"\n", "server.hostname")]
#[case::no_password(
    "[server]\nhostname = \"http://h\"\n[auth]\nusername = \"bob\"\n[storage]\npath = \"/x\"\n",
    "auth.password"
)]
#[case::empty_storage("[server]\nhostname = \"http://h\"\n[storage]\npath = \"\"\n", "storage.path")]
#[case::empty_pattern(
    "[server]\nhostname = \"http://h\"\n[storage]\npath = \"/x\"\n[attachments.aliases]\nPiano = [\"\"]\n",
    "attachments.aliases"
)]
fn test_invalid_values_fail_at_load(#[case] content: &str, #[case] key: &str) {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), content);

    match Config::load(&path).unwrap_err() {
        Error::InvalidValue { key: k, .. } => assert_eq!(k, key),
        other => panic!("expected InvalidValue for {key}, got {other:?}"),
    }
}

#[test]
fn test_unknown_layout_fails_at_load() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        "[server]\nhostname = \"http://h\"\n[storage]\npath = \"/x\"\nlayout = \"tree\"\n",
    );

    assert!(matches!(Config::load(&path).unwrap_err(), Error::Fs(_)));
}

#[test]
fn test_missing_server_section_fails_at_load() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "[storage]\npath = \"/x\"\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_install_sample_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partitioncloud").join("config.toml");

    install_sample(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONFIG);
}

#[test]
fn test_install_sample_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), FULL);

    install_sample(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), FULL);
}
