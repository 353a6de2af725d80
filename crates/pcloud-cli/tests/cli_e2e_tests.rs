//! CLI end-to-end tests that invoke the compiled `pcloud` binary.
//!
//! None of these reach a server: each scenario fails, or finishes, before
//! the first request.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pcloud() -> Command {
    let mut cmd = Command::cargo_bin("pcloud").unwrap();
    cmd.env_remove("PCLOUD_CONFIG").env("NO_COLOR", "1");
    cmd
}

/// A config pointing at an unroutable server, with credentials.
fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let storage = dir.path().join("library");
    fs::write(
        &path,
        format!(
            "[server]\nhostname = \"http://127.0.0.1:9\"\n\n[auth]\nusername = \"alice\"\npassword = \"pw\"\n\n[storage]\npath = {:?}\n",
            storage
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_help_exits_zero() {
    pcloud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("attach"));
}

#[test]
fn test_missing_config_installs_sample_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    pcloud()
        .args(["-c", path.to_str().unwrap(), "sync"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sample was written"));

    let sample = fs::read_to_string(&path).unwrap();
    assert!(sample.contains("[server]"));
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.toml");

    pcloud()
        .env("PCLOUD_CONFIG", &path)
        .arg("sync")
        .assert()
        .code(1);

    assert!(path.is_file());
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nhostname = \"ftp://x\"\n\n[storage]\npath = \"/tmp/x\"\n").unwrap();

    pcloud()
        .args(["-c", path.to_str().unwrap(), "sync"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("server.hostname"));
}

#[test]
fn test_wav_only_attach_fails_before_network() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let wav = dir.path().join("take.wav");
    fs::write(&wav, b"RIFF").unwrap();

    pcloud()
        .args(["-y", "-c", config.to_str().unwrap(), "attach", "p1", wav.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unsupported type `wav`"))
        .stderr(predicate::str::contains("No attachment left to upload"));
}

#[test]
fn test_prompt_without_terminal_is_interrupted() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    pcloud()
        .args(["-c", config.to_str().unwrap(), "create-album", "Easter"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interrupted"));
}
