//! End-to-end flow from a configuration file to files on disk
//!
//! config file -> validated Config -> SyncEngine over an in-memory catalog
//! -> storage tree, then the attachment workflow with the configured aliases.

use std::fs;

use pcloud_core::{
    AttachmentMatcher, ConfirmPolicy, ConfirmationGate, FileRef, SyncEngine, SyncSettings, Uploader,
};
use pcloud_meta::{Config, LayoutMode};
use pcloud_test_utils::{FakeCatalog, ScriptedPrompter, TestLibrary, Upload};
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
[server]
hostname = "https://pc.example.org/"

[auth]
username = "alice"
password = "secret"
albums = ["static-1"]

[storage]
path = "STORAGE"
layout = "nested"

[attachments.aliases]
Piano = ["*piano*", "*accomp*"]
Drums = ["*.mid"]
"#;

fn load_config(library: &TestLibrary) -> Config {
    let path = library.root().join("config.toml");
    let storage = library.root().join("scores");
    fs::write(
        &path,
        CONFIG.replace("STORAGE", &storage.to_string_lossy().replace('\\', "/")),
    )
    .unwrap();
    Config::load(&path).unwrap()
}

fn catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_album("abc", "Répertoire: 2026", &[("p1", "Alpha", ""), ("p2", "Beta", "J. Doe")])
        .with_hidden_album("m1", "Messe", &[("p3", "Kyrie", "")])
        .with_group("g1", "Chorale", &["m1"])
        .with_hidden_album("static-1", "Archives", &[("p4", "Old/Song", "")])
}

#[test]
fn test_config_to_storage_tree() {
    let library = TestLibrary::new();
    let config = load_config(&library);
    assert_eq!(config.server.hostname, "https://pc.example.org");

    let catalog = catalog();
    let report = SyncEngine::new(&catalog, SyncSettings::from_config(&config))
        .run()
        .unwrap();

    assert_eq!(
        library
            .files()
            .into_iter()
            .filter(|f| f.starts_with("scores/"))
            .collect::<Vec<_>>(),
        vec![
            "scores/Archives/Old Song.pdf".to_string(),
            "scores/Chorale/Messe/Kyrie.pdf".to_string(),
            "scores/Répertoire 2026/Alpha.pdf".to_string(),
            "scores/Répertoire 2026/Beta - J. Doe.pdf".to_string(),
        ]
    );
    // listed albums, then static albums, then groups
    assert_eq!(catalog.fetches(), vec!["p1", "p2", "p4", "p3"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["downloaded"].as_array().unwrap().len(), 4);
}

#[test]
fn test_attach_with_configured_aliases() {
    let library = TestLibrary::new();
    let config = load_config(&library);
    let piano = library.write_file("media/Grand Piano take 2.mp3", b"id3");
    let drums = library.write_file("media/kit.mid", b"MThd");
    let other = library.write_file("media/solo.mp3", b"id3");

    let matcher = AttachmentMatcher::new(&config.attachments.aliases).unwrap();
    let files: Vec<FileRef> = [&piano, &drums, &other]
        .iter()
        .map(|p| FileRef::parse(&p.to_string_lossy()))
        .collect();
    let plan = matcher.plan("p1", &files);

    let catalog = FakeCatalog::new();
    let prompter = ScriptedPrompter::new(["y"]);
    let gate = ConfirmationGate::new(ConfirmPolicy::interactive(), &prompter);
    Uploader::new(&catalog, gate, config.credentials())
        .attach(&plan)
        .unwrap();

    let names: Vec<String> = catalog
        .uploads()
        .into_iter()
        .filter_map(|u| match u {
            Upload::Attachment { name, .. } => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["Piano", "Drums", "solo"]);
}

#[test]
fn test_flat_layout_from_config() {
    let library = TestLibrary::new();
    let config = load_config(&library);
    let catalog = catalog();

    let settings = SyncSettings::from_config(&config).with_layout(LayoutMode::Flat);
    SyncEngine::new(&catalog, settings).run().unwrap();

    library.assert_file_exists("scores/Alpha.pdf");
    library.assert_file_exists("scores/Kyrie.pdf");
    library.assert_file_not_exists("scores/Chorale");
}
