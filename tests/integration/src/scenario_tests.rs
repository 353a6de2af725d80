//! Production scenarios for the sync engine
//!
//! Each test follows one operator story from start to finish.

use pcloud_core::{Error, SyncEngine, SyncSettings};
use pcloud_meta::{Credentials, LayoutMode};
use pcloud_test_utils::{FakeCatalog, TestLibrary};
use pretty_assertions::assert_eq;

fn settings(library: &TestLibrary) -> SyncSettings {
    SyncSettings {
        credentials: Some(Credentials::new("alice", "secret")),
        albums: Vec::new(),
        groups: Vec::new(),
        storage_root: library.root().to_path_buf(),
        layout: LayoutMode::Nested,
    }
}

/// Album "abc" with ("Alpha", "") and ("Beta", "J. Doe"): two files, and a
/// second run transfers nothing.
#[test]
fn scenario_first_sync_then_idle_sync() {
    let library = TestLibrary::new();
    let catalog = FakeCatalog::new().with_album("abc", "Choir", &[("p1", "Alpha", ""), ("p2", "Beta", "J. Doe")]);
    let engine = SyncEngine::new(&catalog, settings(&library));

    engine.run().unwrap();
    library.assert_file_exists("Choir/Alpha.pdf");
    library.assert_file_exists("Choir/Beta - J. Doe.pdf");
    let after_first = catalog.fetches().len();

    let second = engine.run().unwrap();
    assert_eq!(catalog.fetches().len(), after_first);
    assert_eq!(second.bytes, 0);
}

/// A broken connection mid-run leaves a partial file; the operator reruns
/// once the server is back and the rest is fetched.
#[test]
fn scenario_interrupted_run_resumes_on_next_run() {
    let library = TestLibrary::new();
    let albums: &[(&str, &str, &str)] = &[("p1", "One", ""), ("p2", "Two", ""), ("p3", "Three", "")];

    let flaky = FakeCatalog::new().with_album("abc", "Choir", albums).failing_stream("p2");
    let err = SyncEngine::new(&flaky, settings(&library)).run().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));

    let healthy = FakeCatalog::new().with_album("abc", "Choir", albums);
    let report = SyncEngine::new(&healthy, settings(&library)).run().unwrap();

    // the partial Two.pdf counts as present: no content comparison
    assert_eq!(healthy.fetches(), vec!["p3"]);
    assert_eq!(report.skipped.len(), 2);
    library.assert_file_exists("Choir/Three.pdf");
}

/// Switching an existing library from nested to flat fetches everything
/// again, under the same file names.
#[test]
fn scenario_switch_to_flat_layout() {
    let library = TestLibrary::new();
    let catalog = FakeCatalog::new().with_album("abc", "Choir", &[("p1", "Alpha", "")]);

    SyncEngine::new(&catalog, settings(&library)).run().unwrap();
    SyncEngine::new(&catalog, settings(&library).with_layout(LayoutMode::Flat))
        .run()
        .unwrap();

    assert_eq!(library.files(), vec!["Alpha.pdf", "Choir/Alpha.pdf"]);
}

/// Wrong password: nothing is listed or written.
#[test]
fn scenario_wrong_password() {
    let library = TestLibrary::new();
    let catalog = FakeCatalog::new()
        .with_album("abc", "Choir", &[("p1", "Alpha", "")])
        .rejecting_logins();

    let err = SyncEngine::new(&catalog, settings(&library)).run().unwrap_err();

    assert!(err.to_string().contains("alice"));
    assert!(library.files().is_empty());
}
