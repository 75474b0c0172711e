//! Archive output tests

mod common;

use common::{TestApp, ebstage_cmd};
use predicates::prelude::*;

#[test]
fn test_prepare_produces_archive() {
    let app = TestApp::new();
    app.write_config("");

    ebstage_cmd()
        .current_dir(&app.path)
        .args(["prepare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archiving Bundle"));

    assert!(app.file_exists("build/bundle.tar.gz"));
}

#[test]
fn test_archive_entries_are_relative_to_bundle_root() {
    let app = TestApp::new();
    app.write_config("");

    ebstage_cmd()
        .current_dir(&app.path)
        .args(["prepare"])
        .assert()
        .success();

    let entries = app.archive_entries();
    assert!(entries.contains(&"package.json".to_string()));
    assert!(entries.contains(&".ebextensions/node.config".to_string()));
    assert!(entries.iter().all(|e| !e.starts_with("bundle/")));
}

#[test]
fn test_archive_has_one_entry_per_staged_file() {
    let app = TestApp::new();
    app.write_config("");

    ebstage_cmd()
        .current_dir(&app.path)
        .args(["prepare"])
        .assert()
        .success();

    let staged: Vec<_> = walkdir::WalkDir::new(app.path.join("build/bundle"))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    assert_eq!(app.archive_entries().len(), staged.len());
}

#[test]
fn test_second_run_replaces_archive() {
    let app = TestApp::new();
    app.write_config("graceful_shutdown: true\n");

    ebstage_cmd()
        .current_dir(&app.path)
        .args(["prepare"])
        .assert()
        .success();
    assert!(app
        .archive_entries()
        .contains(&".ebextensions/graceful_shutdown.config".to_string()));

    app.write_config("");
    ebstage_cmd()
        .current_dir(&app.path)
        .args(["prepare"])
        .assert()
        .success();

    let entries = app.archive_entries();
    assert!(!entries.contains(&".ebextensions/graceful_shutdown.config".to_string()));
    assert!(entries.contains(&"package.json".to_string()));
}
