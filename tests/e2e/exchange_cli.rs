//! Export and import CLI tests for bkd

use std::fs;

use predicates::prelude::*;

use super::Sandbox;

#[test]
fn export_empty_collection_returns_exit_code_3() {
    Sandbox::new()
        .bkd()
        .args(["--export", "-"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("There are no bookmarks to export"));
}

#[test]
fn export_to_stdout() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com"]);

    let output = sandbox.bkd().args(["--export", "-"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["url"], "github.com");
    assert_eq!(entries[0]["title"], "Github");
    assert!(entries[0]["iconUrl"].as_str().unwrap().contains("github.com"));
}

#[test]
fn export_to_default_file_in_current_dir() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com", "docs.rs"]);

    sandbox
        .bkd()
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 bookmark(s)"));

    let backups: Vec<_> = fs::read_dir(sandbox.dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("bookmarks-backup-") && name.ends_with(".json"))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn export_then_import_round_trip() {
    let source = Sandbox::new();
    source.seed(&["github.com", "docs.rs", "crates.io"]);
    let backup = source.path("backup.json");
    source
        .bkd()
        .arg("--export")
        .arg(&backup)
        .assert()
        .success();

    let target = Sandbox::new();
    target.seed(&["example.com"]);
    target
        .bkd()
        .arg("--import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 3 bookmarks!"));

    assert_eq!(target.ids(), source.ids());
}

#[test]
fn import_malformed_file_keeps_collection() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com"]);
    let before = sandbox.ids();

    let bad = sandbox.path("bad.json");
    fs::write(&bad, r#"[{"id": "1", "title": "No url"}]"#).unwrap();
    sandbox
        .bkd()
        .arg("--import")
        .arg(&bad)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Invalid or corrupted bookmark file structure",
        ));

    assert_eq!(sandbox.ids(), before);
}

#[test]
fn import_missing_file_returns_exit_code_2() {
    let sandbox = Sandbox::new();
    sandbox
        .bkd()
        .arg("--import")
        .arg(sandbox.path("missing.json"))
        .assert()
        .code(2);
}

#[test]
fn import_fills_missing_icon_from_config() {
    let sandbox = Sandbox::with_config("[icons]\ndefault_icon_url = \"https://icons.example/none.png\"\n");
    let backup = sandbox.path("backup.json");
    fs::write(
        &backup,
        r#"[{"id": "7", "url": "https://docs.rs", "title": "Docs"}]"#,
    )
    .unwrap();

    sandbox.bkd().arg("--import").arg(&backup).assert().success();
    sandbox
        .bkd()
        .args(["--list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://icons.example/none.png"));
}
