//! Basic CLI tests for bkd
//!
//! Tests for command-line argument parsing, help output, version display,
//! adding, listing and removing bookmarks.

use predicates::prelude::*;

use super::Sandbox;

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    Sandbox::new()
        .bkd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("bkd"))
        .stdout(predicate::str::contains("--export"));
}

#[test]
fn version_flag_shows_version() {
    Sandbox::new()
        .bkd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    Sandbox::new()
        .bkd()
        .arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn conflicting_commands_return_exit_code_3() {
    Sandbox::new()
        .bkd()
        .args(["--list", "--add", "github.com"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn format_without_list_returns_exit_code_3() {
    Sandbox::new()
        .bkd()
        .arg("--json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--list"));
}

#[test]
fn invalid_format_returns_exit_code_3() {
    Sandbox::new()
        .bkd()
        .args(["--list", "--format", "xml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn malformed_config_file_returns_exit_code_3() {
    Sandbox::with_config("[general\nmouse_enabled = ")
        .bkd()
        .arg("--list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Add / List / Remove
// =============================================================================

#[test]
fn list_empty_collection_prints_nothing() {
    Sandbox::new()
        .bkd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn add_then_list() {
    let sandbox = Sandbox::new();
    sandbox
        .bkd()
        .args(["--add", "https://www.github.com/rust-lang"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Github"));
    sandbox
        .bkd()
        .args(["--add", "docs.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Docs"));

    sandbox
        .bkd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\tGithub\thttps://www.github.com/rust-lang\n"))
        .stdout(predicate::str::contains("\tDocs\tdocs.rs\n"));
    assert_eq!(sandbox.ids().len(), 2);
}

#[test]
fn add_duplicate_url_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["crates.io"]);
    sandbox
        .bkd()
        .args(["--add", "crates.io"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(duplicate URL)"));

    let ids = sandbox.ids();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn add_invalid_url_returns_exit_code_3() {
    let sandbox = Sandbox::new();
    sandbox
        .bkd()
        .args(["--add", "http://"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid URL format."));
    sandbox
        .bkd()
        .args(["--add", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please enter a URL."));
    assert!(sandbox.ids().is_empty());
}

#[test]
fn list_urls_and_json_formats() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com", "docs.rs"]);

    sandbox
        .bkd()
        .args(["--list", "--format", "urls"])
        .assert()
        .success()
        .stdout("github.com\ndocs.rs\n");

    sandbox
        .bkd()
        .args(["--list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"iconUrl\""))
        .stdout(predicate::str::contains("\"title\": \"Github\""));
}

#[test]
fn remove_by_id() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com", "docs.rs", "crates.io"]);
    let ids = sandbox.ids();

    sandbox
        .bkd()
        .args(["--remove", &ids[1]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Docs"));

    assert_eq!(sandbox.ids(), vec![ids[0].clone(), ids[2].clone()]);
}

#[test]
fn remove_unknown_id_returns_exit_code_3() {
    let sandbox = Sandbox::new();
    sandbox.seed(&["github.com"]);
    sandbox
        .bkd()
        .args(["--remove", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No bookmark with id"));
    assert_eq!(sandbox.ids().len(), 1);
}

#[test]
fn data_dir_flag_overrides_config_file() {
    let sandbox = Sandbox::new();
    let data = sandbox.path("from-config");
    std::fs::write(
        sandbox.path("config.toml"),
        format!("[general]\ndata_dir = {:?}\n", data.display().to_string()),
    )
    .unwrap();

    // --data-dir on the command line wins over the config file
    sandbox.seed(&["github.com"]);
    assert!(!data.exists());
    assert!(sandbox.data_dir().exists());
}
