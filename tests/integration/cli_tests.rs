//! Integration tests for the CLI binary.
//!
//! This test is registered as a [[test]] in the storage-folders-cli crate
//! so that CARGO_BIN_EXE_folders is available.

use std::process::Command;

/// Get a Command pointing to the `folders` binary.
fn folders_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folders"))
}

#[test]
fn cli_responds_to_help() {
    let output = folders_binary()
        .arg("--help")
        .output()
        .expect("failed to execute folders --help");

    assert!(
        output.status.success(),
        "folders --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["resolve", "get", "defaults"] {
        assert!(
            stdout.contains(subcommand),
            "folders --help should list the `{subcommand}` subcommand, got: {stdout}"
        );
    }
    assert!(stdout.contains("--config"), "help should document --config");
}

#[test]
fn cli_defaults_lists_every_category() {
    let output = folders_binary()
        .arg("defaults")
        .output()
        .expect("failed to execute folders defaults");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 22);
    assert!(stdout.contains("paymentInbox"));
}

#[test]
fn cli_resolve_writes_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");

    let output = folders_binary()
        .arg("--config")
        .arg(&config)
        .args(["resolve", "--json"])
        .output()
        .expect("failed to execute folders resolve");

    assert!(
        output.status.success(),
        "resolve should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["account"], "accounts");
    assert_eq!(value["useracct"], "useraccounts");
    assert!(config.exists());
}

#[test]
fn cli_get_uses_stored_value() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    std::fs::write(
        &config,
        r#"{ "version": 1, "sections": { "folders": { "nym": "identities" } } }"#,
    )
    .unwrap();

    let output = folders_binary()
        .arg("--config")
        .arg(&config)
        .args(["get", "Nym"])
        .output()
        .expect("failed to execute folders get");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "identities");
}

#[test]
fn cli_get_unknown_category_fails() {
    let output = folders_binary()
        .args(["get", "wallet"])
        .output()
        .expect("failed to execute folders get");

    assert!(!output.status.success());
}

#[test]
fn cli_malformed_settings_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    std::fs::write(&config, b"{ broken").unwrap();

    let output = folders_binary()
        .arg("--config")
        .arg(&config)
        .arg("resolve")
        .output()
        .expect("failed to execute folders resolve");

    assert_eq!(output.status.code(), Some(1));
}
