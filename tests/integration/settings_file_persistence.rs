//! Integration test: folder names survive across runs via a settings file.

use storage_folders::{
    FolderCategory, FolderRegistry, SettingsFile, SettingsStore, SharedFolders, FOLDERS_SECTION,
};

#[test]
fn defaults_written_in_first_run_are_reused_in_second() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    // First run: empty file, defaults get persisted.
    {
        let mut settings = SettingsFile::open(&path).unwrap();
        let mut registry = FolderRegistry::new();
        registry.resolve_all(&mut settings).unwrap();
        assert_eq!(registry.inbox().unwrap(), "inbox");
    }
    assert!(path.exists());

    // Operator edits the file between runs.
    {
        let mut settings = SettingsFile::open(&path).unwrap();
        settings
            .set_str(FOLDERS_SECTION, "inbox", "incoming")
            .unwrap();
    }

    // Second run: edited value wins, every other key already present.
    let mut settings = SettingsFile::open(&path).unwrap();
    for category in FolderCategory::ALL {
        assert!(settings
            .get_str(FOLDERS_SECTION, category.key())
            .unwrap()
            .is_some());
    }

    let mut registry = FolderRegistry::new();
    registry.resolve_all(&mut settings).unwrap();
    assert_eq!(registry.inbox().unwrap(), "incoming");
    assert_eq!(registry.nymbox().unwrap(), "nymbox");
}

#[test]
fn shared_handle_over_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("settings.json");

    let folders = SharedFolders::new(SettingsFile::open(&path).unwrap());
    let name = folders.get(FolderCategory::Credential).unwrap();
    assert_eq!(name, "credentials");

    let reopened = SettingsFile::open(&path).unwrap();
    assert_eq!(
        reopened
            .get_str(FOLDERS_SECTION, "credential")
            .unwrap()
            .as_deref(),
        Some("credentials")
    );
}

#[test]
fn unwritable_settings_file_never_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"regular file").unwrap();
    let path = blocker.join("settings.json");

    let folders = SharedFolders::new(SettingsFile::open(&path).unwrap());

    // Every lookup retries the pass; none may succeed without the file on disk.
    for _ in 0..(FolderCategory::COUNT + 2) {
        assert!(folders.get(FolderCategory::Account).is_err());
    }
    assert!(!folders.is_resolved());
    assert!(folders.with_store(|s| s.values().is_empty()));
    assert!(!path.exists());
}
