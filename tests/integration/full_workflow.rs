//! Integration test: full end-to-end workflow.
//!
//! 1. Resolve every folder against an empty store
//! 2. Check defaults were persisted
//! 3. Resolve again with a fresh registry and see stored values reused
//! 4. Override a value in the store and see it adopted

use std::collections::HashSet;

use storage_folders::{
    FolderCategory, FolderRegistry, MemorySettings, SettingsStore, FOLDERS_SECTION,
};

#[test]
fn full_workflow_empty_store_to_override() {
    // ── Step 1: Resolve against an empty store ──────────────────────────
    let mut store = MemorySettings::new();
    let mut registry = FolderRegistry::new();
    registry
        .resolve_all(&mut store)
        .expect("default layout should resolve");

    assert!(registry.is_resolved());
    let names: HashSet<String> = registry
        .iter()
        .map(|(_, name)| name.to_string())
        .collect();
    assert_eq!(names.len(), FolderCategory::COUNT, "names must be distinct");

    // ── Step 2: Defaults were written to the store ──────────────────────
    let section = store
        .section(FOLDERS_SECTION)
        .expect("folders section should exist");
    assert_eq!(section.len(), FolderCategory::COUNT);
    for category in FolderCategory::ALL {
        assert_eq!(
            section.get(category.key()).map(String::as_str),
            Some(category.default_name()),
            "{category:?} default should be persisted"
        );
    }

    // ── Step 3: Fresh registry reuses stored values, nothing new ────────
    for category in FolderCategory::ALL {
        let checked = store
            .check_set_str(FOLDERS_SECTION, category.key(), "something-else")
            .unwrap();
        assert!(!checked.is_new, "{category:?} should already be present");
    }

    // ── Step 4: Stored value beats the compiled-in default ──────────────
    let mut store = MemorySettings::new().with_value(FOLDERS_SECTION, "smartcontract", "scripts2");
    let mut registry = FolderRegistry::new();
    registry.resolve_all(&mut store).unwrap();

    assert_eq!(registry.smart_contracts().unwrap(), "scripts2");
    assert_eq!(registry.expired_box().unwrap(), "expiredBox");
    assert_eq!(registry.record_box().unwrap(), "recordBox");
}

#[test]
fn full_workflow_accessors_match_get() {
    let mut store = MemorySettings::new();
    let mut registry = FolderRegistry::new();
    registry.resolve_all(&mut store).unwrap();

    assert_eq!(
        registry.account().unwrap(),
        registry.get(FolderCategory::Account).unwrap()
    );
    assert_eq!(
        registry.credential().unwrap(),
        registry.get(FolderCategory::Credential).unwrap()
    );
    assert_eq!(
        registry.pubcred().unwrap(),
        registry.get(FolderCategory::Pubcred).unwrap()
    );
    assert_eq!(
        registry.outbox().unwrap(),
        registry.get(FolderCategory::Outbox).unwrap()
    );
}
