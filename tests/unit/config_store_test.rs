use std::fs;

use virtualtab::services::config_store::ConfigStore;
use virtualtab::types::config::VirtualTabConfig;
use virtualtab::types::group::TempGroup;

#[test]
fn test_load_missing_file_yields_default() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(tmp.path().join("virtualTab.json"));

    let outcome = store.load().unwrap();
    assert_eq!(outcome.config, VirtualTabConfig::default());
    assert!(!outcome.migrated);
}

#[test]
fn test_load_legacy_array_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("virtualTab.json");
    fs::write(&path, r#"[{"id": "g1", "name": "Work", "files": ["/a.rs"]}]"#).unwrap();

    let outcome = ConfigStore::new(&path).load().unwrap();
    assert_eq!(outcome.config.groups.len(), 1);
    assert!(outcome.config.transmit_targets.is_empty());
    assert!(!outcome.migrated);
}

#[test]
fn test_load_migrates_missing_ids() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("virtualTab.json");
    fs::write(&path, r#"[{"name": "Pre-milestone group"}]"#).unwrap();

    let outcome = ConfigStore::new(&path).load().unwrap();
    assert!(outcome.migrated);
    assert!(outcome.config.groups[0].id.is_some());
}

#[test]
fn test_load_malformed_json_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("virtualTab.json");
    fs::write(&path, "{ invalid json }").unwrap();

    assert!(ConfigStore::new(&path).load().is_err());
}

#[test]
fn test_save_creates_parent_dirs_and_writes_object_form() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(".vscode").join("virtualTab.json");
    let store = ConfigStore::new(&path);

    let mut config = VirtualTabConfig::default();
    config.groups.push(TempGroup::new("Work"));
    store.save(&config).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(written.is_object());
    assert_eq!(written["groups"][0]["name"], "Work");
}

#[test]
fn test_save_load_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(tmp.path().join("virtualTab.json"));

    let mut config = VirtualTabConfig::default();
    let mut group = TempGroup::new("Work");
    let mut metadata = serde_json::Map::new();
    metadata.insert("futureKey".to_string(), serde_json::json!({"a": 1}));
    group.metadata = Some(metadata);
    group.files = vec!["/src/lib.rs".to_string()];
    config.groups.push(group);

    store.save(&config).unwrap();
    let outcome = store.load().unwrap();

    assert_eq!(outcome.config, config);
    assert!(!outcome.migrated);
}

#[test]
fn test_for_workspace_path() {
    let tmp = tempfile::tempdir().unwrap();
    let store = ConfigStore::for_workspace(tmp.path());
    assert!(store
        .config_path()
        .ends_with(".vscode/virtualTab.json"));
}
