use std::fs;
use std::path::Path;

use virtualtab::services::target_resolver::TargetResolver;

fn write_vscode_file(root: &Path, name: &str, content: &str) {
    let dir = root.join(".vscode");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_no_workspace_root_returns_empty() {
    let resolver = TargetResolver::new(None);
    assert!(resolver.load_transmit_targets().is_empty());
}

#[test]
fn test_both_files_absent_returns_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let resolver = TargetResolver::new(Some(tmp.path().to_path_buf()));
    assert!(resolver.load_transmit_targets().is_empty());
}

#[test]
fn test_dedicated_file_wins_over_shared() {
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(
        tmp.path(),
        "transmitConfig.json",
        r#"{"transmitTargets": [{"name": "Dedicated", "path": "/d"}]}"#,
    );
    write_vscode_file(
        tmp.path(),
        "virtualTab.json",
        r#"{"groups": [], "transmitTargets": [{"name": "Shared", "path": "/s"}]}"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "Dedicated");
}

#[test]
fn test_dedicated_file_without_field_still_wins() {
    // A parseable dedicated file with no target field resolves to empty
    // without falling through to the shared file.
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(tmp.path(), "transmitConfig.json", "{}");
    write_vscode_file(
        tmp.path(),
        "virtualTab.json",
        r#"{"transmitTargets": [{"name": "Shared", "path": "/s"}]}"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert!(targets.is_empty());
}

#[test]
fn test_malformed_dedicated_falls_through_to_shared() {
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(tmp.path(), "transmitConfig.json", "{ not json");
    write_vscode_file(
        tmp.path(),
        "virtualTab.json",
        r#"{"transmitTargets": [{"name": "Shared", "path": "/s"}]}"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "Shared");
}

#[test]
fn test_legacy_array_shared_file_has_no_transmit_data() {
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(
        tmp.path(),
        "virtualTab.json",
        r#"[{"id": "g1", "name": "Work", "files": []}]"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert!(targets.is_empty());
}

#[test]
fn test_object_shared_file_supplies_targets() {
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(
        tmp.path(),
        "virtualTab.json",
        r#"{"groups": [], "transmitTargets": [{"name": "A", "path": "/a"}, {"name": "B", "path": "/b"}]}"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].name, "A");
    assert_eq!(targets[1].name, "B");
}

#[test]
fn test_both_files_malformed_returns_empty() {
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(tmp.path(), "transmitConfig.json", "###");
    write_vscode_file(tmp.path(), "virtualTab.json", "###");

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert!(targets.is_empty());
}

#[test]
fn test_duplicate_targets_are_preserved() {
    // No uniqueness constraint on name or path
    let tmp = tempfile::tempdir().unwrap();
    write_vscode_file(
        tmp.path(),
        "transmitConfig.json",
        r#"{"transmitTargets": [{"name": "X", "path": "/x"}, {"name": "X", "path": "/x"}]}"#,
    );

    let targets = TargetResolver::new(Some(tmp.path().to_path_buf())).load_transmit_targets();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0], targets[1]);
}
