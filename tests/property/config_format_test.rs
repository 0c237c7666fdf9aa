//! Property-based tests for the dual persisted-format acceptance.
//!
//! The loader must accept both the legacy array root and the current object
//! root, normalize them into the same in-memory model, and carry unknown
//! metadata keys through unharmed.

use proptest::prelude::*;

use virtualtab::types::config::VirtualTabConfig;
use virtualtab::types::group::TempGroup;
use virtualtab::types::transmit::TransmitTarget;

fn arb_group() -> impl Strategy<Value = TempGroup> {
    (
        "[a-z ]{1,12}",
        prop::option::of("[a-z0-9-]{1,16}"),
        prop::collection::vec("/[a-z]{1,8}\\.[a-z]{1,3}", 0..4),
        any::<bool>(),
        prop::collection::hash_map("[a-zA-Z]{1,8}", any::<i64>(), 0..3),
    )
        .prop_map(|(name, id, files, built_in, metadata)| {
            let mut group = TempGroup::new(&name);
            group.id = id;
            group.files = files;
            group.built_in = built_in;
            if !metadata.is_empty() {
                let map: serde_json::Map<String, serde_json::Value> = metadata
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::json!(v)))
                    .collect();
                group.metadata = Some(map);
            }
            group
        })
}

fn arb_targets() -> impl Strategy<Value = Vec<TransmitTarget>> {
    prop::collection::vec(
        ("[a-z]{1,8}", "/[a-z]{1,8}").prop_map(|(name, path)| TransmitTarget { name, path }),
        0..3,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Object form: serialize then parse yields the identical model, unknown
    // metadata included.
    #[test]
    fn object_form_preserves_model(
        groups in prop::collection::vec(arb_group(), 0..4),
        targets in arb_targets(),
    ) {
        let config = VirtualTabConfig { groups, transmit_targets: targets };

        let json = serde_json::to_string(&config).unwrap();
        let reloaded = VirtualTabConfig::from_json(&json).unwrap();

        prop_assert_eq!(reloaded, config);
    }

    // Legacy form: a bare array of the same groups normalizes to the same
    // group list with no transmit data.
    #[test]
    fn legacy_form_implies_empty_targets(groups in prop::collection::vec(arb_group(), 0..4)) {
        let json = serde_json::to_string(&groups).unwrap();
        let reloaded = VirtualTabConfig::from_json(&json).unwrap();

        prop_assert_eq!(&reloaded.groups, &groups);
        prop_assert!(reloaded.transmit_targets.is_empty());
    }

    // Migration assigns ids exactly to the groups that lack one and is
    // idempotent; pre-existing ids are never rewritten.
    #[test]
    fn migration_assigns_only_missing_ids(groups in prop::collection::vec(arb_group(), 0..6)) {
        let mut config = VirtualTabConfig { groups, transmit_targets: Vec::new() };
        let missing_before = config.groups.iter().filter(|g| g.id.is_none()).count();
        let kept: Vec<Option<String>> =
            config.groups.iter().map(|g| g.id.clone()).collect();

        let assigned = config.assign_missing_ids();

        prop_assert_eq!(assigned, missing_before);
        prop_assert!(config.groups.iter().all(|g| g.id.is_some()));
        for (group, old_id) in config.groups.iter().zip(kept) {
            if let Some(old_id) = old_id {
                prop_assert_eq!(group.id.as_deref(), Some(old_id.as_str()));
            }
        }
        prop_assert_eq!(config.assign_missing_ids(), 0);
    }
}
