//! Store loading and winning-override resolution over an on-disk data folder.

use pretty_assertions::assert_eq;
use saltpinch_record::skyrim::salt_pile;
use saltpinch_record::{Category, IngestibleFlags};
use saltpinch_store::{load_layer, IdentifierIndex, LoadOrder, Plugin, RecordStore, StoreError};
use saltpinch_test_utils::{
    hearth_plugin, ingestible, key, mod_key, salt_pinch_plugin, scenario_plugins, skyrim_plugin,
    write_data_folder,
};

/// Every listed, enabled layer is loaded in load order.
#[test]
fn loads_scenario_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let load_order_path = write_data_folder(dir.path(), &scenario_plugins());
    let load_order = LoadOrder::read_from(&load_order_path).expect("read load order");

    let store = RecordStore::load(dir.path(), &load_order).expect("load store");

    assert_eq!(
        store.mod_keys().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["Skyrim.esm", "SaltPinch.esp", "Hearth.esp"]
    );
    assert_eq!(store.active_layers().count(), 3);
    assert_eq!(store.layer(&mod_key("Hearth.esp")), Some(&hearth_plugin()));
    assert_eq!(
        store
            .winning_records_of_category(Category::ConstructibleObject)
            .len(),
        4
    );
}

/// Disabled and missing layers stay listed but contribute no records.
#[test]
fn disabled_and_missing_layers_are_unloaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_data_folder(dir.path(), &[skyrim_plugin(), salt_pinch_plugin()]);
    let load_order: LoadOrder = "*Skyrim.esm\nSaltPinch.esp\n*Hearth.esp\n"
        .parse()
        .expect("parse load order");

    let store = RecordStore::load(dir.path(), &load_order).expect("load store");

    let pinch = store.listing(&mod_key("SaltPinch.esp")).expect("listed");
    assert!(!pinch.enabled);
    assert!(pinch.plugin.is_none());

    let hearth = store.listing(&mod_key("Hearth.esp")).expect("listed");
    assert!(hearth.enabled);
    assert!(hearth.plugin.is_none());

    assert_eq!(store.active_layers().count(), 1);
    assert!(store.layer(&mod_key("SaltPinch.esp")).is_none());
}

/// A malformed layer file is an error, not a silently skipped layer.
#[test]
fn malformed_layer_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_data_folder(dir.path(), &scenario_plugins());
    std::fs::write(dir.path().join("Hearth.esp"), b"{ not json").expect("corrupt layer");

    let err = RecordStore::load(
        dir.path(),
        &LoadOrder::read_from(dir.path().join("plugins.txt")).expect("read load order"),
    )
    .expect_err("malformed layer");
    assert!(matches!(err, StoreError::Malformed { .. }));
}

/// The last layer defining a key wins, and links resolve to that copy.
#[test]
fn later_layer_overrides_earlier() {
    let potion_as_food = ingestible(
        "000B02:Skyrim.esm",
        "HealthPotion",
        IngestibleFlags::FOOD_ITEM,
    );
    let store = RecordStore::from_plugins([
        skyrim_plugin(),
        Plugin::with_records(mod_key("Tweaks.esp"), vec![potion_as_food.clone()]),
    ]);

    let view = store.winning_view();
    let winner = view
        .get_with_origin(&key("000B02:Skyrim.esm"))
        .expect("winning copy");
    assert_eq!(winner.origin, &mod_key("Tweaks.esp"));
    assert_eq!(winner.record, &potion_as_food);

    assert_eq!(
        store.resolve_link(&key("000B02:Skyrim.esm"), Category::Ingestible),
        Some(&potion_as_food)
    );
    assert!(store
        .resolve_link(&key("000B02:Skyrim.esm"), Category::MiscItem)
        .is_none());
    assert_eq!(view.len(), skyrim_plugin().len());
}

/// Appended overlays take top priority.
#[test]
fn appended_overlay_wins() {
    let mut store = RecordStore::from_plugins(scenario_plugins());
    let replacement = ingestible("034CDF:Skyrim.esm", "SaltPile", IngestibleFlags::FOOD_ITEM);
    store.append_overlay(Plugin::with_records(
        mod_key("Patch.esp"),
        vec![replacement.clone()],
    ));

    assert_eq!(store.winning_view().get(&salt_pile()), Some(&replacement));
    assert_eq!(store.mod_keys().last(), Some(&mod_key("Patch.esp")));
}

/// Single-layer loading only reads the requested file.
#[test]
fn load_layer_reads_one_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let load_order_path = write_data_folder(dir.path(), &scenario_plugins());
    std::fs::write(dir.path().join("Skyrim.esm"), b"garbage").expect("corrupt base");
    let load_order = LoadOrder::read_from(load_order_path).expect("read load order");

    let layer = load_layer(dir.path(), &load_order, &mod_key("SaltPinch.esp"))
        .expect("read dependency")
        .expect("dependency present");
    let index = IdentifierIndex::items(&layer);
    assert_eq!(
        index.resolve("saltpinch").map(ToString::to_string),
        Some("000800:SaltPinch.esp".to_string())
    );

    assert!(load_layer(dir.path(), &load_order, &mod_key("Absent.esp"))
        .expect("unlisted is not an error")
        .is_none());
}
