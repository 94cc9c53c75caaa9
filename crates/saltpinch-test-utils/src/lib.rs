//! Testing utilities for SaltPinch workspace
//!
//! Shared record builders and a ready-made load order covering the
//! food / potion / non-ingestible recipe cases.

#![allow(missing_docs)]

use saltpinch_record::skyrim::salt_pile;
use saltpinch_record::{
    ConstructibleObject, ContainerEntry, FormKey, GenericItem, Ingestible, IngestibleFlags, ModKey,
    Record, RecordBody,
};
use saltpinch_store::{LoadOrder, Plugin, RecordStore};
use std::path::Path;

pub const SALT_PINCH_ESP: &str = "SaltPinch.esp";
pub const HEARTH_ESP: &str = "Hearth.esp";

pub fn key(s: &str) -> FormKey {
    s.parse().unwrap()
}

pub fn mod_key(s: &str) -> ModKey {
    s.parse().unwrap()
}

pub fn misc_item(form_key: &str, editor_id: &str) -> Record {
    Record::new(
        key(form_key),
        Some(editor_id.to_string()),
        RecordBody::MiscItem(GenericItem::named(editor_id)),
    )
}

pub fn ingredient(form_key: &str, editor_id: &str) -> Record {
    Record::new(
        key(form_key),
        Some(editor_id.to_string()),
        RecordBody::Ingredient(GenericItem::named(editor_id)),
    )
}

pub fn ingestible(form_key: &str, editor_id: &str, flags: IngestibleFlags) -> Record {
    Record::new(
        key(form_key),
        Some(editor_id.to_string()),
        RecordBody::Ingestible(Ingestible {
            name: Some(editor_id.to_string()),
            value: 5,
            weight: 0.5,
            flags,
        }),
    )
}

pub fn food(form_key: &str, editor_id: &str) -> Record {
    ingestible(form_key, editor_id, IngestibleFlags::FOOD_ITEM)
}

pub fn recipe(form_key: &str, editor_id: &str, items: &[(i32, FormKey)], product: Option<FormKey>) -> Record {
    Record::new(
        key(form_key),
        Some(editor_id.to_string()),
        RecordBody::ConstructibleObject(ConstructibleObject {
            items: Some(
                items
                    .iter()
                    .map(|(count, item)| ContainerEntry::new(item.clone(), *count))
                    .collect(),
            ),
            created_object: product,
            created_object_count: Some(1),
            workbench_keyword: Some(key("0A5CB3:Skyrim.esm")),
        }),
    )
}

pub fn water() -> FormKey {
    key("000AAA:Skyrim.esm")
}

pub fn salt_pinch() -> FormKey {
    key("000800:SaltPinch.esp")
}

/// Base game layer: salt pile, water, a food, a potion and a bag
pub fn skyrim_plugin() -> Plugin {
    Plugin::with_records(
        mod_key("Skyrim.esm"),
        vec![
            ingredient("034CDF:Skyrim.esm", "SaltPile"),
            misc_item("000AAA:Skyrim.esm", "Water"),
            food("000B01:Skyrim.esm", "CookedStew"),
            ingestible("000B02:Skyrim.esm", "HealthPotion", IngestibleFlags::MEDICINE),
            misc_item("000B03:Skyrim.esm", "EmptyBag"),
            food("000B04:Skyrim.esm", "Bread"),
        ],
    )
}

/// Dependency layer defining the `SaltPinch` item
pub fn salt_pinch_plugin() -> Plugin {
    Plugin::with_records(
        mod_key(SALT_PINCH_ESP),
        vec![misc_item("000800:SaltPinch.esp", "SaltPinch")],
    )
}

/// Recipe layer: Stew (food, salted), Potion (medicine, salted),
/// Bag (not ingestible, salted), Bread (food, unsalted)
pub fn hearth_plugin() -> Plugin {
    Plugin::with_records(
        mod_key(HEARTH_ESP),
        vec![
            recipe(
                "000901:Hearth.esp",
                "Stew",
                &[(1, salt_pile()), (2, water())],
                Some(key("000B01:Skyrim.esm")),
            ),
            recipe(
                "000902:Hearth.esp",
                "Potion",
                &[(1, salt_pile())],
                Some(key("000B02:Skyrim.esm")),
            ),
            recipe(
                "000903:Hearth.esp",
                "Bag",
                &[(1, salt_pile())],
                Some(key("000B03:Skyrim.esm")),
            ),
            recipe(
                "000904:Hearth.esp",
                "BreadRecipe",
                &[(2, water())],
                Some(key("000B04:Skyrim.esm")),
            ),
        ],
    )
}

/// Skyrim.esm, SaltPinch.esp, Hearth.esp
pub fn scenario_plugins() -> Vec<Plugin> {
    vec![skyrim_plugin(), salt_pinch_plugin(), hearth_plugin()]
}

pub fn scenario_store() -> RecordStore {
    RecordStore::from_plugins(scenario_plugins())
}

/// Scenario store without the dependency layer
pub fn store_without_dependency() -> RecordStore {
    RecordStore::from_plugins([skyrim_plugin(), hearth_plugin()])
}

/// Write plugins into `data_folder` and a matching `plugins.txt` next to it
pub fn write_data_folder(data_folder: &Path, plugins: &[Plugin]) -> std::path::PathBuf {
    std::fs::create_dir_all(data_folder).unwrap();
    for plugin in plugins {
        plugin
            .write_to(data_folder.join(plugin.mod_key.file_name()))
            .unwrap();
    }
    let listing: String = plugins
        .iter()
        .map(|p| format!("*{}\n", p.mod_key))
        .collect();
    let load_order_path = data_folder.join("plugins.txt");
    std::fs::write(&load_order_path, listing).unwrap();
    load_order_path
}

pub fn scenario_load_order() -> LoadOrder {
    LoadOrder::enabled(scenario_plugins().into_iter().map(|p| p.mod_key))
}
