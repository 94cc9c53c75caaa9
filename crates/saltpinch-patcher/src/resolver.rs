//! Replacement item resolution
//!
//! Finds the key of the replacement item by EditorID inside one named
//! dependency plugin. The lookup only ever reads that plugin, so it can run
//! as a dry validation against the load order listing before the full store
//! is loaded.

use crate::error::PatchError;
use crate::settings::PatcherSettings;
use saltpinch_record::{FormKey, ModKey};
use saltpinch_store::{load_layer, IdentifierIndex, LoadOrder, Plugin, RecordStore};
use std::path::Path;

/// Resolves one EditorID inside one dependency plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierResolver {
    plugin: ModKey,
    editor_id: String,
}

impl IdentifierResolver {
    /// Create resolver for `editor_id` inside `plugin`
    #[inline]
    #[must_use]
    pub fn new(plugin: ModKey, editor_id: impl Into<String>) -> Self {
        Self {
            plugin,
            editor_id: editor_id.into(),
        }
    }

    /// Resolver for the configured dependency and EditorID
    #[inline]
    #[must_use]
    pub fn from_settings(settings: &PatcherSettings) -> Self {
        Self::new(
            settings.dependency.clone(),
            settings.replacement_editor_id.clone(),
        )
    }

    /// Dependency plugin
    #[inline]
    #[must_use]
    pub fn plugin(&self) -> &ModKey {
        &self.plugin
    }

    /// EditorID looked up
    #[inline]
    #[must_use]
    pub fn editor_id(&self) -> &str {
        &self.editor_id
    }

    /// Resolve against a loaded store
    ///
    /// # Errors
    /// - `PatchError::MissingDependency` if the plugin is not an active,
    ///   loaded layer of `store`
    /// - `PatchError::UnresolvedIdentifier` if it has no such item
    pub fn resolve(&self, store: &RecordStore) -> Result<FormKey, PatchError> {
        self.resolve_in(store.layer(&self.plugin))
    }

    /// Dry validation: resolve reading only the dependency plugin's file
    ///
    /// # Errors
    /// As [`Self::resolve`], plus `PatchError::Store` if the dependency file
    /// exists but cannot be read
    pub fn validate(
        &self,
        data_folder: impl AsRef<Path>,
        load_order: &LoadOrder,
    ) -> Result<FormKey, PatchError> {
        let layer = load_layer(data_folder, load_order, &self.plugin)?;
        self.resolve_in(layer.as_ref())
    }

    /// Resolve inside the dependency layer, if present
    ///
    /// # Errors
    /// As [`Self::resolve`]
    pub fn resolve_in(&self, layer: Option<&Plugin>) -> Result<FormKey, PatchError> {
        let layer = layer.ok_or_else(|| PatchError::missing_dependency(&self.plugin))?;

        let index = IdentifierIndex::items(layer);
        let key = index
            .resolve(&self.editor_id)
            .cloned()
            .ok_or_else(|| PatchError::unresolved_identifier(&self.editor_id, &self.plugin))?;

        tracing::debug!("Resolved {} in {} to {}", self.editor_id, self.plugin, key);
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saltpinch_store::ModListing;
    use saltpinch_test_utils::{
        misc_item, mod_key, recipe, salt_pinch, salt_pinch_plugin, scenario_load_order,
        scenario_plugins, scenario_store, skyrim_plugin, store_without_dependency,
        write_data_folder,
    };

    fn resolver() -> IdentifierResolver {
        IdentifierResolver::from_settings(&PatcherSettings::default())
    }

    #[test]
    fn resolves_from_store() {
        assert_eq!(resolver().resolve(&scenario_store()).unwrap(), salt_pinch());
    }

    #[test]
    fn missing_layer_is_missing_dependency() {
        let err = resolver().resolve(&store_without_dependency()).unwrap_err();
        assert!(matches!(err, PatchError::MissingDependency { .. }));
    }

    #[test]
    fn disabled_or_unloaded_layer_is_missing_dependency() {
        let mut store = RecordStore::from_plugins([skyrim_plugin()]);
        store.push_listing(ModListing {
            mod_key: mod_key("SaltPinch.esp"),
            enabled: false,
            plugin: Some(salt_pinch_plugin()),
        });
        assert!(matches!(
            resolver().resolve(&store),
            Err(PatchError::MissingDependency { .. })
        ));

        let mut store = RecordStore::from_plugins([skyrim_plugin()]);
        store.push_listing(ModListing {
            mod_key: mod_key("SaltPinch.esp"),
            enabled: true,
            plugin: None,
        });
        assert!(matches!(
            resolver().resolve(&store),
            Err(PatchError::MissingDependency { .. })
        ));
    }

    #[test]
    fn absent_identifier_is_unresolved() {
        let store = RecordStore::from_plugins([
            skyrim_plugin(),
            Plugin::with_records(
                mod_key("SaltPinch.esp"),
                vec![misc_item("000801:SaltPinch.esp", "SomethingElse")],
            ),
        ]);
        let err = resolver().resolve(&store).unwrap_err();
        assert!(matches!(
            err,
            PatchError::UnresolvedIdentifier { ref editor_id, .. } if editor_id == "SaltPinch"
        ));
    }

    #[test]
    fn non_item_with_identifier_is_unresolved() {
        let store = RecordStore::from_plugins([Plugin::with_records(
            mod_key("SaltPinch.esp"),
            vec![recipe("000801:SaltPinch.esp", "SaltPinch", &[], None)],
        )]);
        assert!(matches!(
            resolver().resolve(&store),
            Err(PatchError::UnresolvedIdentifier { .. })
        ));
    }

    #[test]
    fn identifier_in_other_layer_does_not_count() {
        let store = RecordStore::from_plugins([
            Plugin::with_records(
                mod_key("Skyrim.esm"),
                vec![misc_item("000801:Skyrim.esm", "SaltPinch")],
            ),
            Plugin::new(mod_key("SaltPinch.esp")),
        ]);
        assert!(matches!(
            resolver().resolve(&store),
            Err(PatchError::UnresolvedIdentifier { .. })
        ));
    }

    #[test]
    fn custom_dependency() {
        let store = RecordStore::from_plugins([Plugin::with_records(
            mod_key("Ext.esp"),
            vec![misc_item("000D01:Ext.esp", "Pinch")],
        )]);
        let resolver = IdentifierResolver::new(mod_key("Ext.esp"), "Pinch");
        assert_eq!(
            resolver.resolve(&store).unwrap().to_string(),
            "000D01:Ext.esp"
        );
    }

    #[test]
    fn dry_validation_reads_only_dependency() {
        let dir = tempfile::tempdir().unwrap();
        write_data_folder(dir.path(), &scenario_plugins());
        // only the dependency layer is readable
        std::fs::write(dir.path().join("Skyrim.esm"), b"corrupt").unwrap();
        std::fs::write(dir.path().join("Hearth.esp"), b"corrupt").unwrap();

        let key = resolver().validate(dir.path(), &scenario_load_order()).unwrap();
        assert_eq!(key, salt_pinch());
    }

    #[test]
    fn dry_validation_reports_missing_file_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        write_data_folder(dir.path(), &[skyrim_plugin()]);

        let err = resolver()
            .validate(dir.path(), &scenario_load_order())
            .unwrap_err();
        assert!(matches!(err, PatchError::MissingDependency { .. }));

        let unlisted = LoadOrder::enabled([mod_key("Skyrim.esm")]);
        let err = resolver().validate(dir.path(), &unlisted).unwrap_err();
        assert!(matches!(err, PatchError::MissingDependency { .. }));
    }
}
