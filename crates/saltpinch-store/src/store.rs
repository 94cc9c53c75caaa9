//! Record store
//!
//! [`RecordStore`] holds the load order's listings and their loaded layers.
//! It is read-only to patch generation; callers append the produced overlay
//! as a new layer.

use crate::error::StoreError;
use crate::{LoadOrder, Plugin, WinningView};
use saltpinch_record::{Category, FormKey, ModKey, Record};
use std::io::ErrorKind;
use std::path::Path;

/// One load order entry with its layer, if loaded
#[derive(Debug, Clone, PartialEq)]
pub struct ModListing {
    /// Listed plugin
    pub mod_key: ModKey,
    /// Whether the plugin is active
    pub enabled: bool,
    /// Loaded layer; `None` when the file was not found or not read
    pub plugin: Option<Plugin>,
}

impl ModListing {
    /// Enabled listing with a loaded layer
    #[inline]
    #[must_use]
    pub fn loaded(plugin: Plugin) -> Self {
        Self {
            mod_key: plugin.mod_key.clone(),
            enabled: true,
            plugin: Some(plugin),
        }
    }

    /// Layer if this listing is enabled and loaded
    #[inline]
    #[must_use]
    pub fn active_plugin(&self) -> Option<&Plugin> {
        self.plugin.as_ref().filter(|_| self.enabled)
    }
}

/// Ordered collection of layers (first = lowest priority)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    listings: Vec<ModListing>,
}

impl RecordStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with every plugin enabled and loaded, in the given order
    #[must_use]
    pub fn from_plugins(plugins: impl IntoIterator<Item = Plugin>) -> Self {
        Self {
            listings: plugins.into_iter().map(ModListing::loaded).collect(),
        }
    }

    /// Load every active plugin of `load_order` from `data_folder`
    ///
    /// Disabled entries are listed but not read. A missing layer file leaves
    /// its listing unloaded.
    ///
    /// # Errors
    /// - `StoreError::Malformed` if a layer file is not a layer document
    /// - `StoreError::Io` for read failures other than a missing file
    pub fn load(data_folder: impl AsRef<Path>, load_order: &LoadOrder) -> Result<Self, StoreError> {
        let data_folder = data_folder.as_ref();
        let mut listings = Vec::with_capacity(load_order.len());

        for entry in load_order.entries() {
            let plugin = if entry.enabled {
                read_layer(data_folder, &entry.mod_key)?
            } else {
                None
            };
            listings.push(ModListing {
                mod_key: entry.mod_key.clone(),
                enabled: entry.enabled,
                plugin,
            });
        }

        let store = Self { listings };
        tracing::debug!(
            "Loaded {} of {} listed plugins from {}",
            store.active_layers().count(),
            store.listings.len(),
            data_folder.display()
        );
        Ok(store)
    }

    /// Add a listing after all current ones
    #[inline]
    pub fn push_listing(&mut self, listing: ModListing) {
        self.listings.push(listing);
    }

    /// Every listing, in load order
    pub fn layers(&self) -> impl DoubleEndedIterator<Item = &ModListing> {
        self.listings.iter()
    }

    /// Listing for a plugin
    #[must_use]
    pub fn listing(&self, mod_key: &ModKey) -> Option<&ModListing> {
        self.listings.iter().find(|l| &l.mod_key == mod_key)
    }

    /// Layer for a plugin, if listed, enabled and loaded
    #[must_use]
    pub fn layer(&self, mod_key: &ModKey) -> Option<&Plugin> {
        self.listing(mod_key).and_then(ModListing::active_plugin)
    }

    /// Enabled, loaded layers in load order
    pub fn active_layers(&self) -> impl DoubleEndedIterator<Item = &Plugin> {
        self.listings.iter().filter_map(ModListing::active_plugin)
    }

    /// Listed plugin keys in load order
    pub fn mod_keys(&self) -> impl Iterator<Item = &ModKey> {
        self.listings.iter().map(|l| &l.mod_key)
    }

    /// Priority-resolved snapshot of the active layers
    #[must_use]
    pub fn winning_view(&self) -> WinningView<'_> {
        WinningView::build(self.active_layers())
    }

    /// Winning records of one category, in priority order
    #[must_use]
    pub fn winning_records_of_category(&self, category: Category) -> Vec<&Record> {
        self.winning_view().of_category(category).collect()
    }

    /// Resolve a link to its winning record, requiring `category`
    #[must_use]
    pub fn resolve_link(&self, key: &FormKey, category: Category) -> Option<&Record> {
        self.winning_view().resolve(key, category)
    }

    /// Append an overlay layer as the new highest-priority listing
    ///
    /// An existing listing for the same plugin is replaced and moved last.
    pub fn append_overlay(&mut self, overlay: Plugin) -> &Plugin {
        self.listings.retain(|l| l.mod_key != overlay.mod_key);
        self.listings.push(ModListing::loaded(overlay));
        let listing = self.listings.len() - 1;
        match &self.listings[listing].plugin {
            Some(plugin) => plugin,
            None => unreachable!("overlay listing is always loaded"),
        }
    }
}

/// Load one active plugin of `load_order` without loading the rest
///
/// Returns `None` when the plugin is not listed, disabled, or its file is
/// missing.
///
/// # Errors
/// - `StoreError::Malformed` if the layer file is not a layer document
/// - `StoreError::Io` for read failures other than a missing file
pub fn load_layer(
    data_folder: impl AsRef<Path>,
    load_order: &LoadOrder,
    mod_key: &ModKey,
) -> Result<Option<Plugin>, StoreError> {
    if !load_order.is_active(mod_key) {
        return Ok(None);
    }
    read_layer(data_folder.as_ref(), mod_key)
}

fn read_layer(data_folder: &Path, mod_key: &ModKey) -> Result<Option<Plugin>, StoreError> {
    let path = data_folder.join(mod_key.file_name());
    match Plugin::read_from(&path) {
        Ok(plugin) => {
            if plugin.mod_key != *mod_key {
                tracing::warn!(
                    "Layer file {} declares {}, expected {}",
                    path.display(),
                    plugin.mod_key,
                    mod_key
                );
            }
            Ok(Some(plugin))
        }
        Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::warn!("Plugin {} is listed but {} does not exist", mod_key, path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
