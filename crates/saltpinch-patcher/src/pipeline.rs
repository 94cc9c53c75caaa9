//! Patcher pipeline
//!
//! Ties resolution and generation to the on-disk layout a patch runner
//! hands over: a data folder, a load order file and an output path.
//!
//! # Workflow
//!
//! ```text
//! check-runnability: load order → dependency layer only → resolve
//! run-patcher:       load order → truncate at patch → resolve (dry)
//!                    → load store → resolve → generate → patch layer → write
//! ```

use crate::error::PatchError;
use crate::generator::{PatchGenerator, PatchStats};
use crate::resolver::IdentifierResolver;
use crate::settings::PatcherSettings;
use saltpinch_record::{FormKey, ModKey};
use saltpinch_store::{LoadOrder, Plugin, RecordStore, WinningView};
use std::path::{Path, PathBuf};

/// Inputs of the runnability check
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Folder holding the layer files
    pub data_folder: PathBuf,
    /// Load order file
    pub load_order_path: PathBuf,
}

/// Inputs of a patch run
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Folder holding the layer files
    pub data_folder: PathBuf,
    /// Load order file
    pub load_order_path: PathBuf,
    /// Where the patch layer is written
    pub output_path: PathBuf,
    /// Previous patch to build on
    pub source_path: Option<PathBuf>,
}

/// Result of a patch run
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRun {
    /// Produced patch layer
    pub patch: Plugin,
    /// Replacement item key
    pub target: FormKey,
    /// Generation counters
    pub stats: PatchStats,
}

/// The Salt Pile patcher
#[derive(Debug, Clone, Default)]
pub struct SaltPilePatcher {
    settings: PatcherSettings,
}

impl SaltPilePatcher {
    /// Create patcher with settings
    #[inline]
    #[must_use]
    pub fn new(settings: PatcherSettings) -> Self {
        Self { settings }
    }

    /// Active settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &PatcherSettings {
        &self.settings
    }

    /// Resolver for the configured dependency
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> IdentifierResolver {
        IdentifierResolver::from_settings(&self.settings)
    }

    /// Generator for the configured sentinel
    #[inline]
    #[must_use]
    pub fn generator(&self) -> PatchGenerator {
        PatchGenerator::new(self.settings.sentinel.clone())
    }

    /// Patch plugin key for an output path
    ///
    /// Uses the output file name when it is a plugin name, the configured
    /// patch name otherwise.
    #[must_use]
    pub fn patch_key_for(&self, output_path: &Path) -> ModKey {
        output_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| ModKey::from_file_name(name).ok())
            .unwrap_or_else(|| self.settings.patch_name.clone())
    }

    /// Check the patch can run without loading the full store
    ///
    /// # Errors
    /// - `PatchError::MissingDependency` / `PatchError::UnresolvedIdentifier`
    /// - `PatchError::Store` if the load order or dependency file is unreadable
    pub fn check_runnability(&self, request: &CheckRequest) -> Result<FormKey, PatchError> {
        let load_order = LoadOrder::read_from(&request.load_order_path)?;
        let target = self.resolver().validate(&request.data_folder, &load_order)?;
        tracing::info!(
            "Runnable: {} provides {} as {}",
            self.settings.dependency,
            self.settings.replacement_editor_id,
            target
        );
        Ok(target)
    }

    /// Build the patch layer from a loaded store
    ///
    /// `base` is a previous patch layered above `store`: its copies win, so
    /// recipes it already edited are redirected from its copy and its other
    /// records are kept unchanged.
    ///
    /// # Errors
    /// `PatchError::MissingDependency` / `PatchError::UnresolvedIdentifier`,
    /// raised before any recipe is examined
    pub fn run_patch(
        &self,
        store: &RecordStore,
        patch_key: ModKey,
        base: Option<Plugin>,
    ) -> Result<PatchRun, PatchError> {
        let target = self.resolver().resolve(store)?;

        let mut patch = base.unwrap_or_else(|| Plugin::new(patch_key.clone()));
        patch.mod_key = patch_key;

        let generated = {
            let view = WinningView::build(store.active_layers().chain(std::iter::once(&patch)));
            self.generator().generate_in(&view, &target)
        };

        for overlay in generated.overlays {
            patch.set_override(overlay);
        }
        patch.recompute_masters(store.mod_keys());

        tracing::info!(
            "Scanned {} recipes, patched {} ({} without {}, {} not ingestible, {} not food)",
            generated.stats.scanned,
            generated.stats.patched,
            generated.stats.without_sentinel,
            self.settings.sentinel,
            generated.stats.not_ingestible,
            generated.stats.not_food
        );

        Ok(PatchRun {
            patch,
            target,
            stats: generated.stats,
        })
    }

    /// Run end to end: read inputs, patch, write the patch layer
    ///
    /// Nothing is written when the dependency check fails.
    ///
    /// # Errors
    /// Resolution errors, or `PatchError::Store` for unreadable inputs or an
    /// unwritable output
    pub fn execute(&self, request: &RunRequest) -> Result<PatchRun, PatchError> {
        let patch_key = self.patch_key_for(&request.output_path);
        let load_order = LoadOrder::read_from(&request.load_order_path)?.truncated_at(&patch_key);

        self.resolver().validate(&request.data_folder, &load_order)?;

        let store = RecordStore::load(&request.data_folder, &load_order)?;
        let base = request
            .source_path
            .as_ref()
            .map(Plugin::read_from)
            .transpose()?;

        let run = self.run_patch(&store, patch_key, base)?;
        run.patch.write_to(&request.output_path)?;
        tracing::info!(
            "Wrote {} ({} records) to {}",
            run.patch.mod_key,
            run.patch.len(),
            request.output_path.display()
        );
        Ok(run)
    }
}
