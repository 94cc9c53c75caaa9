//! Error types for the patcher
//!
//! Both resolution failures are fatal and raised before any recipe is
//! examined, so no partial patch is ever produced.

use saltpinch_record::ModKey;
use saltpinch_store::StoreError;
use std::path::PathBuf;

/// Errors aborting a patch run
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// Dependency plugin is not listed, not enabled or not on disk
    #[error("File \"{plugin}\" not found. This mod is required for this patch.")]
    MissingDependency {
        /// Required plugin
        plugin: ModKey,
    },

    /// Dependency plugin has no item record with the EditorID
    #[error("Item record with EditorID \"{editor_id}\" not found in \"{plugin}\"")]
    UnresolvedIdentifier {
        /// EditorID looked up
        editor_id: String,
        /// Plugin searched
        plugin: ModKey,
    },

    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Settings failure
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl PatchError {
    /// Create missing dependency error
    #[inline]
    #[must_use]
    pub fn missing_dependency(plugin: &ModKey) -> Self {
        Self::MissingDependency {
            plugin: plugin.clone(),
        }
    }

    /// Create unresolved identifier error
    #[inline]
    #[must_use]
    pub fn unresolved_identifier(editor_id: impl Into<String>, plugin: &ModKey) -> Self {
        Self::UnresolvedIdentifier {
            editor_id: editor_id.into(),
            plugin: plugin.clone(),
        }
    }
}

/// Errors loading patcher settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error reading the settings file
    #[error("io error reading {path}: {source}")]
    Io {
        /// Settings file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the settings schema
    #[error("invalid settings in {path}: {source}")]
    Parse {
        /// Settings file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Settings parsed but are unusable
    #[error("invalid settings: {0}")]
    Invalid(String),
}
