//! Patcher settings
//!
//! Defaults reproduce the stock patch: replace `034CDF:Skyrim.esm` (Salt
//! Pile) with the `SaltPinch` item from `SaltPinch.esp`, writing
//! `SaltPilePatcher.esp`. A `settings.toml` in the extra data folder may
//! override any field.

use crate::error::SettingsError;
use saltpinch_record::skyrim::salt_pile;
use saltpinch_record::{FormKey, ModKey, ModType};
use std::path::Path;

/// Settings file name looked up in the extra data folder
pub const SETTINGS_FILE: &str = "settings.toml";

/// Patcher configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatcherSettings {
    /// Plugin that must be loaded and supplies the replacement item
    pub dependency: ModKey,

    /// EditorID of the replacement item inside `dependency`
    pub replacement_editor_id: String,

    /// Ingredient being replaced
    pub sentinel: FormKey,

    /// Patch plugin name when the output path does not name one
    pub patch_name: ModKey,
}

impl PatcherSettings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With dependency plugin
    #[inline]
    #[must_use]
    pub fn with_dependency(mut self, dependency: ModKey) -> Self {
        self.dependency = dependency;
        self
    }

    /// With replacement EditorID
    #[inline]
    #[must_use]
    pub fn with_replacement_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.replacement_editor_id = editor_id.into();
        self
    }

    /// With sentinel ingredient
    #[inline]
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: FormKey) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// With default patch name
    #[inline]
    #[must_use]
    pub fn with_patch_name(mut self, patch_name: ModKey) -> Self {
        self.patch_name = patch_name;
        self
    }

    /// Check settings are usable
    ///
    /// # Errors
    /// Returns `SettingsError::Invalid` for an empty EditorID or a patch
    /// that would overwrite its own dependency
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.replacement_editor_id.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "replacement_editor_id must not be empty".to_string(),
            ));
        }
        if self.patch_name == self.dependency {
            return Err(SettingsError::Invalid(format!(
                "patch_name must differ from dependency ({})",
                self.dependency
            )));
        }
        Ok(())
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns `SettingsError::Parse` or `SettingsError::Invalid`
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file
    ///
    /// # Errors
    /// Returns `SettingsError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_toml`]
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Settings from `settings.toml` in `extra_data_folder` when present,
    /// defaults otherwise
    ///
    /// # Errors
    /// As [`Self::read_from`] when the file exists
    pub fn discover(extra_data_folder: Option<&Path>) -> Result<Self, SettingsError> {
        match extra_data_folder.map(|dir| dir.join(SETTINGS_FILE)) {
            Some(path) if path.is_file() => {
                tracing::debug!("Reading settings from {}", path.display());
                Self::read_from(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Default for PatcherSettings {
    fn default() -> Self {
        Self {
            dependency: literal_mod_key("SaltPinch", ModType::Plugin),
            replacement_editor_id: "SaltPinch".to_string(),
            sentinel: salt_pile(),
            patch_name: literal_mod_key("SaltPilePatcher", ModType::Plugin),
        }
    }
}

fn literal_mod_key(name: &str, mod_type: ModType) -> ModKey {
    ModKey::new(name, mod_type).unwrap_or_else(|_| unreachable!("literal name"))
}
