//! Load order listings
//!
//! Parses `plugins.txt`-style load order files into an ordered list of
//! [`LoadOrderEntry`] values. Earlier entries load first; later entries win.

use crate::error::StoreError;
use saltpinch_record::ModKey;
use std::path::Path;
use std::str::FromStr;

/// One line of the load order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrderEntry {
    /// Listed plugin
    pub mod_key: ModKey,
    /// Whether the plugin is active
    pub enabled: bool,
}

/// Ordered plugin listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOrder {
    entries: Vec<LoadOrderEntry>,
}

impl LoadOrder {
    /// Create from entries
    #[inline]
    #[must_use]
    pub fn new(entries: Vec<LoadOrderEntry>) -> Self {
        Self { entries }
    }

    /// Every listed plugin enabled, in the given order
    #[must_use]
    pub fn enabled(mod_keys: impl IntoIterator<Item = ModKey>) -> Self {
        Self {
            entries: mod_keys
                .into_iter()
                .map(|mod_key| LoadOrderEntry {
                    mod_key,
                    enabled: true,
                })
                .collect(),
        }
    }

    /// Read and parse a load order file
    ///
    /// # Errors
    /// - `StoreError::Io` if the file cannot be read
    /// - `StoreError::LoadOrderEntry` for a line that is not a plugin name
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::io_error(path, e))?;
        text.parse()
    }

    /// All entries, in load order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LoadOrderEntry] {
        &self.entries
    }

    /// Enabled plugins, in load order
    pub fn active(&self) -> impl Iterator<Item = &ModKey> {
        self.entries.iter().filter(|e| e.enabled).map(|e| &e.mod_key)
    }

    /// Entry for a plugin, if listed
    #[must_use]
    pub fn get(&self, mod_key: &ModKey) -> Option<&LoadOrderEntry> {
        self.entries.iter().find(|e| &e.mod_key == mod_key)
    }

    /// Whether a plugin is listed and enabled
    #[inline]
    #[must_use]
    pub fn is_active(&self, mod_key: &ModKey) -> bool {
        self.get(mod_key).is_some_and(|e| e.enabled)
    }

    /// Drop `mod_key` and everything listed after it
    ///
    /// A patch never reads itself or plugins that load after it.
    #[must_use]
    pub fn truncated_at(mut self, mod_key: &ModKey) -> Self {
        if let Some(pos) = self.entries.iter().position(|e| &e.mod_key == mod_key) {
            self.entries.truncate(pos);
        }
        self
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is listed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for LoadOrder {
    type Err = StoreError;

    /// Blank lines and `#` comments are skipped. A leading `*` marks an
    /// enabled entry; when no line uses `*`, every entry is enabled.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::new();
        for (idx, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (starred, name) = match line.strip_prefix('*') {
                Some(rest) => (true, rest.trim()),
                None => (false, line),
            };
            let mod_key = ModKey::from_file_name(name).map_err(|source| {
                StoreError::LoadOrderEntry {
                    line: idx + 1,
                    source,
                }
            })?;
            parsed.push((mod_key, starred));
        }

        let uses_stars = parsed.iter().any(|(_, starred)| *starred);
        let entries = parsed
            .into_iter()
            .map(|(mod_key, starred)| LoadOrderEntry {
                mod_key,
                enabled: starred || !uses_stars,
            })
            .collect();

        Ok(Self { entries })
    }
}
