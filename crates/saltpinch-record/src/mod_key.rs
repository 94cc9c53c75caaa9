//! Plugin identifiers
//!
//! Provides [`ModKey`], the name of a layer in the load order, and
//! [`ModType`], the kind of plugin derived from its file extension.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::KeyError;

/// Plugin kind, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModType {
    /// `.esm`
    Master,

    /// `.esl`
    Light,

    /// `.esp`
    Plugin,
}

impl ModType {
    /// File extension without the leading dot
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Master => "esm",
            Self::Light => "esl",
            Self::Plugin => "esp",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("esm") {
            Some(Self::Master)
        } else if ext.eq_ignore_ascii_case("esl") {
            Some(Self::Light)
        } else if ext.eq_ignore_ascii_case("esp") {
            Some(Self::Plugin)
        } else {
            None
        }
    }
}

/// Identifier of one plugin (layer)
///
/// Names compare ASCII case-insensitively, the way the game resolves plugin
/// file names. The original spelling is kept for display.
///
/// # Examples
/// - `Skyrim.esm` → name `Skyrim`, type [`ModType::Master`]
/// - `SaltPinch.esp` → name `SaltPinch`, type [`ModType::Plugin`]
#[derive(Debug, Clone)]
pub struct ModKey {
    name: String,
    mod_type: ModType,
}

impl ModKey {
    /// Create from a base name and type
    ///
    /// # Errors
    /// Returns error if the name is empty or contains path separators
    pub fn new(name: impl Into<String>, mod_type: ModType) -> Result<Self, KeyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KeyError::EmptyModName);
        }
        if name.contains(['/', '\\']) {
            return Err(KeyError::InvalidModName(name));
        }
        Ok(Self { name, mod_type })
    }

    /// Parse from a plugin file name such as `SaltPinch.esp`
    ///
    /// # Errors
    /// Returns error for a missing or unknown extension, or an invalid name
    pub fn from_file_name(file_name: &str) -> Result<Self, KeyError> {
        let (name, ext) = file_name
            .rsplit_once('.')
            .ok_or_else(|| KeyError::MissingExtension(file_name.to_string()))?;
        let mod_type = ModType::from_extension(ext)
            .ok_or_else(|| KeyError::UnknownExtension(ext.to_string()))?;
        Self::new(name, mod_type)
    }

    /// Base name without extension
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin kind
    #[inline]
    #[must_use]
    pub fn mod_type(&self) -> ModType {
        self.mod_type
    }

    /// File name including extension
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.mod_type.extension())
    }
}

impl PartialEq for ModKey {
    fn eq(&self, other: &Self) -> bool {
        self.mod_type == other.mod_type && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for ModKey {}

impl Hash for ModKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        self.mod_type.hash(state);
    }
}

impl Ord for ModKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.name.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.name.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs).then(self.mod_type.cmp(&other.mod_type))
    }
}

impl PartialOrd for ModKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ModKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.mod_type.extension())
    }
}

impl FromStr for ModKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_file_name(s.trim())
    }
}

impl serde::Serialize for ModKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ModKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parses_file_names() {
        let key = ModKey::from_file_name("Skyrim.esm").unwrap();
        assert_eq!(key.name(), "Skyrim");
        assert_eq!(key.mod_type(), ModType::Master);
        assert_eq!(key.file_name(), "Skyrim.esm");

        let key: ModKey = "SaltPinch.esp".parse().unwrap();
        assert_eq!(key.mod_type(), ModType::Plugin);
    }

    #[test]
    fn dotted_names_keep_inner_dots() {
        let key = ModKey::from_file_name("Unofficial.Patch.esp").unwrap();
        assert_eq!(key.name(), "Unofficial.Patch");
    }

    #[test]
    fn rejects_bad_names() {
        assert!(matches!(
            ModKey::from_file_name("NoExtension"),
            Err(KeyError::MissingExtension(_))
        ));
        assert!(matches!(
            ModKey::from_file_name("Readme.txt"),
            Err(KeyError::UnknownExtension(_))
        ));
        assert!(matches!(
            ModKey::from_file_name(".esp"),
            Err(KeyError::EmptyModName)
        ));
        assert!(matches!(
            ModKey::from_file_name("Data/Mod.esp"),
            Err(KeyError::InvalidModName(_))
        ));
    }

    #[test]
    fn equality_ignores_case() {
        let a = ModKey::from_file_name("SaltPinch.esp").unwrap();
        let b = ModKey::from_file_name("saltpinch.ESP").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));

        let master = ModKey::from_file_name("SaltPinch.esm").unwrap();
        assert_ne!(b, master);
    }

    #[test]
    fn display_keeps_original_spelling() {
        let key = ModKey::from_file_name("SaltPinch.ESP").unwrap();
        assert_eq!(key.to_string(), "SaltPinch.esp");
    }
}
