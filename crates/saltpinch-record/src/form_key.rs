//! Stable record keys
//!
//! Provides [`FormKey`], the identifier a record keeps across every layer
//! that overrides it.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{KeyError, ModKey};

/// Largest local id a form key may carry (24 bits)
pub const MAX_FORM_ID: u32 = 0x00FF_FFFF;

/// Stable key of a record
///
/// A 24-bit local id plus the plugin that originally defined the record.
/// Overrides in later plugins keep the same key.
///
/// Text form is `XXXXXX:Plugin.ext`, e.g. `034CDF:Skyrim.esm`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormKey {
    mod_key: ModKey,
    id: u32,
}

impl FormKey {
    /// Create from defining plugin and local id
    ///
    /// # Errors
    /// Returns error if `id` does not fit in 24 bits
    pub fn new(mod_key: ModKey, id: u32) -> Result<Self, KeyError> {
        if id > MAX_FORM_ID {
            return Err(KeyError::IdOutOfRange(id));
        }
        Ok(Self { mod_key, id })
    }

    /// Plugin that defined the record
    #[inline]
    #[must_use]
    pub fn mod_key(&self) -> &ModKey {
        &self.mod_key
    }

    /// Local id within the defining plugin
    #[inline]
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Display for FormKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}:{}", self.id, self.mod_key)
    }
}

impl FromStr for FormKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, mod_name) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| KeyError::MalformedFormKey(s.to_string()))?;

        if id.is_empty() || id.len() > 6 || !id.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(KeyError::MalformedFormKey(s.to_string()));
        }
        let id = u32::from_str_radix(id, 16)
            .map_err(|_| KeyError::MalformedFormKey(s.to_string()))?;

        Self::new(ModKey::from_file_name(mod_name)?, id)
    }
}

impl serde::Serialize for FormKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for FormKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
