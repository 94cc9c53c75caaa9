//! Ingestibles (food, potions, poisons)

use bitflags::bitflags;

bitflags! {
    /// Ingestible record flags
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct IngestibleFlags: u32 {
        /// Value is not recalculated from effects
        const NO_AUTO_CALC = 0x0000_0001;
        /// Food item
        const FOOD_ITEM    = 0x0000_0002;
        /// Medicine
        const MEDICINE     = 0x0001_0000;
        /// Poison
        const POISON       = 0x0002_0000;
    }
}

/// Ingestible payload
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ingestible {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Gold value
    #[serde(default)]
    pub value: u32,

    /// Carry weight
    #[serde(default)]
    pub weight: f32,

    /// Record flags
    #[serde(default)]
    pub flags: IngestibleFlags,
}

impl Ingestible {
    /// Create with flags only
    #[inline]
    #[must_use]
    pub fn new(flags: IngestibleFlags) -> Self {
        Self {
            flags,
            ..Default::default()
        }
    }

    /// Whether the food flag is set
    #[inline]
    #[must_use]
    pub fn is_food(&self) -> bool {
        self.flags.contains(IngestibleFlags::FOOD_ITEM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_flag() {
        assert!(Ingestible::new(IngestibleFlags::FOOD_ITEM).is_food());
        assert!(Ingestible::new(IngestibleFlags::FOOD_ITEM | IngestibleFlags::NO_AUTO_CALC).is_food());
        assert!(!Ingestible::new(IngestibleFlags::MEDICINE).is_food());
        assert!(!Ingestible::default().is_food());
    }

    #[test]
    fn flags_deserialize_from_names() {
        let alch: Ingestible =
            serde_json::from_str(r#"{"flags": "NO_AUTO_CALC | FOOD_ITEM"}"#).unwrap();
        assert!(alch.is_food());
        assert!(alch.flags.contains(IngestibleFlags::NO_AUTO_CALC));
    }
}
