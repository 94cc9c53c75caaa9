//! Plain item payloads and keywords

/// Payload shared by item categories without recipe-relevant fields
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenericItem {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Gold value
    #[serde(default)]
    pub value: u32,

    /// Carry weight
    #[serde(default)]
    pub weight: f32,
}

impl GenericItem {
    /// Item with a display name and zero value/weight
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Keyword payload
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Keyword {
    /// Editor color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}
