//! Crafting recipes

use crate::FormKey;

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerEntry {
    /// Linked item record
    pub item: FormKey,

    /// Quantity consumed
    pub count: i32,
}

impl ContainerEntry {
    /// Create entry
    #[inline]
    #[must_use]
    pub fn new(item: FormKey, count: i32) -> Self {
        Self { item, count }
    }
}

/// Recipe payload (constructible object)
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConstructibleObject {
    /// Ingredient lines, in order; `None` when the record has no list at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ContainerEntry>>,

    /// Record produced by the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_object: Option<FormKey>,

    /// Number of produced records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_object_count: Option<u16>,

    /// Crafting station keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbench_keyword: Option<FormKey>,
}

impl ConstructibleObject {
    /// Ingredient lines, empty when the list is absent
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ContainerEntry] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Whether any ingredient line links to `item`
    #[inline]
    #[must_use]
    pub fn uses_item(&self, item: &FormKey) -> bool {
        self.entries().iter().any(|entry| &entry.item == item)
    }

    /// First ingredient line linking to `item`
    #[inline]
    pub fn first_entry_mut(&mut self, item: &FormKey) -> Option<&mut ContainerEntry> {
        self.items
            .as_mut()?
            .iter_mut()
            .find(|entry| &entry.item == item)
    }

    /// Every linked form key: ingredients, product, then workbench
    #[must_use]
    pub fn links(&self) -> Vec<&FormKey> {
        self.entries()
            .iter()
            .map(|entry| &entry.item)
            .chain(self.created_object.as_ref())
            .chain(self.workbench_keyword.as_ref())
            .collect()
    }
}
