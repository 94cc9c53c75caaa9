//! EditorID lookup over a single layer

use saltpinch_record::{Category, FormKey, Record};
use std::collections::HashMap;

use crate::Plugin;

/// EditorID → record index scoped to one layer
///
/// EditorIDs compare ASCII case-insensitively. When several indexed records
/// share an EditorID, the first in file order is kept.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex<'a> {
    by_editor_id: HashMap<String, &'a Record>,
}

impl<'a> IdentifierIndex<'a> {
    /// Index records of `plugin` whose category passes `filter`
    #[must_use]
    pub fn build(plugin: &'a Plugin, filter: impl Fn(Category) -> bool) -> Self {
        let mut by_editor_id = HashMap::new();
        for record in &plugin.records {
            let Some(editor_id) = record.editor_id.as_deref() else {
                continue;
            };
            if !filter(record.category()) {
                continue;
            }
            by_editor_id
                .entry(editor_id.to_ascii_lowercase())
                .or_insert(record);
        }
        Self { by_editor_id }
    }

    /// Index only item-category records of `plugin`
    #[inline]
    #[must_use]
    pub fn items(plugin: &'a Plugin) -> Self {
        Self::build(plugin, Category::is_item)
    }

    /// Record with this EditorID
    #[inline]
    #[must_use]
    pub fn record(&self, editor_id: &str) -> Option<&'a Record> {
        self.by_editor_id
            .get(&editor_id.to_ascii_lowercase())
            .copied()
    }

    /// Key of the record with this EditorID
    #[inline]
    #[must_use]
    pub fn resolve(&self, editor_id: &str) -> Option<&'a FormKey> {
        self.record(editor_id).map(|r| &r.form_key)
    }

    /// Number of indexed EditorIDs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_editor_id.len()
    }

    /// Check if nothing was indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_editor_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saltpinch_record::{ConstructibleObject, GenericItem, Keyword, RecordBody};

    fn record(form_key: &str, editor_id: &str, body: RecordBody) -> Record {
        Record::new(form_key.parse().unwrap(), Some(editor_id.to_string()), body)
    }

    fn layer() -> Plugin {
        Plugin::with_records(
            "SaltPinch.esp".parse().unwrap(),
            vec![
                record("000800:SaltPinch.esp", "SaltPinch", RecordBody::MiscItem(GenericItem::named("Pinch"))),
                record("000801:SaltPinch.esp", "SaltPinch", RecordBody::Ingredient(GenericItem::default())),
                record("000802:SaltPinch.esp", "RecipeSaltPinch", RecordBody::ConstructibleObject(ConstructibleObject::default())),
                record("000803:SaltPinch.esp", "SaltKeyword", RecordBody::Keyword(Keyword::default())),
            ],
        )
    }

    #[test]
    fn items_only() {
        let plugin = layer();
        let index = IdentifierIndex::items(&plugin);
        assert_eq!(index.len(), 1);
        assert!(index.resolve("RecipeSaltPinch").is_none());
        assert!(index.resolve("SaltKeyword").is_none());
    }

    #[test]
    fn first_duplicate_wins_and_case_is_ignored() {
        let plugin = layer();
        let index = IdentifierIndex::items(&plugin);
        assert_eq!(
            index.resolve("saltpinch").map(ToString::to_string).as_deref(),
            Some("000800:SaltPinch.esp")
        );
    }

    #[test]
    fn custom_filter() {
        let plugin = layer();
        let index = IdentifierIndex::build(&plugin, |c| c == Category::ConstructibleObject);
        assert!(index.resolve("RecipeSaltPinch").is_some());
        assert!(index.resolve("SaltPinch").is_none());
    }
}
