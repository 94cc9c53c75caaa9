//! Winning-override resolution
//!
//! [`WinningView`] collapses every layer of a load order into one record per
//! [`FormKey`]: the copy from the highest-priority (last-loaded) layer. It is
//! an immutable snapshot borrowing the layers it was built from.

use indexmap::IndexMap;
use saltpinch_record::{Category, FormKey, ModKey, Record};

use crate::Plugin;

/// Winning copy of one record and the layer it came from
#[derive(Debug, Clone, Copy)]
pub struct WinningRecord<'a> {
    /// Highest-priority copy
    pub record: &'a Record,
    /// Layer that supplied it
    pub origin: &'a ModKey,
}

/// Priority-ordered snapshot of winning records
///
/// Iteration order is priority order: layers from last-loaded to
/// first-loaded, records within a layer in file order, each key appearing
/// once at the position of its winning copy.
#[derive(Debug, Clone, Default)]
pub struct WinningView<'a> {
    records: IndexMap<&'a FormKey, WinningRecord<'a>>,
}

impl<'a> WinningView<'a> {
    /// Merge layers given in load order (first = lowest priority)
    #[must_use]
    pub fn build<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a Plugin>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut records = IndexMap::new();
        for plugin in layers.into_iter().rev() {
            for record in &plugin.records {
                records
                    .entry(&record.form_key)
                    .or_insert(WinningRecord {
                        record,
                        origin: &plugin.mod_key,
                    });
            }
        }
        Self { records }
    }

    /// Winning copy of a record
    #[inline]
    #[must_use]
    pub fn get(&self, key: &FormKey) -> Option<&'a Record> {
        self.records.get(key).map(|w| w.record)
    }

    /// Winning copy with its origin layer
    #[inline]
    #[must_use]
    pub fn get_with_origin(&self, key: &FormKey) -> Option<WinningRecord<'a>> {
        self.records.get(key).copied()
    }

    /// Resolve a link, requiring the winning copy to have `category`
    #[inline]
    #[must_use]
    pub fn resolve(&self, key: &FormKey, category: Category) -> Option<&'a Record> {
        self.get(key).filter(|r| r.category() == category)
    }

    /// All winning records in priority order
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.values().map(|w| w.record)
    }

    /// Winning records of one category in priority order
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &'a Record> + '_ {
        self.iter().filter(move |r| r.category() == category)
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no layer had records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
