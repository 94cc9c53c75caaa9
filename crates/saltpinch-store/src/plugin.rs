//! Plugin layers
//!
//! A [`Plugin`] is one layer of records. On disk a layer is a JSON document
//! named after its [`ModKey`] inside the data folder.

use crate::error::StoreError;
use indexmap::IndexSet;
use saltpinch_record::{FormKey, ModKey, Record};
use std::path::Path;

/// One layer of records
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Plugin {
    /// Layer identifier
    pub mod_key: ModKey,

    /// Layers this one depends on, in load order
    #[serde(default)]
    pub masters: Vec<ModKey>,

    /// Records, in file order
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Plugin {
    /// Create empty layer
    #[inline]
    #[must_use]
    pub fn new(mod_key: ModKey) -> Self {
        Self {
            mod_key,
            masters: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Create layer with records
    #[inline]
    #[must_use]
    pub fn with_records(mod_key: ModKey, records: Vec<Record>) -> Self {
        Self {
            mod_key,
            masters: Vec::new(),
            records,
        }
    }

    /// Find record by key
    #[must_use]
    pub fn record(&self, key: &FormKey) -> Option<&Record> {
        self.records.iter().find(|r| &r.form_key == key)
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the layer has no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert an override, replacing any existing copy of the same key in
    /// place, otherwise appending
    pub fn set_override(&mut self, record: Record) {
        match self
            .records
            .iter_mut()
            .find(|r| r.form_key == record.form_key)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Recompute `masters` from every key this layer's records define or
    /// link to
    ///
    /// Masters follow `load_order`; plugins missing from it come after, in
    /// first-reference order. The layer itself is never its own master.
    pub fn recompute_masters<'a>(&mut self, load_order: impl IntoIterator<Item = &'a ModKey>) {
        let referenced: IndexSet<&ModKey> = self
            .records
            .iter()
            .flat_map(|r| std::iter::once(&r.form_key).chain(r.links()))
            .map(FormKey::mod_key)
            .filter(|m| **m != self.mod_key)
            .collect();

        let mut masters: Vec<ModKey> = load_order
            .into_iter()
            .filter(|m| referenced.contains(m))
            .cloned()
            .collect();
        for m in referenced {
            if !masters.contains(m) {
                masters.push(m.clone());
            }
        }

        self.masters = masters;
    }

    /// Read layer document from `path`
    ///
    /// # Errors
    /// - `StoreError::Io` if the file cannot be read
    /// - `StoreError::Malformed` if it is not a layer document
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| StoreError::io_error(path, e))?;
        serde_json::from_slice(&data).map_err(|e| StoreError::malformed(path, e))
    }

    /// Write layer document to `path` (pretty JSON)
    ///
    /// # Errors
    /// - `StoreError::Encode` if serialization fails
    /// - `StoreError::Io` if the file cannot be written
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let data = serde_json::to_vec_pretty(self).map_err(|source| StoreError::Encode {
            mod_key: self.mod_key.to_string(),
            source,
        })?;
        std::fs::write(path, data).map_err(|e| StoreError::io_error(path, e))
    }
}
