//! Key/value items and the ordered, indexed list that owns them.
//!
//! An [`Items`] list belongs either to a section or to the global scope of a file. Insertion
//! order is preserved for iteration and output, while lookups go through a [`KeyIndex`] so that
//! finding a key does not scan the list.

use crate::hash::KeyIndex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::TryReserveError;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A single `key = value` entry.
pub struct Item {
    key: String,
    value: String,
}

impl Item {
    #[must_use]
    /// Creates an item from owned copies of its key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    /// Lookup key, unique within the owning list.
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    /// Value text, trimmed of surrounding whitespace and possibly empty.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered collection of items with unique keys.
pub struct Items {
    entries: Vec<Item>,
    index: KeyIndex,
}

impl Items {
    #[must_use]
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Finds the item stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.index
            .find(key, |pos| self.entries[pos].key())
            .map(|pos| &self.entries[pos])
    }

    #[must_use]
    /// Finds the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Item::value)
    }

    #[must_use]
    /// Whether an item with `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Appends `item` unless its key is already taken.
    ///
    /// Returns `Ok(false)` and drops `item` when the key exists, leaving the earlier item in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot grow.
    pub fn insert(&mut self, item: Item) -> Result<bool, TryReserveError> {
        if self.contains_key(item.key()) {
            return Ok(false);
        }

        self.entries.try_reserve(1)?;
        let pos = self.entries.len();
        self.entries.push(item);

        let entries = &self.entries;
        self.index
            .insert(entries[pos].key(), pos, |p| entries[p].key());

        Ok(true)
    }

    /// Items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.entries.iter()
    }

    #[must_use]
    /// Number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Items {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for item in self {
            map.serialize_entry(item.key(), item.value())?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "tests/item.rs"]
mod tests;
