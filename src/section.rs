//! Section representation for parsed INI files.
//!
//! A section is a named group of items declared by a `[name]` header. Every content line after a
//! header, up to the next header, belongs to that section. Names are case-sensitive and unique
//! within a file.

use crate::item::{Item, Items};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
/// Named, ordered group of items owned exclusively by one file.
pub struct Section {
    /// Header text between the brackets.
    name: String,
    /// Entries declared under the header, in file order.
    items: Items,
}

impl Section {
    #[must_use]
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Items::new(),
        }
    }

    #[must_use]
    /// Header text between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    /// Entries declared under the header.
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Mutable access for inserting entries.
    pub fn items_mut(&mut self) -> &mut Items {
        &mut self.items
    }

    #[must_use]
    /// Finds the item stored under `key` in this section.
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }
}
