//! The root of a parsed INI document.
//!
//! An [`IniFile`] owns its global items and every section, and each section owns its items. The
//! tree has no sharing, so dropping the file releases everything beneath it.

use crate::hash::KeyIndex;
use crate::item::{Item, Items};
use crate::section::Section;
use serde::Serialize;
use std::collections::TryReserveError;

#[derive(Clone, Debug, Default, Serialize)]
/// Global items plus all sections, in file order.
pub struct IniFile {
    /// Items that appear before the first section header.
    #[serde(rename = "global")]
    globals: Items,
    /// Sections in declaration order.
    sections: Vec<Section>,
    #[serde(skip)]
    section_index: KeyIndex,
}

impl IniFile {
    #[must_use]
    /// Creates an empty file.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Items declared before any section header.
    pub fn globals(&self) -> &Items {
        &self.globals
    }

    /// Mutable access to the global items.
    pub fn globals_mut(&mut self) -> &mut Items {
        &mut self.globals
    }

    #[must_use]
    /// All sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Finds the global item stored under `key`.
    pub fn global(&self, key: &str) -> Option<&Item> {
        self.globals.get(key)
    }

    #[must_use]
    /// Finds a section by its exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_position(name).map(|pos| &self.sections[pos])
    }

    #[must_use]
    /// Finds the value of `key`, in section `section` or among the globals when `section` is
    /// `None`.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        match section {
            Some(name) => self.section(name)?.items().value(key),
            None => self.globals.value(key),
        }
    }

    /// Appends an empty section named `name` and returns its position.
    ///
    /// Returns `Ok(None)` when a section with that name already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the section list cannot grow.
    pub fn add_section(&mut self, name: &str) -> Result<Option<usize>, TryReserveError> {
        if self.section_position(name).is_some() {
            return Ok(None);
        }

        self.sections.try_reserve(1)?;
        let pos = self.sections.len();
        self.sections.push(Section::new(name));

        let sections = &self.sections;
        self.section_index
            .insert(name, pos, |p| sections[p].name());

        Ok(Some(pos))
    }

    /// Section at `pos`, as returned by [`IniFile::add_section`].
    pub fn section_at_mut(&mut self, pos: usize) -> Option<&mut Section> {
        self.sections.get_mut(pos)
    }

    /// Items of the section at `pos`, or the global items for `None`.
    ///
    /// `pos` must come from [`IniFile::add_section`] on this file.
    pub(crate) fn items_in(&mut self, section: Option<usize>) -> &mut Items {
        match section {
            Some(pos) => self.sections[pos].items_mut(),
            None => &mut self.globals,
        }
    }

    #[must_use]
    /// Whether the file holds no items and no sections.
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.sections.is_empty()
    }

    fn section_position(&self, name: &str) -> Option<usize> {
        self.section_index.find(name, |pos| self.sections[pos].name())
    }
}

/// Releases a parsed file and everything it owns.
///
/// Accepts `None` so callers can release the result of a failed read without checking it first.
pub fn free(file: Option<IniFile>) {
    if let Some(file) = file {
        tracing::trace!(sections = file.sections.len(), "releasing ini file");
        drop(file);
    }
}

#[cfg(test)]
#[path = "tests/ini_file.rs"]
mod tests;
