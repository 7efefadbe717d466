//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an inifile.toml, and if present we load settings from there.
//! This provides the parse mode and output format preferences.

use crate::parser::{Mode, ParseOptions};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the preferences file looked up in the working directory.
pub const CONFIG_FILE: &str = "inifile.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from inifile.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Abort on the first duplicate or malformed line instead of skipping it.
    pub strict: bool,
    #[facet(default = false)]
    /// Print parsed files as JSON rather than as an outline.
    pub json: bool,
}

impl Default for Config {
    /// Field defaults as declared on the struct.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

impl Config {
    #[must_use]
    /// Load configuration from inifile.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Parser options matching these preferences.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::with_mode(if self.strict {
            Mode::Strict
        } else {
            Mode::Lenient
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
