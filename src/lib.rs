//! inifile: a reader for INI-style configuration files.
//!
//! Text is classified line by line into comments, block comments, section headers and
//! `key = value` entries, and collected into an [`IniFile`] of global items and named sections.
//! Keys and section names are indexed by a rolling hash for lookup.
//!
//! ```
//! use inifile::{parse_str, ParseOptions};
//!
//! let parsed = parse_str("[server]\nport = 8080\n", ParseOptions::default()).unwrap();
//! assert_eq!(parsed.file.get(Some("server"), "port"), Some("8080"));
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod hash;
pub mod ini_file;
pub mod item;
pub mod parser;
pub mod section;
pub mod tokenize;

pub use diagnostic::{ErrorHint, IniError, IniReader};
pub use ini_file::{free, IniFile};
pub use item::{Item, Items};
pub use parser::{parse_reader, parse_str, read_file, Mode, ParseOptions, Parsed};
pub use section::Section;
