//! Errors, error hints, and the last-error slot.
//!
//! Every fallible operation in this crate returns an [`IniError`] scoped to that call. Callers
//! that prefer the "check for no model, then ask what went wrong" style use an [`IniReader`],
//! which keeps its own [`DiagnosticSlot`] and clears it before each read.

use crate::ini_file::IniFile;
use crate::parser::{self, ParseOptions};
use crate::tokenize::SplitError;
use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hint text for an unopenable file.
pub const FOPEN_FAIL: &str = "Can't open file for reading. Please check errno";
/// Hint text for a failed allocation.
pub const MALLOC_FAIL: &str = "Couldn't allocate memory! This is bad.";
/// Hint text for a failed read after opening.
pub const READ_FAIL: &str = "Couldn't read a line from the file.";
/// Hint text for a bad section header.
pub const MALFORMED_SECTION: &str = "Section header is missing a bracket or a name.";
/// Hint text for a repeated section header.
pub const DUPLICATE_SECTION: &str = "Section is declared more than once.";
/// Hint text for a content line that isn't `key = value`.
pub const MALFORMED_KEY_VALUE: &str = "Line is not of the form `key = value`.";
/// Hint text for a repeated key.
pub const DUPLICATE_KEY: &str = "Key is declared more than once in the same scope.";
/// Hint text for a block comment left open at end of input.
pub const UNTERMINATED_BLOCK_COMMENT: &str = "Block comment is never closed.";

/// Code used for read failures that carry no OS error code.
pub const READ_FAIL_CODE: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Container that failed to grow.
pub enum AllocTarget {
    /// An item list.
    Items,
    /// The section list of a file.
    Sections,
    /// The buffer lines are read into.
    LineBuffer,
}

impl AllocTarget {
    #[must_use]
    /// Fixed diagnostic code for an allocation failure in this container.
    pub fn code(self) -> i32 {
        match self {
            Self::Items => 5,
            Self::Sections => 6,
            Self::LineBuffer => 7,
        }
    }
}

impl fmt::Display for AllocTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Items => "item list",
            Self::Sections => "section list",
            Self::LineBuffer => "line buffer",
        })
    }
}

/// Everything that can go wrong while reading an INI file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum IniError {
    /// A container could not grow.
    #[error("couldn't allocate memory for the {target}")]
    Allocation {
        /// Container that failed to grow.
        target: AllocTarget,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// The file could not be opened.
    #[error("can't open `{}` for reading", .path.display())]
    FileOpen {
        /// Path passed to the reader.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A line could not be read after the file was opened.
    #[error("failed to read line {line}")]
    Read {
        /// Line that failed to read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A `[...]` header with an empty name.
    #[error("line {line}: malformed section header")]
    MalformedSection {
        /// Offending line.
        line: usize,
    },

    /// A section name seen for the second time.
    #[error("line {line}: duplicate section `{name}`")]
    DuplicateSection {
        /// Offending line.
        line: usize,
        /// Repeated name.
        name: String,
    },

    /// A content line that could not be split into key and value.
    #[error("line {line}: malformed key/value pair: {reason}")]
    MalformedKeyValue {
        /// Offending line.
        line: usize,
        /// What was wrong with it.
        #[source]
        reason: SplitError,
    },

    /// A key seen for the second time within one scope.
    #[error("line {line}: duplicate key `{key}` in {}", scope_label(.section.as_deref()))]
    DuplicateKey {
        /// Offending line.
        line: usize,
        /// Repeated key.
        key: String,
        /// Section holding the key, or `None` for the global scope.
        section: Option<String>,
    },

    /// Input ended inside a block comment.
    #[error("block comment opened on line {opened_at} is never closed")]
    UnterminatedBlockComment {
        /// Line holding the `/*` marker.
        opened_at: usize,
    },
}

fn scope_label(section: Option<&str>) -> String {
    section.map_or_else(|| "global scope".to_string(), |name| format!("section `{name}`"))
}

impl IniError {
    #[must_use]
    /// Numeric diagnostic code.
    ///
    /// Open and read failures report the OS error code; everything else uses a fixed code.
    pub fn code(&self) -> i32 {
        match self {
            Self::Allocation { target, .. } => target.code(),
            Self::FileOpen { source, .. } => source.raw_os_error().unwrap_or(-1),
            Self::Read { source, .. } => source.raw_os_error().unwrap_or(READ_FAIL_CODE),
            Self::MalformedSection { .. } => 10,
            Self::DuplicateSection { .. } => 11,
            Self::MalformedKeyValue { .. } => 12,
            Self::DuplicateKey { .. } => 13,
            Self::UnterminatedBlockComment { .. } => 14,
        }
    }

    #[must_use]
    /// Constant description of this kind of error.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Allocation { .. } => MALLOC_FAIL,
            Self::FileOpen { .. } => FOPEN_FAIL,
            Self::Read { .. } => READ_FAIL,
            Self::MalformedSection { .. } => MALFORMED_SECTION,
            Self::DuplicateSection { .. } => DUPLICATE_SECTION,
            Self::MalformedKeyValue { .. } => MALFORMED_KEY_VALUE,
            Self::DuplicateKey { .. } => DUPLICATE_KEY,
            Self::UnterminatedBlockComment { .. } => UNTERMINATED_BLOCK_COMMENT,
        }
    }

    #[must_use]
    /// Whether this error is reported without ever aborting a parse.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnterminatedBlockComment { .. })
    }

    #[must_use]
    /// Slot-sized summary of this error.
    pub fn hint(&self) -> ErrorHint {
        ErrorHint {
            text: self.text(),
            code: self.code(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A helping hand when a read fails: what kind of thing went wrong, and its code.
pub struct ErrorHint {
    /// Constant message for the error kind.
    pub text: &'static str,
    /// Error code; the OS error code for open failures.
    pub code: i32,
}

#[derive(Clone, Copy, Debug, Default)]
/// Single-slot, last-write-wins error record.
pub struct DiagnosticSlot {
    hint: Option<ErrorHint>,
}

impl DiagnosticSlot {
    /// Overwrites the slot.
    pub fn set(&mut self, text: &'static str, code: i32) {
        self.hint = Some(ErrorHint { text, code });
    }

    #[must_use]
    /// Current hint, if any.
    pub fn get(&self) -> Option<&ErrorHint> {
        self.hint.as_ref()
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.hint = None;
    }
}

#[derive(Debug, Default)]
/// Reads files and keeps the hint for the most recent one.
///
/// Each call to [`IniReader::read_file`] clears the previous hint before doing any work, so
/// [`IniReader::error_hint`] always describes the latest call. A successful read with warnings
/// leaves the last warning in the slot.
pub struct IniReader {
    options: ParseOptions,
    slot: DiagnosticSlot,
}

impl IniReader {
    #[must_use]
    /// Creates a reader that parses with `options`.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            slot: DiagnosticSlot::default(),
        }
    }

    /// Reads and parses `path`, returning `None` on failure.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Option<IniFile> {
        self.slot.clear();

        match parser::read_file(path, self.options) {
            Ok(parsed) => {
                if let Some(warning) = parsed.warnings.last() {
                    self.slot.set(warning.text(), warning.code());
                }
                Some(parsed.file)
            }
            Err(e) => {
                self.slot.set(e.text(), e.code());
                None
            }
        }
    }

    #[must_use]
    /// Hint left by the most recent read.
    pub fn error_hint(&self) -> Option<&ErrorHint> {
        self.slot.get()
    }
}

#[cfg(test)]
#[path = "tests/diagnostic.rs"]
mod tests;
