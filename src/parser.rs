//! The line-driven parser that turns INI text into an [`IniFile`].
//!
//! Lines are fed one at a time to a [`Parser`], which tracks two pieces of state: whether it is
//! inside a `/* ... */` block comment, and which scope (global or a section) new items go into.
//!
//! ```text
//! Scanning --"/*" without "*/"--> InBlockComment --line ending "*/"--> Scanning
//!     |                                 |
//!     +-------- end of input -----------+--> Done
//! ```
//!
//! In [`Mode::Strict`] the first structural problem aborts the parse. In [`Mode::Lenient`] the
//! offending line is skipped and recorded as a warning. A block comment still open at the end of
//! input is always a warning.

use crate::classify::{
    content, is_begin_block_comment, is_end_block_comment, is_line_commented,
    is_section_declaration, section_name,
};
use crate::diagnostic::{AllocTarget, IniError};
use crate::ini_file::IniFile;
use crate::item::Item;
use crate::tokenize::split;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Initial capacity of the line buffer, in bytes.
pub const LINE_BUFFER_CAPACITY: usize = 2048;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How structural problems are handled.
pub enum Mode {
    #[default]
    /// Abort on the first malformed line, duplicate section, or duplicate key.
    Strict,
    /// Skip the offending line and keep going.
    ///
    /// A duplicate key keeps its first value. A malformed or duplicate section header skips the
    /// header and every content line until the next valid header.
    Lenient,
}

#[derive(Clone, Copy, Debug, Default)]
/// Settings for a parse.
pub struct ParseOptions {
    /// Conflict and malformed-line handling.
    pub mode: Mode,
}

impl ParseOptions {
    #[must_use]
    /// Options for the given mode.
    pub fn with_mode(mode: Mode) -> Self {
        Self { mode }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the parser is in its line-by-line scan.
pub enum State {
    /// Classifying lines normally.
    Scanning,
    /// Discarding lines until one ends with `*/`.
    InBlockComment {
        /// Line holding the `/*` marker.
        opened_at: usize,
    },
    /// Input is exhausted or a fatal error occurred; further lines are ignored.
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Global,
    Section(usize),
    /// Content under a rejected header, dropped in lenient mode.
    Discard,
}

#[derive(Debug)]
/// A successfully parsed file and the non-fatal problems met along the way.
pub struct Parsed {
    /// The parsed model.
    pub file: IniFile,
    /// Skipped lines in lenient mode, plus any unterminated block comment, in input order.
    pub warnings: Vec<IniError>,
}

#[derive(Debug)]
/// Incremental parser fed one line at a time.
pub struct Parser {
    options: ParseOptions,
    state: State,
    scope: Scope,
    line: usize,
    file: IniFile,
    warnings: Vec<IniError>,
}

impl Parser {
    #[must_use]
    /// Creates a parser in the [`State::Scanning`] state with an empty model.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            state: State::Scanning,
            scope: Scope::Global,
            line: 0,
            file: IniFile::new(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    /// Current scan state.
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    /// Number of lines fed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Processes the next line of input.
    ///
    /// The line may include its trailing newline. After a fatal error the parser is
    /// [`State::Done`] and ignores further lines.
    ///
    /// # Errors
    ///
    /// Returns an allocation error, or in strict mode the first structural error.
    pub fn feed(&mut self, line: &str) -> Result<(), IniError> {
        if self.state == State::Done {
            return Ok(());
        }

        self.line += 1;
        let result = self.step(line);
        if result.is_err() {
            self.state = State::Done;
        }
        result
    }

    #[must_use]
    /// Ends the input and hands back the model.
    pub fn finish(mut self) -> Parsed {
        if let State::InBlockComment { opened_at } = self.state {
            warn!(opened_at, "input ended inside a block comment");
            self.warnings
                .push(IniError::UnterminatedBlockComment { opened_at });
        }
        self.state = State::Done;

        Parsed {
            file: self.file,
            warnings: self.warnings,
        }
    }

    fn step(&mut self, line: &str) -> Result<(), IniError> {
        if let State::InBlockComment { opened_at } = self.state {
            if is_end_block_comment(line) {
                debug!(opened_at, closed_at = self.line, "block comment closed");
                self.state = State::Scanning;
            }
            return Ok(());
        }

        if is_begin_block_comment(line) && !is_end_block_comment(line) {
            debug!(line = self.line, "block comment opened");
            self.state = State::InBlockComment {
                opened_at: self.line,
            };
            return Ok(());
        }

        if is_line_commented(line) {
            trace!(line = self.line, "comment");
            return Ok(());
        }

        // A line opening with `[` is a header, well-formed or not
        if is_section_declaration(line) || content(line).starts_with('[') {
            return self.open_section(line);
        }

        self.add_item(line)
    }

    fn open_section(&mut self, line: &str) -> Result<(), IniError> {
        let Some(name) = section_name(line) else {
            return self.reject(IniError::MalformedSection { line: self.line }, true);
        };

        match self.file.add_section(name) {
            Ok(Some(pos)) => {
                debug!(line = self.line, section = name, "section opened");
                self.scope = Scope::Section(pos);
                Ok(())
            }
            Ok(None) => self.reject(
                IniError::DuplicateSection {
                    line: self.line,
                    name: name.to_string(),
                },
                true,
            ),
            Err(source) => Err(IniError::Allocation {
                target: AllocTarget::Sections,
                source,
            }),
        }
    }

    fn add_item(&mut self, line: &str) -> Result<(), IniError> {
        let section = match self.scope {
            Scope::Discard => {
                trace!(line = self.line, "dropped under rejected header");
                return Ok(());
            }
            Scope::Global => None,
            Scope::Section(pos) => Some(pos),
        };

        let (key, value) = match split(content(line)) {
            Ok(pair) => pair,
            Err(reason) => {
                return self.reject(
                    IniError::MalformedKeyValue {
                        line: self.line,
                        reason,
                    },
                    false,
                );
            }
        };

        match self.file.items_in(section).insert(Item::new(key, value)) {
            Ok(true) => {
                trace!(line = self.line, key, "item");
                Ok(())
            }
            Ok(false) => {
                let section = section.map(|pos| self.file.sections()[pos].name().to_string());
                self.reject(
                    IniError::DuplicateKey {
                        line: self.line,
                        key: key.to_string(),
                        section,
                    },
                    false,
                )
            }
            Err(source) => Err(IniError::Allocation {
                target: AllocTarget::Items,
                source,
            }),
        }
    }

    /// Fails in strict mode; records a warning in lenient mode.
    ///
    /// `discard_scope` drops the content that follows a rejected section header.
    fn reject(&mut self, error: IniError, discard_scope: bool) -> Result<(), IniError> {
        match self.options.mode {
            Mode::Strict => Err(error),
            Mode::Lenient => {
                warn!(%error, "skipping line");
                if discard_scope {
                    self.scope = Scope::Discard;
                }
                self.warnings.push(error);
                Ok(())
            }
        }
    }
}

/// Parses every line from `reader`.
///
/// # Errors
///
/// Returns the first fatal error: a read or allocation failure, or in strict mode a structural
/// problem. The partially built model is dropped.
pub fn parse_reader<R: BufRead>(mut reader: R, options: ParseOptions) -> Result<Parsed, IniError> {
    let mut parser = Parser::new(options);
    let mut buffer = String::new();
    buffer
        .try_reserve(LINE_BUFFER_CAPACITY)
        .map_err(|source| IniError::Allocation {
            target: AllocTarget::LineBuffer,
            source,
        })?;

    loop {
        buffer.clear();
        let read = reader
            .read_line(&mut buffer)
            .map_err(|source| IniError::Read {
                line: parser.line() + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        parser.feed(&buffer)?;
    }

    Ok(parser.finish())
}

/// Parses INI text held in memory.
///
/// # Errors
///
/// See [`parse_reader`].
pub fn parse_str(text: &str, options: ParseOptions) -> Result<Parsed, IniError> {
    parse_reader(text.as_bytes(), options)
}

/// Opens and parses the file at `path`.
///
/// # Errors
///
/// Returns [`IniError::FileOpen`] carrying the OS error if the file cannot be opened, otherwise
/// see [`parse_reader`].
pub fn read_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Parsed, IniError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IniError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_reader(BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        globals = parsed.file.globals().len(),
        sections = parsed.file.sections().len(),
        warnings = parsed.warnings.len(),
        "parsed ini file"
    );
    Ok(parsed)
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
