//! Splitting content lines into a key and a value.

use thiserror::Error;

/// Separates the key from the value on a content line.
pub const DELIMITER: char = '=';

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Why a content line could not be split.
pub enum SplitError {
    /// The line has no `=`.
    #[error("missing `=` delimiter")]
    MissingDelimiter,
    /// Nothing but whitespace precedes the `=`.
    #[error("empty key")]
    EmptyKey,
}

/// Split a content line at its first `=`.
///
/// Both halves are trimmed of surrounding whitespace, including any line terminator. The value
/// may be empty; the key may not. Later `=` characters belong to the value.
///
/// # Errors
///
/// Returns [`SplitError`] when the delimiter is missing or the key is empty.
pub fn split(line: &str) -> Result<(&str, &str), SplitError> {
    let (key, value) = line
        .split_once(DELIMITER)
        .ok_or(SplitError::MissingDelimiter)?;

    let key = key.trim();
    if key.is_empty() {
        return Err(SplitError::EmptyKey);
    }

    Ok((key, value.trim()))
}

#[cfg(test)]
#[path = "tests/tokenize.rs"]
mod tests;
