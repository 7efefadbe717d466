//! Line classification for INI text.
//!
//! Each function inspects a single line and answers one question about it. Lines may arrive with
//! or without their trailing newline; a trailing `\n` (or `\r\n`) is ignored by every check that
//! looks at the end of the line. All checks are bounds-safe, so short or empty lines simply fail
//! the checks that need more characters.

const LINE_COMMENT_HASH: u8 = b'#';
const LINE_COMMENT_SEMICOLON: u8 = b';';
const SLASH: u8 = b'/';
const STAR: u8 = b'*';
const LEFT_BRACKET: u8 = b'[';
const RIGHT_BRACKET: u8 = b']';

/// Strip a single trailing line terminator (`\n` or `\r\n`).
#[must_use]
pub fn content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[must_use]
/// Whether the line carries no data.
///
/// Blank lines count as comments, as do lines starting with `#`, `;`, `//`, or `/*`. A line that
/// opens a block comment is itself commented even when text follows the marker.
pub fn is_line_commented(line: &str) -> bool {
    let bytes = content(line).as_bytes();

    match bytes {
        [] | [LINE_COMMENT_HASH | LINE_COMMENT_SEMICOLON, ..] | [SLASH, SLASH | STAR, ..] => true,
        _ => bytes.iter().all(u8::is_ascii_whitespace),
    }
}

#[must_use]
/// Whether the first two characters are `/*`.
pub fn is_begin_block_comment(line: &str) -> bool {
    content(line).as_bytes().starts_with(&[SLASH, STAR])
}

#[must_use]
/// Whether the last two characters before the line terminator are `*/`.
pub fn is_end_block_comment(line: &str) -> bool {
    content(line).as_bytes().ends_with(&[STAR, SLASH])
}

#[must_use]
/// Whether the line is a `[name]` header, with nothing before the `[` or after the `]`.
pub fn is_section_declaration(line: &str) -> bool {
    matches!(
        content(line).as_bytes(),
        [LEFT_BRACKET, .., RIGHT_BRACKET]
    )
}

#[must_use]
/// Text strictly between the brackets of a section header.
///
/// Returns `None` when the line is not a header or the name is empty; the parser reports that as
/// a malformed section.
pub fn section_name(line: &str) -> Option<&str> {
    if !is_section_declaration(line) {
        return None;
    }

    let header = content(line);
    let name = &header[1..header.len() - 1];

    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
