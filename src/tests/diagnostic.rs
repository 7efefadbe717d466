use super::{
    DiagnosticSlot, IniError, IniReader, DUPLICATE_KEY, FOPEN_FAIL, UNTERMINATED_BLOCK_COMMENT,
};
use crate::parser::{Mode, ParseOptions};
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

#[test]
fn test_slot_set_get_clear() {
    let mut slot = DiagnosticSlot::default();
    assert!(slot.get().is_none());

    slot.set("test", -1);
    let hint = slot.get().unwrap();
    assert_eq!(hint.code, -1);
    assert_eq!(hint.text, "test");

    slot.set("second", 3);
    assert_eq!(slot.get().unwrap().text, "second");

    slot.clear();
    assert!(slot.get().is_none());
}

#[test]
fn test_reader_reports_missing_file() {
    let mut reader = IniReader::default();

    assert!(reader.read_file("/nonexistent/path").is_none());
    let hint = reader.error_hint().unwrap();
    assert_eq!(hint.text, FOPEN_FAIL);
    #[cfg(unix)]
    assert_eq!(hint.code, 2);
}

#[test]
fn test_reader_clears_stale_hint() {
    let good = fixture("[s]\nk=v\n");
    let mut reader = IniReader::default();

    assert!(reader.read_file("/nonexistent/path").is_none());
    assert!(reader.error_hint().is_some());

    let file = reader.read_file(good.path()).unwrap();
    assert!(reader.error_hint().is_none());
    assert_eq!(file.get(Some("s"), "k"), Some("v"));
}

#[test]
fn test_reader_strict_failure_returns_no_model() {
    let dup = fixture("[s]\nk=1\nk=2\n");
    let mut reader = IniReader::new(ParseOptions::with_mode(Mode::Strict));

    assert!(reader.read_file(dup.path()).is_none());
    let hint = reader.error_hint().unwrap();
    assert_eq!(hint.text, DUPLICATE_KEY);
    assert_eq!(hint.code, 13);
}

#[test]
fn test_reader_keeps_last_warning() {
    let text = fixture("[s]\nk=1\nk=2\n/* open\n");
    let mut reader = IniReader::new(ParseOptions::with_mode(Mode::Lenient));

    let file = reader.read_file(text.path()).unwrap();
    assert_eq!(file.get(Some("s"), "k"), Some("1"));
    assert_eq!(reader.error_hint().unwrap().text, UNTERMINATED_BLOCK_COMMENT);
}

#[test]
fn test_error_messages_name_the_line() {
    let err = IniError::DuplicateKey {
        line: 7,
        key: "k".to_string(),
        section: None,
    };
    assert_eq!(err.to_string(), "line 7: duplicate key `k` in global scope");

    let err = IniError::DuplicateKey {
        line: 2,
        key: "k".to_string(),
        section: Some("s".to_string()),
    };
    assert_eq!(err.to_string(), "line 2: duplicate key `k` in section `s`");
    assert!(!err.is_warning());
}
