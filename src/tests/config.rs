use super::Config;
use crate::parser::Mode;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/inifile.toml"));
    assert_eq!(config, Config::default());
    assert!(config.strict);
    assert!(!config.json);
    assert_eq!(config.parse_options().mode, Mode::Strict);
}

#[test]
fn test_loads_preferences() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "strict = false\njson = true").unwrap();

    let config = Config::load_from(file.path());
    assert!(!config.strict);
    assert!(config.json);
    assert_eq!(config.parse_options().mode, Mode::Lenient);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "json = true").unwrap();

    let config = Config::load_from(file.path());
    assert!(config.strict);
    assert!(config.json);
}

#[test]
fn test_default_matches_empty_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file).unwrap();

    assert_eq!(Config::load_from(file.path()), Config::default());
}
