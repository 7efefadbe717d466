use super::{free, IniFile};
use crate::item::Item;

fn sample() -> IniFile {
    let mut file = IniFile::new();
    file.globals_mut()
        .insert(Item::new("version", "2"))
        .unwrap();

    let user = file.add_section("User").unwrap().unwrap();
    let section = file.section_at_mut(user).unwrap();
    section.items_mut().insert(Item::new("name", "Raspberry")).unwrap();
    section.items_mut().insert(Item::new("value", "Pi")).unwrap();

    file.add_section("Library").unwrap().unwrap();
    file
}

#[test]
fn test_lookup_by_scope() {
    let file = sample();

    assert_eq!(file.get(None, "version"), Some("2"));
    assert_eq!(file.get(Some("User"), "value"), Some("Pi"));
    assert_eq!(file.get(Some("User"), "version"), None);
    assert_eq!(file.get(None, "name"), None);
    assert_eq!(file.get(Some("Nope"), "name"), None);
    assert_eq!(file.global("version").map(Item::value), Some("2"));
}

#[test]
fn test_sections_keep_declaration_order() {
    let file = sample();
    let names: Vec<&str> = file.sections().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["User", "Library"]);
    assert!(file.section("Library").unwrap().items().is_empty());
}

#[test]
fn test_duplicate_section_is_rejected() {
    let mut file = sample();
    assert_eq!(file.add_section("User").unwrap(), None);
    assert_eq!(file.sections().len(), 2);

    // Names are case-sensitive
    assert_eq!(file.add_section("user").unwrap(), Some(2));
}

#[test]
fn test_free_is_safe_without_a_model() {
    free(Some(sample()));
    free(None);
    free(None);
}

#[test]
fn test_serializes_global_and_sections() {
    let json = serde_json::to_value(sample()).unwrap();

    assert_eq!(json["global"]["version"], "2");
    assert_eq!(json["sections"][0]["name"], "User");
    assert_eq!(json["sections"][0]["items"]["name"], "Raspberry");
    assert_eq!(json["sections"][1]["name"], "Library");
    assert!(json.get("section_index").is_none());
}

#[test]
fn test_empty_file() {
    let file = IniFile::new();
    assert!(file.is_empty());
    assert!(!sample().is_empty());
}
