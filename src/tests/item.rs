use super::{Item, Items};

#[test]
fn test_insert_preserves_order_and_indexes() {
    let mut items = Items::new();
    for (k, v) in [("name", "Raspberry"), ("value", "Pi"), ("alpha", "1")] {
        assert!(items.insert(Item::new(k, v)).unwrap());
    }

    let keys: Vec<&str> = items.iter().map(Item::key).collect();
    assert_eq!(keys, ["name", "value", "alpha"]);
    assert_eq!(items.value("value"), Some("Pi"));
    assert_eq!(items.get("alpha"), Some(&Item::new("alpha", "1")));
    assert!(items.get("missing").is_none());
}

#[test]
fn test_duplicate_key_keeps_first() {
    let mut items = Items::new();
    assert!(items.insert(Item::new("k", "1")).unwrap());
    assert!(!items.insert(Item::new("k", "2")).unwrap());

    assert_eq!(items.len(), 1);
    assert_eq!(items.value("k"), Some("1"));
}

#[test]
fn test_keys_are_case_sensitive() {
    let mut items = Items::new();
    assert!(items.insert(Item::new("Key", "upper")).unwrap());
    assert!(items.insert(Item::new("key", "lower")).unwrap());

    assert_eq!(items.value("Key"), Some("upper"));
    assert_eq!(items.value("key"), Some("lower"));
}

#[test]
fn test_lookup_survives_index_growth() {
    let mut items = Items::new();
    for i in 0..500 {
        assert!(items.insert(Item::new(format!("k{i}"), i.to_string())).unwrap());
    }

    assert_eq!(items.len(), 500);
    for i in (0..500).step_by(37) {
        assert_eq!(items.value(&format!("k{i}")), Some(i.to_string().as_str()));
    }
}

#[test]
fn test_serializes_as_ordered_map() {
    let mut items = Items::new();
    items.insert(Item::new("z", "last")).unwrap();
    items.insert(Item::new("a", "")).unwrap();

    let json = serde_json::to_string(&items).unwrap();
    assert_eq!(json, r#"{"z":"last","a":""}"#);
}
