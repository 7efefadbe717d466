use super::{hash, KeyIndex, HASH_MODULUS};

#[test]
fn test_known_hashes() {
    assert_eq!(hash("a"), 276);
    assert_eq!(hash("ab"), 49502);
    assert_eq!(hash(""), 1);
}

#[test]
fn test_hash_is_deterministic_and_bounded() {
    let long = "Josh is really cool, and this is just some filler to create a very long string!";
    for key in ["hello world", long, "ключ", "k"] {
        let first = hash(key);
        assert_eq!(first, hash(key));
        assert!(first < HASH_MODULUS);
        assert_ne!(first, 0, "{key:?}");
    }
}

#[test]
fn test_index_finds_inserted_positions() {
    let keys: Vec<String> = (0..100).map(|i| format!("key{i}")).collect();
    let mut index = KeyIndex::default();

    for (pos, key) in keys.iter().enumerate() {
        assert_eq!(index.find(key, |p| keys[p].as_str()), None);
        index.insert(key, pos, |p| keys[p].as_str());
    }

    assert_eq!(index.len(), 100);
    for (pos, key) in keys.iter().enumerate() {
        assert_eq!(index.find(key, |p| keys[p].as_str()), Some(pos));
    }
    assert_eq!(index.find("missing", |p| keys[p].as_str()), None);
}

#[test]
fn test_index_resolves_colliding_hashes() {
    let keys = ["aaaan".to_string(), "agjf0".to_string()];
    assert_eq!(hash(&keys[0]), hash(&keys[1]));

    let mut index = KeyIndex::default();
    index.insert(&keys[0], 0, |p| keys[p].as_str());
    index.insert(&keys[1], 1, |p| keys[p].as_str());

    assert_eq!(index.find(&keys[0], |p| keys[p].as_str()), Some(0));
    assert_eq!(index.find(&keys[1], |p| keys[p].as_str()), Some(1));
}

#[test]
fn test_empty_index() {
    let index = KeyIndex::default();
    assert!(index.is_empty());
    assert_eq!(index.find("a", |_| unreachable!()), None);
}
