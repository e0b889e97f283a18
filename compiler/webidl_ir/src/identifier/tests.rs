use super::*;

#[test]
fn test_identifier_layout() {
    let id = Identifier::new(5, 1000);
    assert_eq!(id.shard(), 5);
    assert_eq!(id.local(), 1000);
}

#[test]
fn test_identifier_empty() {
    assert_eq!(Identifier::EMPTY.shard(), 0);
    assert_eq!(Identifier::EMPTY.local(), 0);
    assert!(Identifier::EMPTY.is_empty());
    assert!(!Identifier::new(0, 1).is_empty());
}

#[test]
fn test_identifier_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Identifier::new(0, 1));
    set.insert(Identifier::new(0, 1)); // duplicate
    set.insert(Identifier::new(3, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_identifier_raw_roundtrip() {
    let id = Identifier::new(15, Identifier::MAX_LOCAL);
    assert_eq!(Identifier::from_raw(id.raw()), id);
}
