use super::*;

#[test]
fn test_pack_unpack() {
    assert_eq!(Name::pack(5, 1000).unpack(), (5, 1000));
    assert_eq!(Name::pack(15, SLOT_LIMIT).unpack(), (15, SLOT_LIMIT as usize));
}

#[test]
fn test_empty_is_default() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.unpack(), (0, 0));
}

#[test]
fn test_same_slot_different_shard_differ() {
    let mut set = rustc_hash::FxHashSet::default();
    set.insert(Name::pack(0, 1));
    set.insert(Name::pack(0, 1));
    set.insert(Name::pack(3, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_debug_shows_shard_and_slot() {
    assert_eq!(format!("{:?}", Name::pack(2, 7)), "Name(2:7)");
}
