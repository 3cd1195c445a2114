#![cfg(test)]

use std::collections::BTreeMap;
use std::ptr;

use super::*;
use crate::util::testing::{CountedDrop, XorShift64, assert_panics};

#[test]
fn test_overwrite_drops_old_value() {
    let counter = CountedDrop::new(0);
    let mut map = BoxArrayMap::new();

    assert!(map.set(1, counter.clone()));
    assert_eq!(counter.count(), 0);
    assert!(!map.set(1, counter.clone()), "Setting an existing key shouldn't add an entry.");
    assert_eq!(counter.count(), 1, "The overwritten value should have been dropped.");
    assert_eq!(map.len(), 1);
    map.assert_invariant();
}

#[test]
fn test_erase_and_clear_drop_values() {
    let counter = CountedDrop::new(0);
    let mut map = BoxArrayMap::new();
    for key in 0..5 {
        map.set(key, counter.clone());
    }

    assert!(map.erase(&2));
    assert!(!map.erase(&2));
    assert_eq!(counter.count(), 1);

    assert_eq!(map.erase_if(|key, _| key % 2 == 1), 2);
    assert_eq!(counter.count(), 3);
    map.assert_invariant();

    map.clear();
    assert_eq!(counter.count(), 5);
    assert!(map.is_empty());

    map.set(9, counter.clone());
    drop(map);
    assert_eq!(counter.count(), 6, "Dropping the map should drop every owned value.");
}

#[test]
fn test_take_releases_ownership() {
    let counter = CountedDrop::new(0);
    let mut map = BoxArrayMap::new();
    map.set("key", counter.clone());

    let owned = map.take("key");
    assert!(owned.is_some());
    assert!(!map.contains("key"));
    assert_eq!(counter.count(), 0, "A taken value belongs to the caller, not the map.");

    drop(map);
    assert_eq!(counter.count(), 0);
    drop(owned);
    assert_eq!(counter.count(), 1);

    let mut map: BoxArrayMap<&str, CountedDrop> = BoxArrayMap::new();
    assert!(map.take("missing").is_none());
}

#[test]
fn test_set_box_hands_back_displaced_value() {
    let mut map = BoxArrayMap::new();
    assert_eq!(map.set_box(3, Box::new(String::from("first"))), None);

    let displaced = map.set_box(3, Box::new(String::from("second")));
    assert_eq!(displaced.as_deref().map(String::as_str), Some("first"));
    assert_eq!(map[&3], "second");
}

#[test]
fn test_unsized_values() {
    let mut map: BoxArrayMap<i32, [u8]> = BoxArrayMap::new();
    map.set_box(2, Box::new([1, 2, 3]));
    map.set_box(1, Box::new([]));

    assert_eq!(map.get(&2).map(<[u8]>::len), Some(3));
    assert_eq!(map.values().map(<[u8]>::len).collect::<Vec<_>>(), [0, 3]);
    if let Some(bytes) = map.get_mut(&2) {
        bytes[0] = 9;
    }
    assert_eq!(map[&2], [9, 2, 3]);
}

#[test]
fn test_lookups() {
    let mut map: BoxArrayMap<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();

    assert_eq!(map.index_of(&2), Some(1));
    assert_eq!(map.get(&4), None);
    assert_eq!(map.at(0), (&1, &'a'));
    assert_eq!(map.get_at(3), None);
    *map.get_or_insert_with(4, || 'x') = 'd';
    assert_eq!(*map.get_or_insert_with(4, || unreachable!()), 'd');

    for value in map.values_mut() {
        value.make_ascii_uppercase();
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(map.keys().rev().next(), Some(&4));
    assert_eq!(map.keys().len(), 4);
    assert_eq!(map.iter().map(|(_, v)| *v).collect::<String>(), "ABCD");
    map.assert_invariant();

    assert_panics!({
        let map: BoxArrayMap<i32, char> = BoxArrayMap::new();
        let _value: char = map[&0];
    });
}

#[test]
fn test_collect_last_wins() {
    let map: BoxArrayMap<_, _> = [(1, "a"), (2, "b"), (1, "c")].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&1], "c");
    map.assert_invariant();
    assert_eq!(map.check_order(), Ok(()));
}

#[test]
fn test_clone_is_deep() {
    let mut map = BoxArrayMap::new();
    map.set(1, String::from("one"));
    let copy = map.clone();

    assert_eq!(map, copy, "Equality should compare the owned values.");
    assert!(
        !ptr::eq(&map[&1], &copy[&1]),
        "A clone should own its own copy of every value."
    );

    if let Some(value) = map.get_mut(&1) {
        value.push('!');
    }
    assert_eq!(copy[&1], "one");
    assert_ne!(map, copy);
}

#[test]
fn test_into_iter_yields_boxes() {
    let map: BoxArrayMap<_, _> = [(2, 20), (1, 10)].into_iter().collect();

    let entries: Vec<(i32, Box<i32>)> = map.into_iter().collect();
    assert_eq!(entries, [(1, Box::new(10)), (2, Box::new(20))]);
}

#[test]
fn test_debug() {
    let mut map = BoxArrayMap::new();
    map.set(1, "one");
    assert!(format!("{map:?}").starts_with("BoxArrayMap { contents: {1: \"one\"}, len: 1"));
}

#[test]
fn test_matches_btree_map() {
    let mut rng = XorShift64::new(0xb0c5);
    let mut map: BoxArrayMap<u32, String> = BoxArrayMap::new();
    let mut model = BTreeMap::new();

    for step in 0..2000 {
        let key = rng.below(48) as u32;
        let value = format!("v{step}");
        match rng.below(7) {
            0..=2 => assert_eq!(map.set(key, value.clone()), model.insert(key, value).is_none()),
            3 => assert_eq!(map.take(&key).map(|boxed| *boxed), model.remove(&key)),
            4 => assert_eq!(map.erase(&key), model.remove(&key).is_some()),
            5 => {
                let batch: Vec<(u32, String)> = (0..rng.below(6))
                    .map(|offset| (rng.below(48) as u32, format!("{value}.{offset}")))
                    .collect();
                model.extend(batch.iter().cloned());
                map.extend(batch);
            },
            _ => {
                let before = model.len();
                model.retain(|k, _| k % 12 != key % 12);
                assert_eq!(map.erase_if(|k, _| k % 12 == key % 12), before - model.len());
            },
        }

        map.assert_invariant();
        assert_eq!(map.len(), model.len());
        assert!(map.iter().eq(model.iter()), "Step {step} diverged from the model.");
    }
}

const fn shape<K, V: ?Sized, C>(map: &BoxArrayMap<K, V, C>) -> (usize, bool) {
    (map.len(), map.is_empty())
}

#[test]
fn test_accessors_in_const_context() {
    static EMPTY: BoxArrayMap<u8, str> = BoxArrayMap::new();
    assert_eq!(shape(&EMPTY), (0, true));

    let mut map = BoxArrayMap::new();
    map.set(1, 'a');
    assert_eq!(shape(&map), (1, false));
}
