#![cfg(test)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::algorithm::{NaturalOrder, Reversed};
use crate::util::error::OrderViolation;
use crate::util::testing::{Record, XorShift64, assert_panics, by_key};

#[test]
fn test_collect_sorts_and_dedups() {
    let set: ArraySet<i32> = [5, 1, 3, 1, 5].into_iter().collect();

    assert_eq!(set.len(), 3, "Duplicates should be collapsed.");
    assert_eq!(*set, [1, 3, 5]);
    set.assert_invariant();
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = ArraySet::new();
    assert!(set.insert(4));
    assert!(set.insert(2));
    assert!(!set.insert(4), "A second insert of the same value should be rejected.");
    assert_eq!(set.len(), 2);

    assert_eq!(set.insert_full(3), (1, true));
    assert_eq!(set.insert_full(3), (1, false));
    assert_eq!(*set, [2, 3, 4]);
}

#[test]
fn test_insert_keeps_existing_equivalent() {
    let mut set = ArraySet::with_comparator(by_key);
    set.insert(Record::new(1, "first"));
    assert!(!set.insert(Record::new(1, "second")));
    assert_eq!(set.at(0).payload, "first", "Insert shouldn't replace an equivalent element.");
}

#[test]
fn test_erase() {
    let mut set = ArraySet::from([10, 20, 30]);

    assert!(set.contains(&20));
    assert!(set.erase(&20));
    assert_eq!(set.len(), 2);
    assert!(!set.contains(&20));

    assert!(!set.erase(&20), "Erasing an absent value should report nothing removed.");
    assert_eq!(set.len(), 2);

    assert_eq!(set.remove(&30), Some(30));
    assert_eq!(set.remove(&30), None);
    assert_eq!(*set, [10]);
}

#[test]
fn test_erase_if() {
    let mut set = ArraySet::from([1, 2, 3, 4, 5]);
    assert_eq!(set.erase_if(|x| x % 2 == 0), 2);
    assert_eq!(*set, [1, 3, 5]);

    assert_eq!(set.erase_if(|_| false), 0);
    assert_eq!(set.erase_if(|x| *x > 1), 2);
    assert_eq!(*set, [1]);
}

#[test]
fn test_positional_erase() {
    let mut set: ArraySet<_> = (0..10).collect();

    set.erase_at(2, 3);
    assert_eq!(*set, [0, 1, 5, 6, 7, 8, 9]);
    set.erase_at(0, 0);
    assert_eq!(set.len(), 7, "Erasing nothing should leave the set unchanged.");
    set.erase_front(2);
    assert_eq!(*set, [5, 6, 7, 8, 9]);
    set.erase_back(3);
    assert_eq!(*set, [5, 6]);
    set.erase_back(2);
    assert!(set.is_empty());

    assert_panics!({
        let mut set = ArraySet::from([1, 2, 3]);
        set.erase_at(2, 2);
    });
    assert_panics!({
        let mut set = ArraySet::from([1, 2, 3]);
        set.erase_front(4);
    });
    assert_panics!({
        let mut set = ArraySet::from([1, 2, 3]);
        set.erase_back(4);
    });
    assert_panics!({
        let set = ArraySet::from([1, 2, 3]);
        set.at(3);
    });
}

#[test]
fn test_insert_others() {
    let mut a = ArraySet::from([1, 2, 3]);
    let b = ArraySet::from([2, 3, 4]);

    assert_eq!(a.insert_others(b.iter().copied()), 1, "Only 4 is new.");
    assert_eq!(*a, [1, 2, 3, 4]);
    a.assert_invariant();

    assert_eq!(a.insert_others([9, 0, 9, 5]), 3);
    assert_eq!(*a, [0, 1, 2, 3, 4, 5, 9]);
    assert_eq!(a.insert_others(Vec::new()), 0);
}

#[test]
fn test_bulk_insert_first_wins() {
    let records = [
        Record::new(2, "a"),
        Record::new(1, "b"),
        Record::new(2, "c"),
    ];
    let mut set = ArraySet::with_comparator(by_key);
    set.insert(Record::new(1, "existing"));

    assert_eq!(set.insert_others(records), 1);
    assert_eq!(
        set.iter().map(|r| r.payload).collect::<Vec<_>>(),
        ["existing", "a"],
        "The earliest of several equivalent values should be kept."
    );
}

#[test]
fn test_update() {
    let mut set = ArraySet::with_comparator(by_key);
    set.insert(Record::new(1, "one"));
    set.insert(Record::new(2, "two"));

    assert!(set.update(Record::new(2, "TWO")));
    assert!(!set.update(Record::new(3, "three")), "Update should never grow the set.");
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(&Record::new(2, "")).map(|r| r.payload), Some("TWO"));

    assert!(set.update_with(Record::new(1, "uno"), |existing, value| {
        existing.payload = value.payload;
    }));
    assert_eq!(set.at(0).payload, "uno");

    assert_eq!(
        set.update_others([Record::new(1, "x"), Record::new(5, "y"), Record::new(1, "z")]),
        2
    );
    assert_eq!(set.at(0).payload, "z", "The last of several equivalent updates should win.");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_insert_or_update() {
    let mut set = ArraySet::with_comparator(by_key);

    assert!(set.insert_or_update(Record::new(7, "a")));
    assert!(!set.insert_or_update(Record::new(7, "b")));
    assert_eq!(set.len(), 1);
    assert_eq!(set.at(0).payload, "b");

    let mut counts = ArraySet::with_comparator(|a: &(char, u32), b: &(char, u32)| a.0.cmp(&b.0));
    for c in "abracadabra".chars() {
        counts.insert_or_update_with((c, 1), |existing, _| existing.1 += 1);
    }
    assert_eq!(*counts, [('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]);
}

#[cfg(debug_assertions)]
#[test]
fn test_update_with_checks_order() {
    assert_panics!({
        let mut set = ArraySet::with_comparator(by_key);
        set.insert(Record::new(1, "one"));
        set.insert(Record::new(2, "two"));
        set.update_with(Record::new(1, ""), |existing, _| existing.key = 3);
    });
}

#[test]
fn test_bounds_and_range() {
    let set = ArraySet::from([10, 20, 30, 40]);

    assert_eq!(set.index_of(&30), Some(2));
    assert_eq!(set.index_of(&35), None);
    assert_eq!(set.lower_bound(&20), 1);
    assert_eq!(set.upper_bound(&20), 2);
    assert_eq!(set.lower_bound(&99), 4);
    assert_eq!(set.range(15..=30).copied().collect::<Vec<_>>(), [20, 30]);
    assert_eq!(set.range(..).len(), 4);
    assert_eq!(set.first(), Some(&10));
    assert_eq!(set.last(), Some(&40));
    assert_eq!(set.get_at(4), None);
}

#[test]
fn test_borrowed_lookups() {
    let set: ArraySet<String> = ["pear", "apple", "fig"].into_iter().map(String::from).collect();

    assert!(set.contains("fig"));
    assert_eq!(set.index_of("pear"), Some(2));
    assert_eq!(set.get("apple").map(String::as_str), Some("apple"));
}

#[test]
fn test_pops() {
    let mut set = ArraySet::from([3, 1, 2]);
    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(3));
    assert_eq!(set.pop_last(), Some(2));
    assert_eq!(set.pop_first(), None);
}

fn values<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
    iter.copied().collect()
}

#[test]
fn test_set_operations() {
    let a = ArraySet::from([1, 2, 3, 5]);
    let b = ArraySet::from([2, 4, 5, 6]);

    assert_eq!(values(a.union(&b)), [1, 2, 3, 4, 5, 6]);
    assert_eq!(values(a.intersection(&b)), [2, 5]);
    assert_eq!(values(a.difference(&b)), [1, 3]);
    assert_eq!(values(b.difference(&a)), [4, 6]);
    assert_eq!(values(a.symmetric_difference(&b)), [1, 3, 4, 6]);

    let empty = ArraySet::new();
    assert_eq!(values(a.union(&empty)), [1, 2, 3, 5]);
    assert_eq!(a.intersection(&empty).count(), 0);
}

#[test]
fn test_union_prefers_left() {
    let mut left = ArraySet::with_comparator(by_key);
    let mut right = ArraySet::with_comparator(by_key);
    left.insert(Record::new(1, "left"));
    right.insert(Record::new(1, "right"));
    right.insert(Record::new(2, "right"));

    assert_eq!(
        left.union(&right).map(|r| r.payload).collect::<Vec<_>>(),
        ["left", "right"]
    );
}

#[test]
fn test_subset_and_disjoint() {
    let small = ArraySet::from([2, 3]);
    let large = ArraySet::from([1, 2, 3, 4]);
    let other = ArraySet::from([5, 6]);

    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));
    assert!(large.is_superset(&small));
    assert!(small.is_disjoint(&other));
    assert!(!small.is_disjoint(&large));
    assert!(ArraySet::new().is_subset(&small), "The empty set is a subset of every set.");
}

#[test]
fn test_operators() {
    let a = ArraySet::from([1, 2, 3]);
    let b = ArraySet::from([3, 4]);

    assert_eq!(&a | &b, ArraySet::from([1, 2, 3, 4]));
    assert_eq!(&a & &b, ArraySet::from([3]));
    assert_eq!(&a - &b, ArraySet::from([1, 2]));
    assert_eq!(&a ^ &b, ArraySet::from([1, 2, 4]));
    (&a | &b).assert_invariant();
}

#[test]
fn test_assign_operators() {
    let mut set = ArraySet::from([1, 2, 3, 6]);
    set |= ArraySet::from([0, 3, 7]);
    assert_eq!(*set, [0, 1, 2, 3, 6, 7]);

    set &= ArraySet::from([1, 3, 5, 7, 9]);
    assert_eq!(*set, [1, 3, 7]);

    set -= ArraySet::from([3, 4]);
    assert_eq!(*set, [1, 7]);

    set ^= ArraySet::from([0, 1, 8]);
    assert_eq!(*set, [0, 7, 8]);
    set.assert_invariant();
}

#[test]
fn test_reversed_comparator() {
    let mut set = ArraySet::with_comparator(Reversed(NaturalOrder));
    set.extend([1, 9, 4, 9]);
    assert_eq!(*set, [9, 4, 1]);
    assert_eq!(set.lower_bound(&5), 1);

    let other: ArraySet<i32, Reversed> = [4, 7].into_iter().collect();
    assert_eq!(set.union(&other).copied().collect::<Vec<_>>(), [9, 7, 4, 1]);
}

#[test]
fn test_equality_uses_equivalence() {
    let by_parity = |a: &i32, b: &i32| (a % 2).cmp(&(b % 2));
    let mut a = ArraySet::with_comparator(by_parity);
    let mut b = ArraySet::with_comparator(by_parity);
    a.insert(2);
    a.insert(1);
    b.insert(4);
    b.insert(3);
    assert!(a == b);

    b.erase(&3);
    assert!(a != b);
}

#[test]
fn test_from_sorted_vec() {
    assert!(ArraySet::from_sorted_vec(vec![1, 2, 3], NaturalOrder).is_ok());
    assert_eq!(
        ArraySet::from_sorted_vec(vec![1, 2, 2], NaturalOrder).err(),
        Some(OrderViolation::Duplicate { index: 1 })
    );
    assert_eq!(
        ArraySet::from_sorted_vec(vec![3, 2], NaturalOrder).err(),
        Some(OrderViolation::OutOfOrder { index: 0 })
    );
    assert!(ArraySet::from_sorted_vec(vec![3, 2], Reversed(NaturalOrder)).is_ok());
}

#[test]
fn test_iterators_and_formatting() {
    let set = ArraySet::from([3, 1, 5]);

    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [5, 3, 1]);
    assert_eq!((&set).into_iter().len(), 3);
    assert_eq!(set.to_string(), "{1, 3, 5}");
    assert!(format!("{set:?}").starts_with("ArraySet { contents: [1, 3, 5], len: 3"));
    assert_eq!(ArraySet::<u8>::new().to_string(), "{}");
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 3, 5]);
}

/// Returns a comparator that panics once `budget` reaches zero, spending one unit per call.
fn limited(budget: &Cell<usize>) -> impl Fn(&i32, &i32) -> Ordering + Copy + '_ {
    move |a: &i32, b: &i32| {
        let left = budget.get();
        if left == 0 {
            panic!("comparator gave up");
        }
        budget.set(left - 1);
        a.cmp(b)
    }
}

#[test]
fn test_insert_others_survives_comparator_panic() {
    let budget = Cell::new(usize::MAX);
    let original = [1, 4, 9, 12, 20];

    let mut panicked = 0;
    for limit in 0..60 {
        let mut set = ArraySet::with_comparator(limited(&budget));
        set.insert_others(original);

        budget.set(limit);
        let result = panic::catch_unwind(AssertUnwindSafe(|| set.insert_others(10..=15)));
        budget.set(usize::MAX);

        match result {
            Err(_) => {
                panicked += 1;
                assert_eq!(
                    *set, original,
                    "A panic after {limit} comparisons should leave the set untouched."
                );
            },
            Ok(added) => {
                assert_eq!(added, 5);
                assert_eq!(*set, [1, 4, 9, 10, 11, 12, 13, 14, 15, 20]);
            },
        }
        set.assert_invariant();
    }
    assert!(panicked > 0, "The comparator should have run out at least once.");
    assert!(panicked < 60, "The comparator should have been allowed to finish at least once.");
}

#[test]
fn test_symmetric_difference_assign_survives_comparator_panic() {
    let budget = Cell::new(usize::MAX);
    let original = [1, 4, 9, 12, 20];

    let mut panicked = 0;
    for limit in 0..40 {
        let mut set = ArraySet::with_comparator(limited(&budget));
        set.insert_others(original);
        let mut other = ArraySet::with_comparator(limited(&budget));
        other.insert_others([4, 5, 12, 30]);

        budget.set(limit);
        let result = panic::catch_unwind(AssertUnwindSafe(|| set ^= other));
        budget.set(usize::MAX);

        match result {
            Err(_) => {
                panicked += 1;
                assert_eq!(
                    *set, original,
                    "A panic after {limit} comparisons should leave the set untouched."
                );
            },
            Ok(()) => assert_eq!(*set, [1, 5, 9, 20, 30]),
        }
        set.assert_invariant();
    }
    assert!(panicked > 0, "The comparator should have run out at least once.");
    assert!(panicked < 40, "The comparator should have been allowed to finish at least once.");
}

#[test]
fn test_matches_btree_set() {
    let mut rng = XorShift64::new(0xa55e7);
    let mut set: ArraySet<u32> = ArraySet::new();
    let mut model = BTreeSet::new();

    for step in 0..2000 {
        let value = rng.below(64) as u32;
        match rng.below(8) {
            0..=2 => assert_eq!(set.insert(value), model.insert(value)),
            3 => assert_eq!(set.erase(&value), model.remove(&value)),
            4 => assert_eq!(set.update(value), model.contains(&value)),
            5 => {
                let batch: Vec<u32> = (0..rng.below(8)).map(|_| rng.below(64) as u32).collect();
                let before = model.len();
                model.extend(batch.iter().copied());
                assert_eq!(set.insert_others(batch), model.len() - before);
            },
            6 => {
                let before = model.len();
                model.retain(|v| v % 16 != value % 16);
                assert_eq!(set.erase_if(|v| v % 16 == value % 16), before - model.len());
            },
            _ => {
                assert_eq!(set.lower_bound(&value), model.range(..value).count());
                assert_eq!(set.upper_bound(&value), model.range(..=value).count());
                assert_eq!(set.index_of(&value).is_some(), model.contains(&value));
            },
        }

        set.assert_invariant();
        assert!(set.iter().eq(model.iter()), "Step {step} diverged from the model.");
    }
}

const fn shape<T, C>(set: &ArraySet<T, C>) -> (usize, bool, usize) {
    (set.len(), set.is_empty(), set.cap())
}

#[test]
fn test_accessors_in_const_context() {
    static EMPTY: ArraySet<i32> = ArraySet::new();
    assert_eq!(shape(&EMPTY), (0, true, 0));

    let set = ArraySet::from([3, 1, 2]);
    assert_eq!(shape(&set).0, 3);
    assert_eq!(set.as_slice(), [1, 2, 3]);
}
