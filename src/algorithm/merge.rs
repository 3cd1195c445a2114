//! Bulk construction helpers for the ordered collections. These turn an arbitrary batch of items
//! into a strictly ascending run and merge such a run into existing storage in a single pass.
//!
//! A comparator is user code and may panic. Every comparison against existing storage happens
//! before any stored item is moved, so a panic leaves that storage as it was.

use std::cmp::Ordering;
use std::mem;

use super::binary_search_by;

/// Which of several mutually equivalent items survives [`sort_unique`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keep {
    #[cfg(feature = "set")]
    First,
    #[cfg(feature = "map")]
    Last,
}

/// Sorts `items` and removes equivalent duplicates, keeping either the first or the last of each
/// run in input order.
pub(crate) fn sort_unique<T, F>(items: &mut Vec<T>, keep: Keep, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match keep {
        #[cfg(feature = "set")]
        Keep::First => {},
        // The sort is stable, so reversing first puts the latest of each run at its front.
        #[cfg(feature = "map")]
        Keep::Last => items.reverse(),
    }
    items.sort_by(&mut compare);
    // dedup_by retains the first item of each run.
    items.dedup_by(|later, earlier| compare(&*earlier, &*later) == Ordering::Equal);
}

/// Finds where each item of the strictly ascending `incoming` run sits in the strictly ascending
/// `existing` storage: `Ok` with the index of an equivalent item, or `Err` with the index it would
/// be inserted at. Each search starts where the previous one ended.
pub(crate) fn locate_sorted<T, F>(
    existing: &[T],
    incoming: &[T],
    mut compare: F,
) -> Vec<Result<usize, usize>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut start = 0;
    incoming
        .iter()
        .map(|item| {
            let rest = &existing[start..];
            let slot = match binary_search_by(rest.len(), |i| compare(item, &rest[i])) {
                Ok(index) => Ok(start + index),
                Err(index) => Err(start + index),
            };
            start = match slot {
                Ok(index) => index + 1,
                Err(index) => index,
            };
            slot
        })
        .collect()
}

/// Rebuilds `existing`, dropping the items at the indices for which `keep` returns false and
/// placing each of `additions` before the item at its index. `additions` must be ordered by index,
/// with indices up to and including `existing.len()`.
pub(crate) fn rebuild<T, K>(existing: &mut Vec<T>, additions: Vec<(usize, T)>, mut keep: K)
where
    K: FnMut(usize) -> bool,
{
    let old = mem::take(existing);
    let mut rebuilt = Vec::with_capacity(old.len() + additions.len());
    let mut additions = additions.into_iter().peekable();

    for (index, item) in old.into_iter().enumerate() {
        while let Some((_, addition)) = additions.next_if(|(at, _)| *at == index) {
            rebuilt.push(addition);
        }
        if keep(index) {
            rebuilt.push(item);
        }
    }

    rebuilt.extend(additions.map(|(_, addition)| addition));
    *existing = rebuilt;
}

/// Merges the strictly ascending `incoming` run into the strictly ascending `existing` storage.
/// When an incoming item is equivalent to an existing one, `resolve` is called with both and the
/// existing slot is kept. Returns the number of items that were added.
pub(crate) fn merge_unique<T, F, R>(
    existing: &mut Vec<T>,
    incoming: Vec<T>,
    compare: F,
    mut resolve: R,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: FnMut(&mut T, T),
{
    if incoming.is_empty() {
        return 0;
    }

    let slots = locate_sorted(existing.as_slice(), &incoming, compare);
    let mut additions = Vec::new();
    for (item, slot) in incoming.into_iter().zip(slots) {
        match slot {
            Ok(index) => resolve(&mut existing[index], item),
            Err(index) => additions.push((index, item)),
        }
    }

    let added = additions.len();
    if added > 0 {
        rebuild(existing, additions, |_| true);
    }
    added
}
