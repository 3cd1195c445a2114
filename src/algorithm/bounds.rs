use std::cmp::Ordering;
use std::ops::{Bound, Range, RangeBounds};

use super::Comparator;

/// Returns the smallest index `r` in `0..=count` such that `r == count` or `compare_at(r)` isn't
/// [`Ordering::Greater`].
///
/// `compare_at(i)` compares the value being searched for against the element at index `i`, so the
/// result is the first position where that value could be inserted while keeping the sequence
/// ascending, before any run of equivalent elements. The sequence must be partitioned with
/// respect to `compare_at` (all `Greater` results before all others), which holds for any sorted
/// sequence.
///
/// This takes `O(log count)` calls to `compare_at` and doesn't allocate.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::lower_bound_by;
/// let items = [1, 3, 3, 5, 7];
/// assert_eq!(lower_bound_by(items.len(), |i| 3_i32.cmp(&items[i])), 1);
/// assert_eq!(lower_bound_by(items.len(), |i| 8_i32.cmp(&items[i])), 5);
/// ```
pub fn lower_bound_by<F>(count: usize, mut compare_at: F) -> usize
where
    F: FnMut(usize) -> Ordering,
{
    partition_point(count, |i| compare_at(i) == Ordering::Greater)
}

/// Returns the smallest index `r` in `0..=count` such that `r == count` or `compare_at(r)` is
/// [`Ordering::Less`]. This is the first position after any run of elements equivalent to the
/// value being searched for. See [`lower_bound_by`] for the meaning of `compare_at`.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::upper_bound_by;
/// let items = [1, 3, 3, 5, 7];
/// assert_eq!(upper_bound_by(items.len(), |i| 3_i32.cmp(&items[i])), 3);
/// assert_eq!(upper_bound_by(items.len(), |i| 0_i32.cmp(&items[i])), 0);
/// ```
pub fn upper_bound_by<F>(count: usize, mut compare_at: F) -> usize
where
    F: FnMut(usize) -> Ordering,
{
    partition_point(count, |i| compare_at(i) != Ordering::Less)
}

/// Returns the range of indices holding elements equivalent to the compared value, which is empty
/// (and positioned at the insertion index) if there are none.
pub fn equal_range_by<F>(count: usize, mut compare_at: F) -> Range<usize>
where
    F: FnMut(usize) -> Ordering,
{
    let start = lower_bound_by(count, &mut compare_at);
    // Everything before start is already known to be less than the searched value.
    let len = upper_bound_by(count - start, |i| compare_at(start + i));
    start..start + len
}

/// Locates an element equivalent to the compared value, returning `Ok` with its index, or `Err`
/// with the index at which such an element would have to be inserted. If several elements are
/// equivalent, the first of them is found.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::binary_search_by;
/// let items = [1, 3, 3, 5, 7];
/// assert_eq!(binary_search_by(items.len(), |i| 3_i32.cmp(&items[i])), Ok(1));
/// assert_eq!(binary_search_by(items.len(), |i| 4_i32.cmp(&items[i])), Err(3));
/// ```
pub fn binary_search_by<F>(count: usize, mut compare_at: F) -> Result<usize, usize>
where
    F: FnMut(usize) -> Ordering,
{
    let index = lower_bound_by(count, &mut compare_at);
    if index < count && compare_at(index) == Ordering::Equal {
        Ok(index)
    } else {
        Err(index)
    }
}

/// Converts a range of searched values into the range of indices holding the elements it covers.
/// `compare_at(q, i)` compares the bound `q` against the element at index `i`.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::range_bounds_by;
/// let items = [1, 3, 3, 5, 7];
/// let compare_at = |q: &i32, i: usize| q.cmp(&items[i]);
/// assert_eq!(range_bounds_by(items.len(), 3..7, compare_at), 1..4);
/// assert_eq!(range_bounds_by(items.len(), 3..=7, compare_at), 1..5);
/// assert_eq!(range_bounds_by(items.len(), ..4, compare_at), 0..3);
/// assert_eq!(range_bounds_by(items.len(), 6..2, compare_at), 4..4);
/// ```
pub fn range_bounds_by<Q, R, F>(count: usize, range: R, mut compare_at: F) -> Range<usize>
where
    Q: ?Sized,
    R: RangeBounds<Q>,
    F: FnMut(&Q, usize) -> Ordering,
{
    let start = match range.start_bound() {
        Bound::Included(q) => lower_bound_by(count, |i| compare_at(q, i)),
        Bound::Excluded(q) => upper_bound_by(count, |i| compare_at(q, i)),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(q) => upper_bound_by(count, |i| compare_at(q, i)),
        Bound::Excluded(q) => lower_bound_by(count, |i| compare_at(q, i)),
        Bound::Unbounded => count,
    };
    // An inverted range covers nothing.
    start..end.max(start)
}

/// [`lower_bound_by`] over a sequence of `count` elements reachable through `at`, comparing the
/// `value` against each with `comparator`. The value may be of a different type than the
/// elements, as long as the comparator relates the two.
///
/// # Examples
/// ```
/// # use array_collections::algorithm::{lower_bound, upper_bound, NaturalOrder};
/// let items = [1, 3, 3, 5, 7];
/// assert_eq!(lower_bound(items.len(), |i| &items[i], &3, &NaturalOrder), 1);
/// assert_eq!(upper_bound(items.len(), |i| &items[i], &3, &NaturalOrder), 3);
/// ```
pub fn lower_bound<'a, T, Q, C, A>(count: usize, at: A, value: &Q, comparator: &C) -> usize
where
    T: ?Sized + 'a,
    Q: ?Sized,
    C: Comparator<Q, T> + ?Sized,
    A: Fn(usize) -> &'a T,
{
    lower_bound_by(count, |i| comparator.compare(value, at(i)))
}

/// [`upper_bound_by`] over a sequence of `count` elements reachable through `at`. See
/// [`lower_bound`].
pub fn upper_bound<'a, T, Q, C, A>(count: usize, at: A, value: &Q, comparator: &C) -> usize
where
    T: ?Sized + 'a,
    Q: ?Sized,
    C: Comparator<Q, T> + ?Sized,
    A: Fn(usize) -> &'a T,
{
    upper_bound_by(count, |i| comparator.compare(value, at(i)))
}

/// Finds the first index in `0..=count` for which `pred` is false, given that `pred` is true for
/// a prefix of the indices and false for the rest.
fn partition_point<F>(count: usize, mut pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let mut first = 0;
    let mut remaining = count;

    while remaining > 0 {
        let half = remaining / 2;
        let mid = first + half;

        if pred(mid) {
            // mid and everything before it satisfy pred, discard them.
            first = mid + 1;
            remaining -= half + 1;
        } else {
            remaining = half;
        }
    }

    first
}
