use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Deref, RangeBounds, Sub,
    SubAssign,
};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};
use crate::algorithm::merge::{self, Keep};
use crate::algorithm::{self, Comparator, NaturalOrder};
use crate::util::error::{IndexOutOfBounds, OrderViolation, RangeOutOfBounds};
use crate::util::fmt::TypeName;
use crate::util::result::{OptionExtension, ResultExtension};

/// A set of unique elements, stored in a [`Vec`] sorted under the comparator `C`, which defaults
/// to [`NaturalOrder`].
///
/// Elements are unique under the comparator's equivalence, which doesn't have to mean equality.
/// When an equivalent element is already present, [`insert`](ArraySet::insert) leaves the set
/// untouched, while [`update`](ArraySet::update) replaces the existing element.
///
/// It is a logic error for an element to be changed in a way that changes its ordering relative
/// to the others. The only way to change an element in place is through the updater passed to
/// [`update_with`](ArraySet::update_with), which is checked against its neighbours in debug
/// builds.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the ArraySet.
/// - `i`: The index of the element in question.
/// - `m`: The number of elements in the second collection.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` / `index_of` / `get` | `O(log n)` |
/// | `insert` / `insert_or_update` | `O(log n)`, `O(n-i)`* |
/// | `update` | `O(log n)` |
/// | `erase` | `O(log n + n-i)` |
/// | `erase_at` / `erase_front` | `O(n-i)` |
/// | `erase_back` | `O(1)` |
/// | `erase_if` | `O(n)` |
/// | `insert_others` | `O(m log m + m log n + n)` |
/// | `update_others` | `O(m log n)` |
/// | `union` / `intersection` / ... | `O(n+m)` |
///
/// \* Only if the element isn't already present and has to be inserted.
#[derive(Clone)]
pub struct ArraySet<T, C = NaturalOrder> {
    pub(crate) inner: Vec<T>,
    pub(crate) comparator: C,
}

impl<T> ArraySet<T> {
    /// Creates a new, empty ArraySet ordered by [`NaturalOrder`].
    pub const fn new() -> ArraySet<T> {
        ArraySet::with_comparator(NaturalOrder)
    }

    /// Creates a new, empty ArraySet ordered by [`NaturalOrder`], with space for at least `cap`
    /// elements.
    pub fn with_cap(cap: usize) -> ArraySet<T> {
        ArraySet::with_cap_and_comparator(cap, NaturalOrder)
    }
}

impl<T, C> ArraySet<T, C> {
    /// Creates a new, empty ArraySet ordered by the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> ArraySet<T, C> {
        ArraySet {
            inner: Vec::new(),
            comparator,
        }
    }

    /// Creates a new, empty ArraySet with space for at least `cap` elements, ordered by the
    /// provided `comparator`.
    pub fn with_cap_and_comparator(cap: usize, comparator: C) -> ArraySet<T, C> {
        ArraySet {
            inner: Vec::with_capacity(cap),
            comparator,
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.capacity()
    }

    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the elements as a sorted slice.
    pub const fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Consumes the ArraySet, returning its elements in sorted order.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra);
    }

    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn at(&self, index: usize) -> &T {
        self.inner.get(index).or_throw(|| IndexOutOfBounds { index, len: self.len() })
    }

    /// Returns the element at the provided `index`, or None if it is out of bounds.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.remove(0))
        }
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Removes `count` elements starting at `index`, shifting the following elements to fill the
    /// gap.
    ///
    /// # Panics
    /// Panics if the range `index..index + count` isn't within the bounds of the set.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArraySet;
    /// let mut set = ArraySet::from([1, 2, 3, 4, 5]);
    /// set.erase_at(1, 2);
    /// assert_eq!(*set, [1, 4, 5]);
    /// set.erase_front(1);
    /// set.erase_back(1);
    /// assert_eq!(*set, [4]);
    /// ```
    pub fn erase_at(&mut self, index: usize, count: usize) {
        self.check_range(index, count);
        self.inner.drain(index..index + count);
    }

    /// Removes the first `count` elements.
    ///
    /// # Panics
    /// Panics if the set contains fewer than `count` elements.
    pub fn erase_front(&mut self, count: usize) {
        self.erase_at(0, count);
    }

    /// Removes the last `count` elements.
    ///
    /// # Panics
    /// Panics if the set contains fewer than `count` elements.
    pub fn erase_back(&mut self, count: usize) {
        let start = self.len().checked_sub(count).or_throw(|| RangeOutOfBounds {
            start: 0,
            count,
            len: self.len(),
        });
        self.inner.truncate(start);
    }

    /// Removes every element for which `predicate` returns true, returning the number of elements
    /// removed. The remaining elements keep their order.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArraySet;
    /// let mut set = ArraySet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.erase_if(|x| x % 2 == 0), 2);
    /// assert_eq!(*set, [1, 3, 5]);
    /// ```
    pub fn erase_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let initial_len = self.inner.len();
        self.inner.retain(|item| !predicate(item));
        initial_len - self.inner.len()
    }

    /// Returns an iterator over all elements in sorted order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.iter())
    }

    /// Checks that the range of `count` elements starting at `start` is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the range is out of bounds.
    pub(crate) fn check_range(&self, start: usize, count: usize) {
        let len = self.len();
        if start.checked_add(count).is_none_or(|end| end > len) {
            Err(RangeOutOfBounds { start, count, len }).throw()
        }
    }
}

impl<T, C> ArraySet<T, C> {
    /// Returns the index of the element equivalent to `value`, or None if there is none.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(value).ok()
    }

    /// Returns true if the set contains an element equivalent to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(value).is_ok()
    }

    /// Returns a reference to the element equivalent to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let index = self.search(value).ok()?;
        Some(&self.inner[index])
    }

    /// Removes and returns the element equivalent to `value`, if there is one.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let index = self.search(value).ok()?;
        Some(self.inner.remove(index))
    }

    /// Removes the element equivalent to `value`, returning true if there was one.
    pub fn erase<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.remove(value).is_some()
    }

    /// Returns the index of the first element that isn't less than `value`.
    pub fn lower_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::lower_bound_by(self.len(), |i| self.compare_at(value, i))
    }

    /// Returns the index of the first element that is greater than `value`.
    pub fn upper_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::upper_bound_by(self.len(), |i| self.compare_at(value, i))
    }

    /// Returns an iterator over the elements that fall within `range`, in sorted order.
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
        R: RangeBounds<Q>,
    {
        let indices = algorithm::range_bounds_by(self.len(), range, |q, i| self.compare_at(q, i));
        Iter(self.inner[indices].iter())
    }

    fn compare_at<Q>(&self, value: &Q, index: usize) -> Ordering
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let stored: &Q = self.inner[index].borrow();
        self.comparator.compare(value, stored)
    }

    pub(crate) fn search<Q>(&self, value: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::binary_search_by(self.len(), |i| self.compare_at(value, i))
    }
}

impl<T, C: Comparator<T>> ArraySet<T, C> {
    /// Inserts `value` if the set doesn't already contain an equivalent element, returning true if
    /// it was inserted. An existing equivalent element is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArraySet;
    /// let mut set = ArraySet::new();
    /// assert!(set.insert(3));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(3));
    /// assert_eq!(*set, [1, 3]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_full(value).1
    }

    /// Inserts `value` if the set doesn't already contain an equivalent element. Returns the index
    /// of the element equivalent to `value` after the call, and whether `value` was inserted.
    pub fn insert_full(&mut self, value: T) -> (usize, bool) {
        match self.search(&value) {
            Ok(index) => (index, false),
            Err(index) => {
                self.inner.insert(index, value);
                (index, true)
            },
        }
    }

    /// Inserts every element of `values` that isn't equivalent to an element already in the set,
    /// returning the number of elements inserted.
    ///
    /// This behaves like calling [`insert`](ArraySet::insert) for each value in turn: of several
    /// mutually equivalent values, the first is kept. The values are sorted and merged into the
    /// set in a single pass rather than being shifted in one at a time.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArraySet;
    /// let mut a = ArraySet::from([1, 2, 3]);
    /// let b = ArraySet::from([2, 3, 4]);
    /// assert_eq!(a.insert_others(b.iter().copied()), 1);
    /// assert_eq!(*a, [1, 2, 3, 4]);
    /// ```
    pub fn insert_others<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut incoming: Vec<T> = values.into_iter().collect();
        let comparator = &self.comparator;
        merge::sort_unique(&mut incoming, Keep::First, |a, b| comparator.compare(a, b));
        // Existing elements are never replaced by insertion.
        merge::merge_unique(&mut self.inner, incoming, |a, b| comparator.compare(a, b), |_, _| {})
    }

    /// Replaces the element equivalent to `value` with `value`, returning true if there was one.
    /// The set never grows.
    pub fn update(&mut self, value: T) -> bool {
        self.update_with(value, |existing, value| *existing = value)
    }

    /// Calls `updater` with the element equivalent to `value` and `value` itself, returning true if
    /// there was such an element. The set never grows.
    ///
    /// The updater must not change the ordering of the existing element.
    ///
    /// # Panics
    /// In debug builds, panics if the updated element is no longer ordered between its
    /// neighbours.
    pub fn update_with<F>(&mut self, value: T, updater: F) -> bool
    where
        F: FnOnce(&mut T, T),
    {
        match self.search(&value) {
            Ok(index) => {
                updater(&mut self.inner[index], value);
                self.debug_check_neighbours(index);
                true
            },
            Err(_) => false,
        }
    }

    /// Calls [`update`](ArraySet::update) for every element of `values`, returning the number of
    /// updates. Of several mutually equivalent values, the last one ends up in the set.
    pub fn update_others<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(0, |count, value| count + usize::from(self.update(value)))
    }

    /// Inserts `value`, or replaces the equivalent element with it if there is one. Returns true
    /// if `value` was inserted.
    pub fn insert_or_update(&mut self, value: T) -> bool {
        self.insert_or_update_with(value, |existing, value| *existing = value)
    }

    /// Inserts `value` if there is no equivalent element, otherwise calls `updater` with the
    /// existing element and `value`. Returns true if `value` was inserted.
    ///
    /// # Panics
    /// In debug builds, panics if the updated element is no longer ordered between its
    /// neighbours.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArraySet;
    /// let by_name = |a: &(&str, u32), b: &(&str, u32)| a.0.cmp(b.0);
    /// let mut counts = ArraySet::with_comparator(by_name);
    /// for name in ["b", "a", "b", "b"] {
    ///     counts.insert_or_update_with((name, 1_u32), |existing, _| existing.1 += 1);
    /// }
    /// assert_eq!(*counts, [("a", 1), ("b", 3)]);
    /// ```
    pub fn insert_or_update_with<F>(&mut self, value: T, updater: F) -> bool
    where
        F: FnOnce(&mut T, T),
    {
        match self.search(&value) {
            Ok(index) => {
                updater(&mut self.inner[index], value);
                self.debug_check_neighbours(index);
                false
            },
            Err(index) => {
                self.inner.insert(index, value);
                true
            },
        }
    }

    /// Creates an ArraySet from elements that are already strictly ascending under `comparator`,
    /// without sorting them. The first pair of elements that breaks the order is reported
    /// otherwise.
    pub fn from_sorted_vec(items: Vec<T>, comparator: C) -> Result<ArraySet<T, C>, OrderViolation> {
        algorithm::check_strictly_ascending(&items, &comparator)?;
        Ok(ArraySet {
            inner: items,
            comparator,
        })
    }

    /// Verifies that the elements are strictly ascending. This holds unless an element has been
    /// changed through interior mutability.
    pub fn check_order(&self) -> Result<(), OrderViolation> {
        algorithm::check_strictly_ascending(&self.inner, &self.comparator)
    }

    /// Asserts that the elements are strictly ascending, for diagnostic use.
    ///
    /// # Panics
    /// Panics if two adjacent elements are out of order or equivalent.
    pub fn assert_invariant(&self) {
        self.check_order().throw()
    }

    /// Returns an iterator over the elements in `self`, `other` or both, in sorted order. Where
    /// both contain equivalent elements, the one from `self` is produced.
    pub fn union<'a>(&'a self, other: &'a ArraySet<T, C>) -> Union<'a, T, C> {
        Union::new(self, other)
    }

    /// Returns an iterator over the elements of `self` that have an equivalent in `other`.
    pub fn intersection<'a>(&'a self, other: &'a ArraySet<T, C>) -> Intersection<'a, T, C> {
        Intersection::new(self, other)
    }

    /// Returns an iterator over the elements of `self` without an equivalent in `other`.
    pub fn difference<'a>(&'a self, other: &'a ArraySet<T, C>) -> Difference<'a, T, C> {
        Difference::new(self, other)
    }

    /// Returns an iterator over the elements in exactly one of `self` and `other`.
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a ArraySet<T, C>,
    ) -> SymmetricDifference<'a, T, C> {
        SymmetricDifference::new(self, other)
    }

    /// Returns true if `other` contains an equivalent of every element of `self`.
    pub fn is_subset(&self, other: &ArraySet<T, C>) -> bool {
        self.len() <= other.len() && self.difference(other).next().is_none()
    }

    /// Returns true if `self` contains an equivalent of every element of `other`.
    pub fn is_superset(&self, other: &ArraySet<T, C>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if no element of `self` has an equivalent in `other`.
    pub fn is_disjoint(&self, other: &ArraySet<T, C>) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Checks that the element at `index` is still ordered between its neighbours in debug builds.
    fn debug_check_neighbours(&self, index: usize) {
        if cfg!(debug_assertions) {
            let start = index.saturating_sub(1);
            let end = usize::min(index + 2, self.len());
            algorithm::check_strictly_ascending(&self.inner[start..end], &self.comparator)
                .map_err(|_| OrderViolation::OutOfOrder { index })
                .throw()
        }
    }
}

impl<T, C: Default> Default for ArraySet<T, C> {
    fn default() -> Self {
        ArraySet::with_comparator(C::default())
    }
}

impl<T, C> Deref for ArraySet<T, C> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, C> AsRef<[T]> for ArraySet<T, C> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for ArraySet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ArraySet::default();
        set.insert_others(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for ArraySet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_others(iter);
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for ArraySet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T, C: Comparator<T>> PartialEq for ArraySet<T, C> {
    /// Sets are equal when they hold the same number of elements and, index by index, the
    /// elements are equivalent.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.inner.iter().zip(other.inner.iter()).all(|(a, b)| {
                self.comparator.equivalent(a, b)
            })
    }
}

impl<T, C: Comparator<T>> Eq for ArraySet<T, C> {}

impl<T: Clone, C: Comparator<T> + Clone> BitOr for &ArraySet<T, C> {
    type Output = ArraySet<T, C>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.collect_sorted(self.union(rhs))
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitAnd for &ArraySet<T, C> {
    type Output = ArraySet<T, C>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.collect_sorted(self.intersection(rhs))
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitXor for &ArraySet<T, C> {
    type Output = ArraySet<T, C>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.collect_sorted(self.symmetric_difference(rhs))
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Sub for &ArraySet<T, C> {
    type Output = ArraySet<T, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.collect_sorted(self.difference(rhs))
    }
}

impl<T, C: Comparator<T>> BitOrAssign for ArraySet<T, C> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert_others(rhs);
    }
}

impl<T, C: Comparator<T>> BitAndAssign for ArraySet<T, C> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain_by_presence(&rhs, true);
    }
}

impl<T, C: Comparator<T>> SubAssign for ArraySet<T, C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.retain_by_presence(&rhs, false);
    }
}

impl<T, C: Comparator<T>> BitXorAssign for ArraySet<T, C> {
    fn bitxor_assign(&mut self, rhs: Self) {
        let comparator = &self.comparator;
        let slots = merge::locate_sorted(&self.inner, &rhs.inner, |a, b| comparator.compare(a, b));

        let mut shared = vec![false; self.inner.len()];
        let mut additions = Vec::new();
        for (item, slot) in rhs.inner.into_iter().zip(slots) {
            match slot {
                Ok(index) => shared[index] = true,
                Err(index) => additions.push((index, item)),
            }
        }

        merge::rebuild(&mut self.inner, additions, |index| !shared[index]);
    }
}

impl<T, C: Comparator<T>> ArraySet<T, C> {
    /// Keeps the elements of self that do (or don't) have an equivalent in `other`, walking both
    /// sets once.
    fn retain_by_presence(&mut self, other: &ArraySet<T, C>, keep_present: bool) {
        let comparator = &self.comparator;
        let mut other = other.inner.iter().peekable();
        self.inner.retain(|item| {
            while other.next_if(|o| comparator.compare(o, item) == Ordering::Less).is_some() {}
            let present = other.next_if(|o| comparator.equivalent(o, item)).is_some();
            present == keep_present
        });
    }
}

impl<T: Clone, C: Clone> ArraySet<T, C> {
    /// Builds a set with the same comparator from an iterator already producing strictly ascending
    /// elements, such as the set operation iterators.
    fn collect_sorted<'a, I>(&self, iter: I) -> ArraySet<T, C>
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        ArraySet {
            inner: iter.cloned().collect(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: Debug, C> Debug for ArraySet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySet")
            .field("contents", &self.inner)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("comparator", &TypeName::<C>::new())
            .finish()
    }
}

impl<T: Display, C> Display for ArraySet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, item) in self.inner.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
