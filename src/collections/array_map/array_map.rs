use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, Index, RangeBounds};

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::algorithm::merge::{self, Keep};
use crate::algorithm::{self, Comparator, NaturalOrder};
use crate::util::error::{IndexOutOfBounds, KeyNotFound, OrderViolation};
use crate::util::fmt::{DebugPairs, TypeName};
use crate::util::result::{OptionExtension, ResultExtension};

/// A map of keys to values, stored as a [`Vec`] of pairs sorted by key.
///
/// Keys are unique: no two keys in the map are equivalent under the comparator `C`, which
/// defaults to [`NaturalOrder`]. Lookups are binary searches. Inserting or removing shifts all
/// subsequent entries, so the map suits read-heavy use or small sizes.
///
/// It is a logic error for a key to be manipulated in a way that changes its ordering relative
/// to the others. Because of this, ArrayMap's API prevents mutable access to its keys. Values can
/// be mutated freely.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the ArrayMap.
/// - `i`: The index of the entry in question.
/// - `m`: The number of entries being added in bulk.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` / `contains` / `index_of` | `O(log n)` |
/// | `set` | `O(log n)`, `O(n-i)`* |
/// | `remove` | `O(log n + n-i)` |
/// | `at` / `value_at_mut` | `O(1)` |
/// | `erase_if` | `O(n)` |
/// | `extend` | `O(m log m + n)` |
///
/// \* Only if the key isn't already present and the entry has to be inserted.
#[derive(Clone)]
pub struct ArrayMap<K, V, C = NaturalOrder> {
    pub(crate) inner: Vec<(K, V)>,
    pub(crate) comparator: C,
}

impl<K, V> ArrayMap<K, V> {
    /// Creates a new, empty ArrayMap ordered by [`NaturalOrder`]. Memory will be allocated when
    /// the first entry is added.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let map: ArrayMap<u8, &str> = ArrayMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.cap(), 0);
    /// ```
    pub const fn new() -> ArrayMap<K, V> {
        ArrayMap::with_comparator(NaturalOrder)
    }

    /// Creates a new, empty ArrayMap ordered by [`NaturalOrder`], with space for at least `cap`
    /// entries.
    pub fn with_cap(cap: usize) -> ArrayMap<K, V> {
        ArrayMap::with_cap_and_comparator(cap, NaturalOrder)
    }
}

impl<K, V, C> ArrayMap<K, V, C> {
    /// Creates a new, empty ArrayMap ordered by the provided `comparator`.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let mut map = ArrayMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.set(1, "one");
    /// map.set(3, "three");
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 1]);
    /// ```
    pub const fn with_comparator(comparator: C) -> ArrayMap<K, V, C> {
        ArrayMap {
            inner: Vec::new(),
            comparator,
        }
    }

    /// Creates a new, empty ArrayMap with space for at least `cap` entries, ordered by the
    /// provided `comparator`.
    pub fn with_cap_and_comparator(cap: usize, comparator: C) -> ArrayMap<K, V, C> {
        ArrayMap {
            inner: Vec::with_capacity(cap),
            comparator,
        }
    }

    /// Returns the number of entries in the ArrayMap.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the ArrayMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of entries the ArrayMap can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the comparator that orders the keys.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the entries as a slice, sorted by key.
    pub const fn as_slice(&self) -> &[(K, V)] {
        self.inner.as_slice()
    }

    /// Consumes the ArrayMap, returning its entries sorted by key.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.inner
    }

    /// Ensures that the ArrayMap has capacity for at least `extra` more entries.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra);
    }

    /// Shrinks the capacity of the ArrayMap as close to its length as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the entry at the provided `index`, in key order.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let map = ArrayMap::from([(5, "five"), (3, "three")]);
    /// assert_eq!(map.at(0), (&3, &"three"));
    /// assert_eq!(map.at(1), (&5, &"five"));
    /// ```
    pub fn at(&self, index: usize) -> (&K, &V) {
        self.get_at(index).or_throw(|| IndexOutOfBounds { index, len: self.len() })
    }

    /// Returns the entry at the provided `index`, in key order, or None if it is out of bounds.
    pub fn get_at(&self, index: usize) -> Option<(&K, &V)> {
        self.inner.get(index).map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value at the provided `index`, or None if it is out of
    /// bounds.
    pub fn value_at_mut(&mut self, index: usize) -> Option<&mut V> {
        self.inner.get_mut(index).map(|(_, v)| v)
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first().map(|(k, v)| (k, v))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last().map(|(k, v)| (k, v))
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.remove(0))
        }
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.inner.pop()
    }

    /// Removes the entry at the provided `index`, shifting all following entries to fill the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> (K, V) {
        self.check_index(index);
        self.inner.remove(index)
    }

    /// Removes every entry for which `predicate` returns true, returning the number of entries
    /// removed. The remaining entries keep their order.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let mut map: ArrayMap<_, _> = (0..6).map(|i| (i, i * 10)).collect();
    /// assert_eq!(map.erase_if(|k, _| k % 2 == 1), 3);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [0, 20, 40]);
    /// ```
    pub fn erase_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let initial_len = self.inner.len();
        self.inner.retain(|(k, v)| !predicate(k, v));
        initial_len - self.inner.len()
    }

    /// Returns an iterator over all entries in key order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.inner.iter())
    }

    /// Returns an iterator over all entries in key order, with mutable references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(self.inner.iter_mut())
    }

    /// Returns an iterator over all keys in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, in the order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values as mutable references, in the order of their keys.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }).throw()
        }
    }
}

impl<K, V, C> ArrayMap<K, V, C> {
    /// Returns the index of the entry for `key`, or None if the map contains no such entry.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let map = ArrayMap::from([(String::from("b"), 2), (String::from("a"), 1)]);
    /// assert_eq!(map.index_of("a"), Some(0));
    /// assert_eq!(map.index_of("b"), Some(1));
    /// assert_eq!(map.index_of("c"), None);
    /// ```
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        // As with the standard library, Q is a borrowed form of K. Ordering must carry over the
        // borrow, which the comparator has to uphold for both.
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(key).ok()
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(key).is_ok()
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let index = self.search(key).ok()?;
        let (k, v) = &self.inner[index];
        Some((k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let index = self.search(key).ok()?;
        Some(&mut self.inner[index].1)
    }

    /// Returns a reference to the value associated with the provided `key`, or [`KeyNotFound`] if
    /// the map contains no value for `key`.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let index = self.search(key).ok()?;
        Some(self.inner.remove(index))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning true if there was one.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.remove_entry(key).is_some()
    }

    /// Returns the index of the first entry whose key isn't less than `key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::lower_bound_by(self.len(), |i| self.compare_at(key, i))
    }

    /// Returns the index of the first entry whose key is greater than `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::upper_bound_by(self.len(), |i| self.compare_at(key, i))
    }

    /// Returns an iterator over the entries whose keys fall within `range`, in key order.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let map: ArrayMap<_, _> = (1..=9).map(|i| (i, i * i)).collect();
    /// let squares: Vec<_> = map.range(3..6).map(|(_, v)| *v).collect();
    /// assert_eq!(squares, [9, 16, 25]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
        R: RangeBounds<Q>,
    {
        let indices = algorithm::range_bounds_by(self.len(), range, |q, i| self.compare_at(q, i));
        Iter(self.inner[indices].iter())
    }

    /// Compares `key` against the key of the entry at `index`.
    fn compare_at<Q>(&self, key: &Q, index: usize) -> std::cmp::Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let stored: &Q = self.inner[index].0.borrow();
        self.comparator.compare(key, stored)
    }

    /// Finds either the index of the entry for `key` or the index where it should be inserted.
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        algorithm::binary_search_by(self.len(), |i| self.compare_at(key, i))
    }
}

impl<K, V, C: Comparator<K>> ArrayMap<K, V, C> {
    /// Associates `value` with `key`, returning the previous value if the key was already present.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let mut map = ArrayMap::new();
    /// assert_eq!(map.set(5, "five"), None);
    /// assert_eq!(map.set(3, "three"), None);
    /// assert_eq!(map.set(5, "FIVE"), Some("five"));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map[&5], "FIVE");
    /// assert_eq!(map.at(0), (&3, &"three"));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(index) => Some(mem::replace(&mut self.inner[index].1, value)),
            Err(index) => {
                self.inner.insert(index, (key, value));
                None
            },
        }
    }

    /// Returns a mutable reference to the value for `key`, inserting the result of `default` first
    /// if the key isn't present.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = match self.search(&key) {
            Ok(index) => index,
            Err(index) => {
                self.inner.insert(index, (key, default()));
                index
            },
        };
        &mut self.inner[index].1
    }

    /// Returns a mutable reference to the value for `key`, inserting [`V::default()`](Default)
    /// first if the key isn't present.
    ///
    /// # Examples
    /// ```
    /// # use array_collections::collections::ArrayMap;
    /// let mut map: ArrayMap<String, u32> = ArrayMap::new();
    /// *map.get_or_insert_default("a".into()) = 1;
    /// *map.get_or_insert_default("a".into()) += 1;
    /// assert_eq!(map["a"], 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Creates an ArrayMap from entries that are already strictly ascending by key under
    /// `comparator`, without sorting them. The first pair of entries that breaks the order is
    /// reported otherwise.
    pub fn from_sorted_vec(
        entries: Vec<(K, V)>,
        comparator: C,
    ) -> Result<ArrayMap<K, V, C>, OrderViolation> {
        let map = ArrayMap {
            inner: entries,
            comparator,
        };
        map.check_order()?;
        Ok(map)
    }

    /// Verifies that the keys are strictly ascending. This holds unless a key has been changed
    /// through interior mutability.
    pub fn check_order(&self) -> Result<(), OrderViolation> {
        algorithm::check_strictly_ascending(&self.inner, &|a: &(K, V), b: &(K, V)| {
            self.comparator.compare(&a.0, &b.0)
        })
    }

    /// Asserts that the keys are strictly ascending, for diagnostic use.
    ///
    /// # Panics
    /// Panics if two adjacent keys are out of order or equivalent.
    pub fn assert_invariant(&self) {
        self.check_order().throw()
    }

    /// Sorts `entries` and merges them into the map, with later entries replacing the values of
    /// earlier ones for equivalent keys. Returns the number of keys added.
    pub(crate) fn merge_entries(&mut self, mut entries: Vec<(K, V)>) -> usize {
        let comparator = &self.comparator;
        merge::sort_unique(&mut entries, Keep::Last, |a, b| comparator.compare(&a.0, &b.0));
        merge::merge_unique(
            &mut self.inner,
            entries,
            |a, b| comparator.compare(&a.0, &b.0),
            |existing, incoming| existing.1 = incoming.1,
        )
    }
}

impl<K, V, C: Default> Default for ArrayMap<K, V, C> {
    fn default() -> Self {
        ArrayMap::with_comparator(C::default())
    }
}

impl<K, V, C> Deref for ArrayMap<K, V, C> {
    type Target = [(K, V)];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V, C> AsRef<[(K, V)]> for ArrayMap<K, V, C> {
    fn as_ref(&self) -> &[(K, V)] {
        &self.inner
    }
}

impl<K, V, C, Q> Index<&Q> for ArrayMap<K, V, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparator<Q>,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).or_throw(|| KeyNotFound)
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for ArrayMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ArrayMap::default();
        map.merge_entries(iter.into_iter().collect());
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for ArrayMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.merge_entries(iter.into_iter().collect());
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for ArrayMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V: PartialEq, C: Comparator<K>> PartialEq for ArrayMap<K, V, C> {
    /// Maps are equal when they hold the same number of entries and, index by index, the keys are
    /// equivalent and the values are equal. Both maps being sorted makes this sufficient.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.inner.iter().zip(other.inner.iter()).all(|(a, b)| {
                self.comparator.equivalent(&a.0, &b.0) && a.1 == b.1
            })
    }
}

impl<K, V: Eq, C: Comparator<K>> Eq for ArrayMap<K, V, C> {}

impl<K: Debug, V: Debug, C> Debug for ArrayMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayMap")
            .field("contents", &DebugPairs(&self.inner))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("comparator", &TypeName::<C>::new())
            .finish()
    }
}

impl<K: Display, V: Display, C> Display for ArrayMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (k, v)) in self.inner.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}
