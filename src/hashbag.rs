//! Mutable bag (multiset) of elements with multiplicities.
//!
//! This module provides [`Bag`], backed by a hash map from element to a
//! strictly positive count. An element is stored if and only if its count
//! is at least one; any update that would bring a count to zero or below
//! deletes the key instead.
//!
//! Two sizes are tracked separately:
//!
//! - [`Bag::count`] is the number of *distinct* elements, mirroring
//!   [`Set::count`](crate::Set::count).
//! - [`Bag::total`] is the number of occurrences, i.e. `items().len()`.
//!
//! # Examples
//!
//! ```rust
//! use tallyset::Bag;
//!
//! let mut bag = Bag::new();
//! assert_eq!(bag.add("cat", 2), 2);
//! assert_eq!(bag.add("cat", 1), 3);
//! assert_eq!(bag.remove("cat", 1), 2);
//!
//! // Removing at least as many copies as present deletes the element.
//! assert_eq!(bag.remove("cat", 10), 0);
//! assert_eq!(bag.contains("cat"), 0);
//! assert!(bag.is_empty());
//! ```
//!
//! # Bag Operations
//!
//! ```rust
//! use tallyset::Bag;
//!
//! let bag1 = Bag::of(["cat", "cat", "dog", "pig"]);
//! let bag2 = Bag::of(["cat", "dog", "elephant"]);
//!
//! assert_eq!(bag1.union(&bag2).to_string(), "[cat, cat, cat, dog, dog, elephant, pig]");
//! assert_eq!(bag1.intersection(&bag2).to_string(), "[cat, dog]");
//! assert_eq!(bag1.difference(&bag2).to_string(), "[cat, pig]");
//! assert_eq!(bag2.difference(&bag1).to_string(), "[elephant]");
//! assert_eq!(bag1.complement(&bag2).to_string(), "[cat, elephant, pig]");
//! ```

use std::borrow::Borrow;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::{self, FromIterator};

use crate::element::Element;
use crate::hashing::{self, ElementMap};
use crate::hashset::Set;
use crate::render;

// =============================================================================
// Bag Definition
// =============================================================================

/// A bag (multiset) of elements of type `T`.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `add` / `remove`       | O(1) expected     |
/// | `contains`             | O(1) expected     |
/// | `count`                | O(1)              |
/// | `total`                | O(n)              |
/// | `items`                | O(t log t), t = `total` |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(n)              |
/// | `difference`           | O(n)              |
/// | `complement`           | O(n + m)          |
#[derive(Clone)]
pub struct Bag<T> {
    inner: ElementMap<T, usize>,
}

impl<T> Bag<T> {
    /// Creates a new empty bag.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty bag with room for at least `capacity` distinct
    /// elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: hashing::map_with_capacity(capacity),
        }
    }

    /// Returns the number of distinct elements, not the number of
    /// occurrences. See [`Bag::total`] for the latter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let bag = Bag::of(["cat", "cat", "cow"]);
    /// assert_eq!(bag.count(), 2);
    /// assert_eq!(bag.total(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of occurrences over all elements.
    #[must_use]
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }

    /// Returns `true` if the bag contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over `(element, multiplicity)` pairs in
    /// unspecified order.
    #[must_use]
    pub fn iter(&self) -> BagIterator<'_, T> {
        BagIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Element> Bag<T> {
    /// Creates a bag holding one copy per occurrence in `values`.
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Adds `copies` copies of `value`, returning the resulting multiplicity.
    ///
    /// A negative `copies` takes copies away under the same policy as
    /// [`Bag::remove`]: if the result would not be positive the element is
    /// deleted and `0` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let mut bag = Bag::new();
    /// assert_eq!(bag.add("cow", 2), 2);
    /// assert_eq!(bag.add("cow", -1), 1);
    /// assert_eq!(bag.add("cow", -5), 0);
    /// assert_eq!(bag.count(), 0);
    /// ```
    pub fn add(&mut self, value: T, copies: isize) -> usize {
        if copies < 0 {
            return self.remove(&value, copies.unsigned_abs());
        }
        if copies == 0 {
            return self.contains(&value);
        }

        let count = self.inner.entry(value).or_insert(0);
        *count = count.saturating_add(copies.unsigned_abs());
        *count
    }

    /// Adds one copy of each value in `values`.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value, 1);
        }
    }

    /// Removes `copies` copies of `value`, returning the multiplicity left.
    ///
    /// Removal clamps instead of subtracting past zero: when `copies` is at
    /// least the current multiplicity, or `value` is absent, the element is
    /// deleted and `0` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let mut bag = Bag::new();
    /// bag.add("cat", 3);
    /// assert_eq!(bag.remove("cat", 1), 2);
    /// assert_eq!(bag.remove("cat", 2), 0);
    /// assert_eq!(bag.remove("cat", 3), 0);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q, copies: usize) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(count) = self.inner.get_mut(value) else {
            return 0;
        };
        if copies < *count {
            *count -= copies;
            return *count;
        }
        self.inner.remove(value);
        0
    }

    /// Returns the multiplicity of `value`, or `0` if it is absent.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(value).copied().unwrap_or(0)
    }

    /// Returns every occurrence, each element repeated by its multiplicity,
    /// as one ascending list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let bag = Bag::of([2, 1, 2, 3, 1, 2]);
    /// assert_eq!(bag.items(), vec![1, 1, 2, 2, 2, 3]);
    /// ```
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        render::sorted(
            self.inner
                .iter()
                .flat_map(|(element, &count)| iter::repeat_n(element.clone(), count)),
        )
    }

    /// Returns the common elements, each with the smaller of its two
    /// multiplicities. Elements held by only one bag are left out.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter_map(|(element, count)| {
                let common = count.min(other.contains(element));
                (common > 0).then(|| (element.clone(), common))
            })
            .collect()
    }

    /// Returns every element of either bag with the sum of its
    /// multiplicities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let bag1 = Bag::of(["cat", "cat", "cow"]);
    /// let bag2 = Bag::of(["cat", "pig"]);
    /// let union = bag1.union(&bag2);
    /// assert_eq!(union.contains("cat"), 3);
    /// assert_eq!(union.contains("cow"), 1);
    /// assert_eq!(union.contains("pig"), 1);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().map(|(element, count)| (element.clone(), count)));
        result
    }

    /// Returns the elements of `self` with `other`'s multiplicities taken
    /// away, dropping elements whose count reaches zero.
    ///
    /// Elements found only in `other` never appear in the result.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter_map(|(element, count)| {
                let remaining = count.saturating_sub(other.contains(element));
                (remaining > 0).then(|| (element.clone(), remaining))
            })
            .collect()
    }

    /// Returns the symmetric difference: the union of
    /// `self.difference(other)` and `other.difference(self)`.
    ///
    /// Unlike [`Set::complement`](crate::Set::complement), this operation is
    /// symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let bag1 = Bag::of(["cat", "cat", "dog", "pig"]);
    /// let bag2 = Bag::of(["cat", "dog", "elephant"]);
    /// assert_eq!(bag1.complement(&bag2), bag2.complement(&bag1));
    /// ```
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Returns `true` if every element has the same multiplicity in both
    /// bags.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    /// Returns `true` if no element occurs more often in `self` than in
    /// `other`.
    #[must_use]
    pub fn is_subbag(&self, other: &Self) -> bool {
        self.iter()
            .all(|(element, count)| count <= other.contains(element))
    }

    /// Returns the set of distinct elements in the bag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Bag;
    ///
    /// let bag = Bag::of(["cat", "cat", "dog"]);
    /// assert_eq!(bag.distinct().items(), vec!["cat", "dog"]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Set<T> {
        self.inner.keys().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the `(element, multiplicity)` pairs of a
/// [`Bag`], in unspecified order.
pub struct BagIterator<'a, T> {
    inner: hash_map::Iter<'a, T, usize>,
}

impl<'a, T> Iterator for BagIterator<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, &count)| (element, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for BagIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over every occurrence in a [`Bag`], in ascending
/// order.
pub struct BagIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for BagIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for BagIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Bag<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Element> FromIterator<(T, usize)> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = (T, usize)>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Element> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Element> Extend<(T, usize)> for Bag<T> {
    fn extend<I: IntoIterator<Item = (T, usize)>>(&mut self, iter: I) {
        for (element, copies) in iter {
            if copies > 0 {
                let count = self.inner.entry(element).or_insert(0);
                *count = count.saturating_add(copies);
            }
        }
    }
}

impl<T: Element> From<Set<T>> for Bag<T> {
    fn from(set: Set<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T: Element> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = BagIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        BagIntoIterator {
            inner: self.items().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = (&'a T, usize);
    type IntoIter = BagIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> Eq for Bag<T> {}

impl<T: Element + fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::debug_list(formatter, self.occurrences())
    }
}

impl<T: Element + fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_list(formatter, self.occurrences())
    }
}

impl<T: Element> Bag<T> {
    /// Borrowed, ascending counterpart of `items`.
    fn occurrences(&self) -> Vec<&T> {
        render::sorted(
            self.inner
                .iter()
                .flat_map(|(element, &count)| iter::repeat_n(element, count)),
        )
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Element> serde::Serialize for Bag<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.occurrences())
    }
}

#[cfg(feature = "serde")]
struct BagVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> BagVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for BagVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = Bag<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut bag = Bag::new();
        while let Some(element) = seq.next_element()? {
            bag.add(element, 1);
        }
        Ok(bag)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Bag<T>
where
    T: serde::Deserialize<'de> + Element,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BagVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
