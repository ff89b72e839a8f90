//! Mutable set of distinct elements.
//!
//! This module provides [`Set`], a set backed by a hash map from element to
//! unit. Membership is the only state: removing an element deletes its key,
//! so the map never holds tombstones.
//!
//! - O(1) expected `add`, `remove` and `contains`
//! - O(1) `count`
//! - O(n log n) `items` and rendering, which sort a fresh copy
//!
//! Set algebra (`union`, `intersection`, `complement`, ...) always builds a
//! new set and leaves both operands untouched.
//!
//! # Examples
//!
//! ```rust
//! use tallyset::Set;
//!
//! let mut set = Set::new();
//! assert!(set.add("cat"));
//! assert!(!set.add("cat"));
//! assert_eq!(set.add_all(["dog", "cat", "pig"]), 2);
//!
//! assert_eq!(set.count(), 3);
//! assert_eq!(set.items(), vec!["cat", "dog", "pig"]);
//! assert_eq!(set.to_string(), "[cat, dog, pig]");
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use tallyset::Set;
//!
//! let set_a = Set::of([1, 2, 3]);
//! let set_b = Set::of([2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b).items(), vec![1, 2, 3, 4]);
//! assert_eq!(set_a.intersection(&set_b).items(), vec![2, 3]);
//! assert_eq!(set_a.complement(&set_b).items(), vec![1]);
//! assert_eq!(set_a.symmetric_difference(&set_b).items(), vec![1, 4]);
//! ```

use std::borrow::Borrow;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use crate::element::Element;
use crate::hashing::{self, ElementMap};
use crate::render;

// =============================================================================
// Set Definition
// =============================================================================

/// A set of distinct elements of type `T`.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `add`                  | O(1) expected     |
/// | `remove`               | O(1) expected     |
/// | `contains`             | O(1) expected     |
/// | `count`                | O(1)              |
/// | `items`                | O(n log n)        |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `complement`           | O(n)              |
/// | `equals`               | O(n)              |
///
/// # Examples
///
/// ```rust
/// use tallyset::Set;
///
/// let set = Set::of(["cat", "parakeet", "sheepdog", "goldfish"]);
/// assert!(set.contains("cat"));
/// assert!(!set.contains("cow"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: ElementMap<T, ()>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.to_string(), "[]");
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: hashing::map_with_capacity(capacity),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let set = Set::of([1, 2, 2, 3]);
    /// assert_eq!(set.count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in unspecified order.
    ///
    /// Use [`Set::items`] when a deterministic order is needed.
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }
}

impl<T: Element> Set<T> {
    /// Creates a set holding every distinct value of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let set = Set::of(["b", "a", "b"]);
    /// assert_eq!(set.items(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was newly inserted, `false` if it was
    /// already present. Adding a present value leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(42));
    /// assert!(!set.add(42));
    /// assert_eq!(set.count(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Adds every value of `values`, returning how many were newly inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let mut set = Set::of([1]);
    /// assert_eq!(set.add_all([1, 2, 3, 3]), 2);
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        values
            .into_iter()
            .fold(0, |added, value| if self.add(value) { added + 1 } else { added })
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if the value was present, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let mut set = Set::of(["cat".to_string()]);
    /// assert!(set.remove("cat"));
    /// assert!(!set.remove("cat"));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value).is_some()
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// The value may be any borrowed form of the element type, such as
    /// `&str` for a `Set<String>`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(value)
    }

    /// Returns all elements in ascending order.
    ///
    /// The vector is freshly built on every call and never aliases the
    /// set's storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let set = Set::of([3, 1, 2]);
    /// assert_eq!(set.items(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        render::sorted(self.inner.keys().cloned())
    }

    /// Returns the elements present in both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let pets = Set::of(["cat", "parakeet", "sheepdog", "goldfish"]);
    /// let farm = Set::of(["cow", "chicken", "pig", "sheepdog"]);
    /// assert_eq!(pets.intersection(&farm).items(), vec!["sheepdog"]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.count() <= other.count() {
            (self, other)
        } else {
            (other, self)
        };

        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements present in either `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.count().max(other.count()));
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// `self` plays the role of the universe, so the operation is
    /// asymmetric: elements found only in `other` never appear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// let universe = Set::of([1, 2, 3, 4]);
    /// let cut = Set::of([2, 4, 6]);
    /// assert_eq!(universe.complement(&cut).items(), vec![1, 3]);
    /// assert_eq!(cut.complement(&universe).items(), vec![6]);
    /// ```
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Same as [`Set::complement`], under the conventional name.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.complement(other)
    }

    /// Returns the elements present in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.complement(other).union(&other.complement(self))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.count() <= other.count() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the two sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).is_empty()
    }

    /// Returns `true` if both sets hold exactly the same elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tallyset::Set;
    ///
    /// assert!(Set::of([1, 2, 3]).equals(&Set::of([3, 2, 1, 1])));
    /// assert!(!Set::of([1, 2]).equals(&Set::of([1, 2, 3])));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`], in unspecified order.
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`], in ascending order.
pub struct SetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Element> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: render::sorted(self.inner.into_keys()).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> Eq for Set<T> {}

impl<T: Element + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::debug_list(formatter, render::sorted(self.iter()))
    }
}

impl<T: Element + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_list(formatter, render::sorted(self.iter()))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Element> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(render::sorted(self.iter()))
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Element,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
