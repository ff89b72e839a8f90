//! Semigroup and Monoid instances for [`Set`] and [`Bag`].
//!
//! Both containers form a monoid under union: combining is associative and
//! the empty container is the identity. For [`Bag`] the union is additive,
//! so multiplicities are summed.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tallyset::algebra::{Monoid, Semigroup};
//! use tallyset::{Bag, Set};
//!
//! let combined = Set::of([1, 2]).combine(Set::of([2, 3]));
//! assert_eq!(combined.items(), vec![1, 2, 3]);
//!
//! let tallies = vec![Bag::of(["a"]), Bag::of(["a", "b"]), Bag::of(["b"])];
//! assert_eq!(Bag::combine_all(tallies).to_string(), "[a, a, b, b]");
//! ```

use crate::element::Element;
use crate::hashbag::Bag;
use crate::hashset::Set;

/// Types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. The operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all values of an iterator with `combine`.
    ///
    /// Returns `None` if the iterator is empty. See
    /// [`Monoid::combine_all`] for a total version.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for `combine`.
    fn empty() -> Self;

    /// Combines all values of an iterator, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Element> Semigroup for Set<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Element> Monoid for Set<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Bag Implementation
// =============================================================================

impl<T: Element> Semigroup for Bag<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other.iter().map(|(element, count)| (element.clone(), count)));
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Element> Monoid for Bag<T> {
    fn empty() -> Self {
        Self::new()
    }
}
