//! The capability bound shared by [`Set`](crate::Set) and [`Bag`](crate::Bag)
//! elements.
//!
//! An element must be comparable for equality, totally ordered (so that
//! enumeration and rendering are deterministic) and hashable (so it can key
//! the internal map). It must also be `Clone`, because derived containers
//! never share storage with their operands.
//!
//! # Floating Point Elements
//!
//! `f32` and `f64` are neither `Ord` nor `Hash`. Wrap them in
//! [`OrderedFloat`], re-exported here, which orders `NaN` above every other
//! value and treats it as equal to itself.
//!
//! ```rust
//! use tallyset::{OrderedFloat, Set};
//!
//! let set: Set<OrderedFloat<f64>> = [2.5, 0.5, 1.5].map(OrderedFloat).into_iter().collect();
//! assert_eq!(set.to_string(), "[0.5, 1.5, 2.5]");
//! ```

use std::hash::Hash;

pub use ordered_float::OrderedFloat;

/// Types usable as [`Set`](crate::Set) and [`Bag`](crate::Bag) elements.
///
/// Implemented automatically for every `Clone + Ord + Hash` type, which
/// covers all integer widths, `char`, `bool`, `String`, `&str` and
/// [`OrderedFloat`].
pub trait Element: Clone + Ord + Hash {}

impl<T: Clone + Ord + Hash> Element for T {}
