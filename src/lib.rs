//! # tallyset
//!
//! Generic [`Set`] and [`Bag`] (multiset) containers over any element type
//! with equality and a total order, together with their algebra: union,
//! intersection, difference, complement and equality.
//!
//! ## Overview
//!
//! - **[`Set`]**: records presence of distinct elements.
//! - **[`Bag`]**: records a strictly positive multiplicity per element.
//! - **Algebra**: [`Semigroup`](algebra::Semigroup) and
//!   [`Monoid`](algebra::Monoid) instances built on union.
//! - **Rendering**: `Display` always lists elements in ascending order,
//!   as `[a, b, c]`, independent of the internal hash map layout.
//!
//! Derived containers (union, intersection, ...) are always freshly
//! allocated. Operands are never mutated by them.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for [`Set`] and [`Bag`]
//! - `fxhash`: use `rustc_hash::FxBuildHasher` for internal storage
//! - `ahash`: use `ahash::RandomState` for internal storage
//! - `full`: enable all optional integrations
//!
//! ## Example
//!
//! ```rust
//! use tallyset::prelude::*;
//!
//! let pets = set!["cat", "parakeet", "sheepdog", "goldfish"];
//! let farm = set!["cow", "chicken", "pig", "sheepdog"];
//! assert_eq!(pets.intersection(&farm).items(), vec!["sheepdog"]);
//!
//! let bag1 = bag!["cat", "cat", "dog", "pig"];
//! let bag2 = bag!["cat", "dog", "elephant"];
//! assert_eq!(bag1.difference(&bag2).to_string(), "[cat, pig]");
//! assert_eq!(bag1.complement(&bag2).to_string(), "[cat, elephant, pig]");
//! ```
//!
//! ## Thread Safety
//!
//! Containers are plain owned values. Mutating methods take `&mut self`,
//! so sharing one instance across threads needs external synchronization
//! (for example a `Mutex`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the element bound, the algebra traits and
/// the constructor macros.
///
/// # Usage
///
/// ```rust
/// use tallyset::prelude::*;
///
/// let set: Set<i32> = set![3, 1, 2];
/// assert_eq!(set.to_string(), "[1, 2, 3]");
/// ```
pub mod prelude {
    pub use crate::algebra::{Monoid, Semigroup};
    pub use crate::element::{Element, OrderedFloat};
    pub use crate::hashbag::Bag;
    pub use crate::hashset::Set;
    pub use crate::{bag, set};
}

pub mod algebra;
mod element;
mod hashbag;
mod hashing;
mod hashset;
mod macros;
mod render;

pub use element::{Element, OrderedFloat};
pub use hashbag::{Bag, BagIntoIterator, BagIterator};
pub use hashset::{Set, SetIntoIterator, SetIterator};
