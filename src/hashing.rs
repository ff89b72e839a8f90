//! Hasher selection for the internal element maps.
//!
//! The default is the standard library's `RandomState`. The `fxhash` and
//! `ahash` features swap in a faster hasher; `fxhash` wins when both are
//! enabled. Nothing observable depends on the choice, since every ordered
//! view sorts its output.

use std::collections::HashMap;

#[cfg(feature = "fxhash")]
pub(crate) type ElementHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type ElementHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type ElementHasher = std::collections::hash_map::RandomState;

/// Map from element to per-element state, keyed with [`ElementHasher`].
pub(crate) type ElementMap<K, V> = HashMap<K, V, ElementHasher>;

/// Creates an empty map with room for at least `capacity` elements.
pub(crate) fn map_with_capacity<K, V>(capacity: usize) -> ElementMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, ElementHasher::default())
}
