//! Variadic constructors for [`Set`](crate::Set) and [`Bag`](crate::Bag).

/// Builds a [`Set`](crate::Set) from a list of values.
///
/// Duplicates collapse into one element. With no arguments an empty set is
/// built and its element type is inferred.
///
/// # Examples
///
/// ```
/// use tallyset::set;
///
/// let set = set!["cat", "dog", "cat"];
/// assert_eq!(set.count(), 2);
/// assert_eq!(set.to_string(), "[cat, dog]");
///
/// let empty: tallyset::Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Set::of([$($element),+])
    };
}

/// Builds a [`Bag`](crate::Bag) from a list of values, one copy per
/// occurrence.
///
/// # Examples
///
/// ```
/// use tallyset::bag;
///
/// let bag = bag![2, 1, 2];
/// assert_eq!(bag.contains(&2), 2);
/// assert_eq!(bag.to_string(), "[1, 2, 2]");
///
/// let empty: tallyset::Bag<&str> = bag![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bag {
    () => {
        $crate::Bag::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Bag::of([$($element),+])
    };
}
