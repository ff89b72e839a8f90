//! Ordering and rendering helpers shared by [`Set`](crate::Set) and
//! [`Bag`](crate::Bag).

use std::fmt;

/// Materializes `elements` into a fresh vector sorted in ascending order.
pub(crate) fn sorted<T: Ord, I: IntoIterator<Item = T>>(elements: I) -> Vec<T> {
    let mut result: Vec<T> = elements.into_iter().collect();
    result.sort_unstable();
    result
}

/// Writes `elements` as `[e1, e2, ...]` using each element's `Display`.
pub(crate) fn write_list<I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

/// Writes `elements` as a debug list, honoring `{:#?}`.
pub(crate) fn debug_list<I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Debug,
{
    formatter.debug_list().entries(elements).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Listed(Vec<i32>);

    impl fmt::Display for Listed {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_list(formatter, &self.0)
        }
    }

    #[rstest]
    #[case(vec![], "[]")]
    #[case(vec![7], "[7]")]
    #[case(vec![1, 2, 3], "[1, 2, 3]")]
    fn test_write_list(#[case] elements: Vec<i32>, #[case] expected: &str) {
        assert_eq!(Listed(elements).to_string(), expected);
    }

    #[rstest]
    fn test_sorted_is_ascending_and_keeps_duplicates() {
        assert_eq!(sorted(vec![3, 1, 2, 1]), vec![1, 1, 2, 3]);
    }

    #[rstest]
    fn test_sorted_strings() {
        assert_eq!(sorted(["pig", "cat", "dog"]), vec!["cat", "dog", "pig"]);
    }
}
