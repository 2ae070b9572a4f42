//! Assertion functions for transformation outputs.
//!
//! Order matters for almost every result in this crate, so every assertion here checks
//! position as well as content.

use indexmap::IndexMap;
use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics at the first index where the collections differ, or if their lengths differ.
///
/// # Example
///
/// ```
/// use prototypes::testing::assert_collections_equal;
///
/// assert_collections_equal(&["Tiger", "Snickers"], &["Tiger", "Snickers"]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    if let Some((i, (a, e))) = actual
        .iter()
        .zip(expected.iter())
        .enumerate()
        .find(|(_, (a, e))| a != e)
    {
        panic!(
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics naming the first element that fails.
///
/// # Example
///
/// ```
/// use prototypes::testing::assert_all;
///
/// assert_all(&[15u32, 14, 6], |stock| *stock > 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, item)) = collection.iter().enumerate().find(|(_, t)| !predicate(t)) {
        panic!("Predicate failed for element at index {i}:\n  Element: {item:?}");
    }
}

/// Assert that an ordered map has exactly the expected entries, in the expected order.
///
/// # Panics
///
/// Panics if the maps differ in length, key order, or any value.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use prototypes::testing::assert_index_map_eq;
///
/// let actual: IndexMap<&str, u64> = [("berries", 1), ("whipped cream", 3)].into_iter().collect();
/// assert_index_map_eq(&actual, &[("berries", 1), ("whipped cream", 3)]);
/// ```
pub fn assert_index_map_eq<K, V, Q>(actual: &IndexMap<K, V>, expected: &[(Q, V)])
where
    K: Debug + PartialEq<Q>,
    V: Debug + PartialEq,
    Q: Debug,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Map size mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "Map mismatch at index {i}:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})"
        );
    }
}
