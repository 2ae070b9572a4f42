//! Distinct helpers: order-preserving deduplication for unkeyed and keyed collections.
//!
//! # Overview
//! - [`PCollection::distinct`] - Keep the first occurrence of each element
//! - [`PCollection::distinct_by`] - Keep the first element for each derived key
//! - [`PCollection::distinct_per_key`](crate::PCollection::distinct_per_key) - Remove duplicate values within each key
//!
//! Output order is the order of first occurrence in the input. Equality is value
//! equality on the element (or on the derived key for `distinct_by`).

use crate::combiners::DistinctOrdered;
use crate::{PCollection, RFBound};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::hash::Hash;

impl<T: RFBound + Eq + Hash> PCollection<T> {
    /// Exact distinct, preserving first-occurrence order.
    ///
    /// # Example
    /// ```
    /// use prototypes::*;
    ///
    /// let toppings = from_vec(vec![vec!["a", "b"], vec!["b", "c"]])
    ///     .flat_map(|t: &Vec<&str>| t.clone())
    ///     .distinct()
    ///     .collect_seq();
    /// assert_eq!(toppings, vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        let items = self.combine_globally(DistinctOrdered::<T>::new());
        PCollection { items }
    }
}

impl<T: RFBound> PCollection<T> {
    /// Keep the first element seen for each key produced by `key_fn`.
    #[must_use]
    pub fn distinct_by<K, F>(self, key_fn: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen: HashSet<K> = HashSet::new();
        PCollection {
            items: self
                .items
                .into_iter()
                .filter(|t| seen.insert(key_fn(t)))
                .collect(),
        }
    }
}

impl<K, V> PCollection<(K, V)>
where
    K: RFBound + Eq + Hash,
    V: RFBound + Eq + Hash,
{
    /// Exact per-key distinct of values.
    ///
    /// Keys keep their first-seen order; within a key, values keep their first-seen order.
    #[must_use]
    pub fn distinct_per_key(self) -> Self {
        let mut groups: IndexMap<K, IndexSet<V>> = IndexMap::new();
        for (k, v) in self.items {
            groups.entry(k).or_default().insert(v);
        }
        PCollection {
            items: groups
                .into_iter()
                .flat_map(|(k, vs)| vs.into_iter().map(move |v| (k.clone(), v)))
                .collect(),
        }
    }
}
