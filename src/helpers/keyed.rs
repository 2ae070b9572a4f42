//! Keyed transforms: deriving keys, reshaping values, and grouping.
//!
//! Grouping keeps **first-seen key order**: the first time a key appears fixes its position
//! in the output, and later values for that key are appended to its group in input order.
//!
//! ## Provided methods
//! - [`PCollection::key_by`] -- `T -> (K, T)`
//! - [`PCollection::map_values`] / [`PCollection::filter_values`] -- value-only transforms
//! - [`PCollection::group_by_key`] -- `(K, V) -> (K, Vec<V>)`
//! - [`PCollection::into_index_map`] -- materialize `(K, V)` pairs as an ordered map
//!
//! ## Example
//! ```
//! use prototypes::*;
//!
//! let clubs = from_vec(vec![
//!     ("Art", "Pam"),
//!     ("Chess", "Pam"),
//!     ("Art", "Lou"),
//! ]);
//! let by_member = clubs
//!     .map(|(club, member)| (member.to_string(), club.to_string()))
//!     .group_by_key()
//!     .collect_seq();
//! assert_eq!(
//!     by_member,
//!     vec![
//!         ("Pam".to_string(), vec!["Art".to_string(), "Chess".to_string()]),
//!         ("Lou".to_string(), vec!["Art".to_string()]),
//!     ]
//! );
//! ```

use crate::{PCollection, RFBound};
use indexmap::IndexMap;
use std::hash::Hash;

impl<T: RFBound> PCollection<T> {
    /// Derive a key and produce `(K, T)`.
    pub fn key_by<K, F>(self, key_fn: F) -> PCollection<(K, T)>
    where
        K: RFBound + Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.map(move |t| (key_fn(t), t.clone()))
    }
}

impl<K: RFBound + Eq + Hash, V: RFBound> PCollection<(K, V)> {
    /// Transform only the value of each pair, keeping its key.
    pub fn map_values<O, F>(self, f: F) -> PCollection<(K, O)>
    where
        O: RFBound,
        F: Fn(&V) -> O,
    {
        PCollection {
            items: self.items.into_iter().map(|(k, v)| (k, f(&v))).collect(),
        }
    }

    /// Keep only pairs whose value matches `pred`.
    pub fn filter_values<F>(self, pred: F) -> PCollection<(K, V)>
    where
        F: Fn(&V) -> bool,
    {
        self.filter(move |kv| pred(&kv.1))
    }

    /// Group values by key: `(K, V) -> (K, Vec<V>)`.
    ///
    /// Keys come out in first-seen order, values in input order. The total number of
    /// values across all groups equals the input length.
    pub fn group_by_key(self) -> PCollection<(K, Vec<V>)> {
        let mut m: IndexMap<K, Vec<V>> = IndexMap::new();
        for (k, v) in self.items {
            m.entry(k).or_default().push(v);
        }
        PCollection {
            items: m.into_iter().collect(),
        }
    }

    /// Materialize as an ordered map.
    ///
    /// A repeated key keeps the position of its first occurrence and the value of its last.
    pub fn into_index_map(self) -> IndexMap<K, V> {
        self.items.into_iter().collect()
    }
}
