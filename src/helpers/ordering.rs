//! Ordering helpers for [`PCollection`].
//!
//! - [`PCollection::sort_by_key`] / [`PCollection::sort_by_key_desc`] -- **stable** sorts on
//!   a derived `Ord` key; equal keys keep their input order in both directions.
//! - [`PCollection::move_to_end_by`] -- walk the collection in its current order and emit
//!   each derived key once, at the position of its **last** visit.
//! - [`PCollection::first_max_by`] -- the first element carrying the largest key.
//!
//! Floating-point keys are wrapped in [`ordered_float::OrderedFloat`] to get a total order.
//!
//! ### Example
//! ```
//! use ordered_float::OrderedFloat;
//! use prototypes::*;
//!
//! let stars = from_vec(vec![("Rigel", 0.13, "Orion"), ("Vega", 0.03, "Lyra"), ("Betelgeuse", 0.5, "Orion")]);
//! let order = stars
//!     .sort_by_key(|s| OrderedFloat(s.1))
//!     .move_to_end_by(|s| s.2)
//!     .collect_seq();
//! assert_eq!(order, vec!["Lyra", "Orion"]);
//! ```

use crate::{PCollection, RFBound};
use indexmap::IndexSet;
use std::hash::Hash;

impl<T: RFBound> PCollection<T> {
    /// Stable ascending sort on `key_fn`.
    #[must_use]
    pub fn sort_by_key<K, F>(mut self, key_fn: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.items.sort_by_key(|t| key_fn(t));
        self
    }

    /// Stable descending sort on `key_fn`.
    ///
    /// Compares `b` against `a` rather than reversing an ascending sort, so ties keep
    /// their input order.
    #[must_use]
    pub fn sort_by_key_desc<K, F>(mut self, key_fn: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.items.sort_by(|a, b| key_fn(b).cmp(&key_fn(a)));
        self
    }

    /// Emit each key once, positioned by its most recent occurrence.
    ///
    /// Keys are visited in collection order. A key seen before is removed from its current
    /// position and appended at the end again, so `[Orion, Lyra, Orion]` becomes
    /// `[Lyra, Orion]`.
    pub fn move_to_end_by<K, F>(self, key_fn: F) -> PCollection<K>
    where
        K: RFBound + Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut out: IndexSet<K> = IndexSet::new();
        for t in &self.items {
            let k = key_fn(t);
            out.shift_remove(&k);
            out.insert(k);
        }
        PCollection {
            items: out.into_iter().collect(),
        }
    }

    /// The first element whose key is maximal, or `None` for an empty collection.
    pub fn first_max_by<K, F>(self, key_fn: F) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        for t in self.items {
            let k = key_fn(&t);
            let replace = match &best {
                Some((bk, _)) => k > *bk,
                None => true,
            };
            if replace {
                best = Some((k, t));
            }
        }
        best.map(|(_, t)| t)
    }
}
