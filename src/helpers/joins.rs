//! Key-based joins between two keyed collections.
//!
//! The left (outer) collection drives the output: rows come out in left order, and for each
//! left row its right matches come out in right order. Keys compare by value.
//!
//! ## Available operations
//! - [`PCollection::join_inner`](crate::PCollection::join_inner) - one row per match; an
//!   unmatched left row produces nothing
//! - [`PCollection::join_left`](crate::PCollection::join_left) - like inner, but an
//!   unmatched left row produces one row with `None`
//! - [`PCollection::join_grouped`](crate::PCollection::join_grouped) - one row per left row
//!   carrying **all** of its matches, ready for aggregation
//! - [`PCollection::join_strict`](crate::PCollection::join_strict) - inner join that fails on
//!   the first unmatched left row
//! - [`PCollection::join_with`](crate::PCollection::join_with) - inner join whose unmatched
//!   rows are resolved by a [`TransformConfig`](crate::TransformConfig)
//! - [`PCollection::lookup_sum`](crate::PCollection::lookup_sum) - one row per left row with
//!   the sum of all of its matches
//!
//! ## Examples
//! ```
//! use prototypes::*;
//!
//! let bosses = from_vec(vec![("Ursula", "Flotsam"), ("Ursula", "Jetsam"), ("Jafar", "Iago")])
//!     .map(|(boss, kick)| (kick.to_string(), boss.to_string()));
//! let loyalty = from_vec(vec![("Flotsam".to_string(), 8u32), ("Jetsam".to_string(), 12)]);
//!
//! let joined = bosses.join_inner(&loyalty).collect_seq();
//! assert_eq!(joined.len(), 2); // Iago has no loyalty row and is skipped
//! ```

use crate::error::TransformResult;
use crate::{CombineFn, MissingMatch, PCollection, RFBound, Sum, TransformConfig};
use indexmap::IndexMap;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use tracing::trace;

/// Index the right side by key, keeping each key's rows in input order.
fn index_right<K, W>(right: &PCollection<(K, W)>) -> IndexMap<K, Vec<W>>
where
    K: RFBound + Eq + Hash,
    W: RFBound,
{
    let mut rm: IndexMap<K, Vec<W>> = IndexMap::new();
    for (k, w) in right.iter() {
        rm.entry(k.clone()).or_default().push(w.clone());
    }
    rm
}

impl<K, V> PCollection<(K, V)>
where
    K: RFBound + Eq + Hash + Display,
    V: RFBound,
{
    /// Inner join on key with another `(K, W)` -> `(K, (V, W))`.
    ///
    /// Emits one row for every `(k, v)` on the left and `(k, w)` on the right with the same
    /// `k`. An empty right side yields an empty result.
    #[must_use]
    pub fn join_inner<W>(&self, right: &PCollection<(K, W)>) -> PCollection<(K, (V, W))>
    where
        W: RFBound,
    {
        let rm = index_right(right);
        let mut out: Vec<(K, (V, W))> = Vec::new();
        for (k, v) in self.iter() {
            match rm.get(k) {
                Some(ws) => {
                    for w in ws {
                        out.push((k.clone(), (v.clone(), w.clone())));
                    }
                }
                None => trace!(key = %k, "inner join: no match"),
            }
        }
        PCollection { items: out }
    }

    /// Left outer join on key with `(K, W)` -> `(K, (V, Option<W>))`.
    ///
    /// Emits all left rows; a missing right value appears as `None`.
    #[must_use]
    pub fn join_left<W>(&self, right: &PCollection<(K, W)>) -> PCollection<(K, (V, Option<W>))>
    where
        W: RFBound,
    {
        let rm = index_right(right);
        let mut out: Vec<(K, (V, Option<W>))> = Vec::new();
        for (k, v) in self.iter() {
            match rm.get(k) {
                Some(ws) => {
                    for w in ws {
                        out.push((k.clone(), (v.clone(), Some(w.clone()))));
                    }
                }
                None => out.push((k.clone(), (v.clone(), None))),
            }
        }
        PCollection { items: out }
    }

    /// Pair every left row with all of its right matches: `(K, (V, Vec<W>))`.
    ///
    /// Exactly one row per left row; the match list is empty when nothing matches. Use
    /// this when the combine step must see every match, e.g. summing over all of them.
    #[must_use]
    pub fn join_grouped<W>(&self, right: &PCollection<(K, W)>) -> PCollection<(K, (V, Vec<W>))>
    where
        W: RFBound,
    {
        let rm = index_right(right);
        PCollection {
            items: self
                .iter()
                .map(|(k, v)| {
                    let ws = rm.get(k).cloned().unwrap_or_default();
                    (k.clone(), (v.clone(), ws))
                })
                .collect(),
        }
    }

    /// Inner join that rejects unmatched left rows.
    ///
    /// # Errors
    /// [`TransformError::NoMatch`](crate::TransformError::NoMatch) naming `relation` and the
    /// first left key without a match.
    pub fn join_strict<W>(
        &self,
        right: &PCollection<(K, W)>,
        relation: &'static str,
    ) -> TransformResult<PCollection<(K, (V, W))>>
    where
        W: RFBound,
    {
        let strict = TransformConfig::new().with_missing_match(MissingMatch::Fail);
        self.join_with(right, relation, &strict)
    }

    /// Sum every right value matching each left row: `(K, (V, N))`.
    ///
    /// One row per left row, in left order. A left row with no match sums to
    /// `N::default()`.
    #[must_use]
    pub fn lookup_sum<N>(&self, right: &PCollection<(K, N)>) -> PCollection<(K, (V, N))>
    where
        N: RFBound + Add<Output = N> + Default,
    {
        let sum = Sum::<N>::new();
        self.join_grouped(right).map(|(k, (v, ns))| {
            let mut acc = sum.create();
            for n in ns {
                sum.add_input(&mut acc, n.clone());
            }
            (k.clone(), (v.clone(), sum.finish(acc)))
        })
    }

    /// Inner join whose unmatched left rows are handled by `config.missing_match`.
    ///
    /// `relation` names the right side in logs and errors.
    ///
    /// # Errors
    /// [`TransformError::NoMatch`](crate::TransformError::NoMatch) for the first unmatched
    /// left key under [`MissingMatch::Fail`](crate::MissingMatch::Fail).
    pub fn join_with<W>(
        &self,
        right: &PCollection<(K, W)>,
        relation: &'static str,
        config: &TransformConfig,
    ) -> TransformResult<PCollection<(K, (V, W))>>
    where
        W: RFBound,
    {
        let rm = index_right(right);
        let mut out: Vec<(K, (V, W))> = Vec::new();
        for (k, v) in self.iter() {
            match rm.get(k) {
                Some(ws) => {
                    for w in ws {
                        out.push((k.clone(), (v.clone(), w.clone())));
                    }
                }
                None => config.on_missing(relation, k)?,
            }
        }
        Ok(PCollection { items: out })
    }
}
