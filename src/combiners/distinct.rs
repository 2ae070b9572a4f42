//! Distinct value combiner: `DistinctOrdered`

use crate::RFBound;
use crate::collection::CombineFn;
use indexmap::IndexSet;
use std::hash::Hash;
use std::marker::PhantomData;

/* ===================== DistinctOrdered<T> ===================== */

/// The distinct values in order of first occurrence: accumulates an `IndexSet<T>` and
/// outputs a `Vec<T>`.
///
/// A value already present is ignored, so each value keeps the position of its first
/// appearance. Backs [`PCollection::distinct`](crate::PCollection::distinct).
#[derive(Clone, Copy, Debug)]
pub struct DistinctOrdered<T>(pub PhantomData<T>);
impl<T> DistinctOrdered<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for DistinctOrdered<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CombineFn<T, IndexSet<T>, Vec<T>> for DistinctOrdered<T>
where
    T: RFBound + Eq + Hash,
{
    fn create(&self) -> IndexSet<T> {
        IndexSet::new()
    }

    fn add_input(&self, acc: &mut IndexSet<T>, v: T) {
        acc.insert(v);
    }

    fn finish(&self, acc: IndexSet<T>) -> Vec<T> {
        acc.into_iter().collect()
    }
}
