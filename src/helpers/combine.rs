use crate::{CombineFn, PCollection, RFBound};
use indexmap::IndexMap;
use std::hash::Hash;

impl<K: RFBound + Eq + Hash, V: RFBound> PCollection<(K, V)> {
    /// Generic combine-by-key using a user-supplied `CombineFn`.
    ///
    /// Keys come out in first-seen order. An empty input yields an empty collection.
    pub fn combine_values<C, A, O>(self, comb: C) -> PCollection<(K, O)>
    where
        C: CombineFn<V, A, O>,
        O: RFBound,
    {
        let mut accs: IndexMap<K, A> = IndexMap::new();
        for (k, v) in self.items {
            comb.add_input(accs.entry(k).or_insert_with(|| comb.create()), v);
        }
        PCollection {
            items: accs.into_iter().map(|(k, a)| (k, comb.finish(a))).collect(),
        }
    }
}

impl<K, V> PCollection<(K, Vec<V>)>
where
    K: RFBound + Eq + Hash,
    V: RFBound,
{
    /// Combine each already-grouped value list, typically right after `group_by_key()`.
    pub fn combine_groups<C, A, O>(self, comb: C) -> PCollection<(K, O)>
    where
        C: CombineFn<V, A, O>,
        O: RFBound,
    {
        PCollection {
            items: self
                .items
                .into_iter()
                .map(|(k, vs)| {
                    let mut acc = comb.create();
                    for v in vs {
                        comb.add_input(&mut acc, v);
                    }
                    (k, comb.finish(acc))
                })
                .collect(),
        }
    }
}

impl<T: RFBound> PCollection<T> {
    /// Combine all elements (no key) into a single output using a [`CombineFn`].
    ///
    /// Produces a value even for empty inputs by calling `finish(create())`, so an empty
    /// collection folds to the combiner's identity (`0` for [`Sum`](crate::Sum), an empty
    /// list for [`DistinctOrdered`](crate::DistinctOrdered)).
    ///
    /// # Example
    /// ```
    /// use prototypes::*;
    ///
    /// let total = from_vec(vec![15u64, 14, 0, 21]).combine_globally(Sum::<u64>::new());
    /// assert_eq!(total, 50);
    ///
    /// let none = from_vec(Vec::<u64>::new()).combine_globally(Sum::<u64>::new());
    /// assert_eq!(none, 0);
    /// ```
    pub fn combine_globally<C, A, O>(self, comb: C) -> O
    where
        C: CombineFn<T, A, O>,
    {
        let mut acc = comb.create();
        for t in self.items {
            comb.add_input(&mut acc, t);
        }
        comb.finish(acc)
    }

    /// Fold every element into a seed with `f`.
    pub fn fold<A, F>(self, seed: A, f: F) -> A
    where
        F: Fn(A, &T) -> A,
    {
        self.items.iter().fold(seed, f)
    }
}
