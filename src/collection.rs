use std::slice::Iter;

/// Bound shared by every element that flows through a [`PCollection`].
///
/// Transforms clone elements out of borrowed records (`key_by`, joins), so `Clone` is the
/// only requirement.
pub trait RFBound: Clone {}
impl<T> RFBound for T where T: Clone {}

/// An ordered, in-memory collection of records.
///
/// Every transform consumes the collection and returns a new one; the source records are
/// never touched. Element order is the insertion order unless a transform explicitly
/// re-sorts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PCollection<T> {
    pub(crate) items: Vec<T>,
}

/// Wrap an owned vector as a [`PCollection`].
pub fn from_vec<T: RFBound>(data: Vec<T>) -> PCollection<T> {
    PCollection { items: data }
}

/// Build a [`PCollection`] from any iterator.
pub fn from_iter<T, I>(iter: I) -> PCollection<T>
where
    T: RFBound,
    I: IntoIterator<Item = T>,
{
    from_vec(iter.into_iter().collect())
}

/// Clone a borrowed dataset into a [`PCollection`].
pub fn from_slice<T: RFBound>(data: &[T]) -> PCollection<T> {
    from_vec(data.to_vec())
}

impl<T: RFBound> PCollection<T> {
    /// Transform each element.
    pub fn map<O, F>(self, f: F) -> PCollection<O>
    where
        O: RFBound,
        F: Fn(&T) -> O,
    {
        PCollection {
            items: self.items.iter().map(f).collect(),
        }
    }

    /// Keep the elements matching `pred`, in their original relative order.
    pub fn filter<F>(self, pred: F) -> PCollection<T>
    where
        F: Fn(&T) -> bool,
    {
        PCollection {
            items: self.items.into_iter().filter(|t| pred(t)).collect(),
        }
    }

    /// Transform each element into zero or more outputs, concatenated in order.
    pub fn flat_map<O, I, F>(self, f: F) -> PCollection<O>
    where
        O: RFBound,
        I: IntoIterator<Item = O>,
        F: Fn(&T) -> I,
    {
        let mut out: Vec<O> = Vec::new();
        for t in &self.items {
            out.extend(f(t));
        }
        PCollection { items: out }
    }

    /// Transform each element with a fallible function, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<O, E, F>(self, f: F) -> Result<PCollection<O>, E>
    where
        O: RFBound,
        F: Fn(&T) -> Result<O, E>,
    {
        let items = self.items.iter().map(f).collect::<Result<Vec<O>, E>>()?;
        Ok(PCollection { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Materialize the collection.
    pub fn collect_seq(self) -> Vec<T> {
        self.items
    }

    /// Return the first element, if any.
    pub fn first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

impl<T> IntoIterator for PCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// An aggregation: build an accumulator, feed values into it, then finish it into an output.
///
/// Used by [`PCollection::combine_values`] (per key) and
/// [`PCollection::combine_globally`] (whole collection).
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}

/// Number of values seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }
    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }
    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}
