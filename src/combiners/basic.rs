//! Basic arithmetic and collecting combiners: Sum, ToList

use crate::RFBound;
use crate::collection::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Sum<T> ===================== */

/// Sum of values.
///
/// - Accumulator: `T`
/// - Output: `T`
///
/// Requires `T: Add<Output=T> + Default`; an empty input sums to `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);
impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: RFBound + Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== ToList<T> ===================== */

/// Collect values into a `Vec<T>` in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToList<T>(pub PhantomData<T>);
impl<T> ToList<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: RFBound> CombineFn<T, Vec<T>, Vec<T>> for ToList<T> {
    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}
