//! Statistical combiners: `Average`

use crate::RFBound;
use crate::collection::CombineFn;

/* ===================== Average ===================== */

/// Arithmetic mean of values as `f64`.
///
/// Values must be convertible into `f64` via `Into<f64>`.
///
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `Option<f64>`
///
/// Empty inputs produce `None`: a mean over nothing has no value, and callers decide what
/// that means through [`TransformConfig::resolve_mean`](crate::TransformConfig::resolve_mean).
#[derive(Clone, Copy, Debug, Default)]
pub struct Average;

impl<V> CombineFn<V, (f64, u64), Option<f64>> for Average
where
    V: RFBound + Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> Option<f64> {
        if acc.1 == 0 {
            None
        } else {
            Some(acc.0 / (acc.1 as f64))
        }
    }
}
