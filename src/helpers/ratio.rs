//! Ratio aggregates across two keyed collections.
//!
//! A numerator row on the left is divided by a denominator derived from the right rows that
//! share its key: either their sum ([`PCollection::ratio_per_key`]) or their count
//! ([`PCollection::ratio_by_count`]). A key with no right rows has a zero denominator, which
//! the [`TransformConfig`] resolves.
//!
//! When the join key is not the name a result should carry (cohorts join instructors on
//! their module but are reported per cohort), the left rows can carry a label:
//! [`PCollection::labelled_ratio_by_count`].
//!
//! ```
//! use prototypes::*;
//!
//! let cohorts = from_vec(vec![(1u32, 20u32)]);
//! let two = from_vec(vec![(1u32, "Travis"), (1, "Louisa")]);
//! let none = from_vec(Vec::<(u32, &str)>::new());
//! let config = TransformConfig::default();
//!
//! assert_eq!(cohorts.ratio_by_count(&two, &config)?.collect_seq(), vec![(1, 10.0)]);
//! assert!(cohorts.ratio_by_count(&none, &config).is_err());
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::error::TransformResult;
use crate::{PCollection, RFBound, TransformConfig};
use indexmap::IndexMap;
use std::fmt::Display;
use std::hash::Hash;

impl<K, N> PCollection<(K, N)>
where
    K: RFBound + Eq + Hash + Display,
    N: RFBound + Into<f64>,
{
    /// Divide each numerator by the sum of the right-side values with the same key.
    ///
    /// Output keeps left order, one row per left row.
    ///
    /// # Errors
    /// [`TransformError::DivisionByZero`](crate::TransformError::DivisionByZero) when a
    /// denominator is zero under [`ZeroDivisor::Error`](crate::ZeroDivisor::Error).
    pub fn ratio_per_key<D>(
        &self,
        denominators: &PCollection<(K, D)>,
        config: &TransformConfig,
    ) -> TransformResult<PCollection<(K, f64)>>
    where
        D: RFBound + Into<f64>,
    {
        let sums = sum_by_key(denominators);
        self.clone().try_map(|(k, n)| -> TransformResult<(K, f64)> {
            let ratio = divide_by(&sums, k, &k.to_string(), n.clone(), config)?;
            Ok((k.clone(), ratio))
        })
    }

    /// Divide each numerator by the number of right-side rows with the same key.
    ///
    /// # Errors
    /// As for [`ratio_per_key`](Self::ratio_per_key).
    pub fn ratio_by_count<W>(
        &self,
        related: &PCollection<(K, W)>,
        config: &TransformConfig,
    ) -> TransformResult<PCollection<(K, f64)>>
    where
        W: RFBound,
    {
        self.ratio_per_key(&count_rows(related), config)
    }
}

impl<K, L, N> PCollection<(K, (L, N))>
where
    K: RFBound + Eq + Hash,
    L: RFBound + Display,
    N: RFBound + Into<f64>,
{
    /// [`ratio_by_count`](PCollection::ratio_by_count) for rows shaped `(key, (label, numerator))`.
    ///
    /// Rows join on `key`; each result, and any division error, is named by `label`.
    ///
    /// ```
    /// use prototypes::*;
    ///
    /// let cohorts = from_vec(vec![(1u32, ("cohort1806", 27u32))]);
    /// let staff = from_vec(vec![(1u32, "Travis"), (1, "Louisa"), (1, "Christie")]);
    /// let ratios = cohorts.labelled_ratio_by_count(&staff, &TransformConfig::default())?;
    /// assert_eq!(ratios.collect_seq(), vec![("cohort1806", 9.0)]);
    /// # anyhow::Result::<()>::Ok(())
    /// ```
    ///
    /// # Errors
    /// [`TransformError::DivisionByZero`](crate::TransformError::DivisionByZero) keyed by the
    /// label when no right rows share the key, under
    /// [`ZeroDivisor::Error`](crate::ZeroDivisor::Error).
    pub fn labelled_ratio_by_count<W>(
        &self,
        related: &PCollection<(K, W)>,
        config: &TransformConfig,
    ) -> TransformResult<PCollection<(L, f64)>>
    where
        W: RFBound,
    {
        let counts = sum_by_key(&count_rows(related));
        self.clone()
            .try_map(|(k, (label, n))| -> TransformResult<(L, f64)> {
                let ratio = divide_by(&counts, k, &label.to_string(), n.clone(), config)?;
                Ok((label.clone(), ratio))
            })
    }
}

fn count_rows<K: RFBound, W: RFBound>(related: &PCollection<(K, W)>) -> PCollection<(K, u32)> {
    related.clone().map(|(k, _)| (k.clone(), 1u32))
}

fn sum_by_key<K, D>(denominators: &PCollection<(K, D)>) -> IndexMap<K, f64>
where
    K: RFBound + Eq + Hash,
    D: RFBound + Into<f64>,
{
    let mut sums: IndexMap<K, f64> = IndexMap::new();
    for (k, d) in denominators.iter() {
        *sums.entry(k.clone()).or_insert(0.0) += d.clone().into();
    }
    sums
}

fn divide_by<K: Eq + Hash>(
    denominators: &IndexMap<K, f64>,
    key: &K,
    label: &str,
    numerator: impl Into<f64>,
    config: &TransformConfig,
) -> TransformResult<f64> {
    let denominator = denominators.get(key).copied().unwrap_or(0.0);
    config.divide(label, numerator.into(), denominator)
}
