//! Policies for the two decisions a transformation cannot infer from its data: what to do
//! when a join finds nothing, and what a ratio with a zero denominator is worth.
//!
//! ```
//! use prototypes::*;
//!
//! let strict = TransformConfig::default();
//! assert!(strict.divide("cohort1806", 27.0, 0.0).is_err());
//!
//! let lenient = TransformConfig::from_json_str(
//!     r#"{ "missing_match": "skip", "zero_divisor": { "sentinel": { "value": 0.0 } } }"#,
//! )?;
//! assert_eq!(lenient.divide("cohort1806", 27.0, 0.0)?, 0.0);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::error::{TransformError, TransformResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What a join does with an outer record that has no inner match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMatch {
    /// Produce nothing for the outer record and keep going.
    #[default]
    Skip,
    /// Stop with [`TransformError::NoMatch`].
    Fail,
}

/// What dividing by zero yields in ratio and mean aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisor {
    /// Stop with [`TransformError::DivisionByZero`].
    #[default]
    Error,
    /// Substitute a fixed value.
    Sentinel { value: f64 },
}

/// Transformation policies. The default skips unmatched join rows and rejects zero
/// denominators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub missing_match: MissingMatch,
    pub zero_divisor: ZeroDivisor,
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_match(mut self, missing_match: MissingMatch) -> Self {
        self.missing_match = missing_match;
        self
    }

    #[must_use]
    pub fn with_zero_divisor(mut self, zero_divisor: ZeroDivisor) -> Self {
        self.zero_divisor = zero_divisor;
        self
    }

    /// Parse a config from JSON. Absent fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid transform config")
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading transform config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// `numerator / denominator`, with a zero denominator resolved by the policy.
    ///
    /// # Errors
    /// [`TransformError::DivisionByZero`] when `denominator == 0` under
    /// [`ZeroDivisor::Error`].
    pub fn divide(&self, key: &str, numerator: f64, denominator: f64) -> TransformResult<f64> {
        if denominator == 0.0 {
            self.zero_denominator(key)
        } else {
            Ok(numerator / denominator)
        }
    }

    /// Resolve the output of [`Average`](crate::Average): `None` means nothing was averaged.
    ///
    /// # Errors
    /// [`TransformError::DivisionByZero`] for `None` under [`ZeroDivisor::Error`].
    pub fn resolve_mean(&self, key: &str, mean: Option<f64>) -> TransformResult<f64> {
        match mean {
            Some(m) => Ok(m),
            None => self.zero_denominator(key),
        }
    }

    /// Apply the missing-match policy to an outer key with no inner record.
    ///
    /// # Errors
    /// [`TransformError::NoMatch`] under [`MissingMatch::Fail`].
    pub fn on_missing<K: Display>(&self, relation: &'static str, key: &K) -> TransformResult<()> {
        match self.missing_match {
            MissingMatch::Skip => {
                debug!(relation, key = %key, "skipping record without a match");
                Ok(())
            }
            MissingMatch::Fail => Err(TransformError::NoMatch {
                relation,
                key: key.to_string(),
            }),
        }
    }

    fn zero_denominator(&self, key: &str) -> TransformResult<f64> {
        match self.zero_divisor {
            ZeroDivisor::Error => Err(TransformError::DivisionByZero {
                key: key.to_string(),
            }),
            ZeroDivisor::Sentinel { value } => {
                debug!(key, value, "zero denominator replaced by sentinel");
                Ok(value)
            }
        }
    }
}
