//! Error types.
//!
//! [`TransformError`] covers the conditions a transformation can hit on well-formed
//! records: a strict join with no match, a ratio whose denominator is zero, and an age that
//! cannot be a number of years. [`DatasetError`] covers everything that can go wrong while
//! turning fixture JSON into typed records.

use crate::validation::{ValidationError, format_errors};
use thiserror::Error;

/// Result type for transformations that can fail.
pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A join running under [`MissingMatch::Fail`](crate::MissingMatch::Fail) found no
    /// inner record for an outer key.
    #[error("no `{relation}` match for key `{key}`")]
    NoMatch { relation: &'static str, key: String },

    /// A ratio or mean had nothing to divide by under
    /// [`ZeroDivisor::Error`](crate::ZeroDivisor::Error).
    #[error("division by zero while computing `{key}`")]
    DivisionByZero { key: String },

    /// An age came out negative or not a number: an actor born after a release, or a
    /// sentinel that is not a whole number of years.
    #[error("invalid age for `{key}`")]
    InvalidAge { key: String },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset `{dataset}` is not valid JSON: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset `{dataset}` must be a JSON {expected}")]
    Shape {
        dataset: &'static str,
        expected: &'static str,
    },

    #[error("record {record} of `{dataset}` is missing field `{field}`")]
    MissingField {
        dataset: &'static str,
        record: String,
        field: &'static str,
    },

    #[error("record {record} of `{dataset}` is malformed: {source}")]
    Malformed {
        dataset: &'static str,
        record: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {record} of `{dataset}` failed validation: {}", format_errors(.errors))]
    Invalid {
        dataset: &'static str,
        record: String,
        errors: Vec<ValidationError>,
    },
}
