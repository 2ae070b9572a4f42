//! Record-level validation applied when datasets are loaded.
//!
//! Every record type implements [`Validate`]; the dataset loader runs it right after
//! deserialization and turns a failure into
//! [`DatasetError::Invalid`](crate::DatasetError::Invalid), so a transformation never sees a
//! record with an empty name or a nonsensical count.
//!
//! # Example
//!
//! ```
//! use prototypes::validation::*;
//!
//! struct Room {
//!     letter: String,
//!     capacity: u32,
//! }
//!
//! impl Validate for Room {
//!     fn validate(&self) -> ValidationResult {
//!         combine_validations(vec![
//!             validators::not_empty("roomLetter", &self.letter),
//!             validators::in_range("capacity", self.capacity, 1, 500),
//!         ])
//!     }
//! }
//!
//! let bad = Room { letter: String::new(), capacity: 0 };
//! assert_eq!(bad.validate().unwrap_err().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for validation operations.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Trait for types that can be validated.
pub trait Validate {
    /// Validate this instance and return a list of errors if invalid.
    fn validate(&self) -> ValidationResult;
}

/// A single validation error with context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field that failed validation (optional)
    pub field: Option<String>,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with just a message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Create a validation error for a specific field.
    pub fn field<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "[{}] {}", field, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validation helper for common patterns.
pub mod validators {
    use super::{ValidationError, ValidationResult};
    use std::fmt;

    /// Validate that a string is not empty.
    pub fn not_empty(field: &str, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            Err(vec![ValidationError::field(field, "must not be empty")])
        } else {
            Ok(())
        }
    }

    /// Validate that every string in a list is non-empty.
    pub fn all_not_empty(field: &str, values: &[String]) -> ValidationResult {
        if values.iter().any(|v| v.trim().is_empty()) {
            Err(vec![ValidationError::field(
                field,
                "must not contain empty entries",
            )])
        } else {
            Ok(())
        }
    }

    /// Validate that a numeric value is within a range.
    pub fn in_range<T: PartialOrd + fmt::Display>(
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> ValidationResult {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(vec![ValidationError::field(
                field,
                format!("must be between {} and {}", min, max),
            )])
        }
    }

    /// Validate that a float is finite (not NaN or infinite).
    pub fn finite(field: &str, value: f64) -> ValidationResult {
        if value.is_finite() {
            Ok(())
        } else {
            Err(vec![ValidationError::field(field, "must be a finite number")])
        }
    }
}

/// Combine multiple validation results.
pub fn combine_validations(results: Vec<ValidationResult>) -> ValidationResult {
    let mut all_errors = Vec::new();
    for result in results {
        if let Err(mut errors) = result {
            all_errors.append(&mut errors);
        }
    }
    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors)
    }
}
