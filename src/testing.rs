//! Testing utilities for transformation code.
//!
//! - **Assertions**: compare outputs with expected results, position by position
//! - **Fixtures**: small hand-built record sets for the edge cases the bundled data does
//!   not cover
//! - **[`assert_approx_eq!`](crate::assert_approx_eq)**: float comparison with a tolerance
//!
//! # Quick Start
//!
//! ```
//! use prototypes::prompts::clubs::members_belonging_to_clubs;
//! use prototypes::testing::*;
//!
//! let by_member = members_belonging_to_clubs(&two_clubs_sharing_a_member());
//! let pam = &by_member["Pam"];
//! assert_collections_equal(pam, &["Art".to_string(), "Chess".to_string()]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;

/// Default tolerance of [`assert_approx_eq!`](crate::assert_approx_eq).
pub const APPROX_EPSILON: f64 = 1e-9;

/// Assert that two `f64` values differ by at most an epsilon.
///
/// ```
/// use prototypes::assert_approx_eq;
///
/// assert_approx_eq!(27.0 / 2.0, 13.5);
/// assert_approx_eq!(0.1 + 0.2, 0.3, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr) => {
        $crate::assert_approx_eq!($actual, $expected, $crate::testing::APPROX_EPSILON)
    };
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let (actual, expected): (f64, f64) = ($actual, $expected);
        assert!(
            (actual - expected).abs() <= $epsilon,
            "Values differ by more than {}:\n  Expected: {expected}\n  Actual: {actual}",
            $epsilon
        );
    }};
}
