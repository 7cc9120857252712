//! Numeric solvers, one per [`Shape`](crate::shape::Shape).
//!
//! Each solver is terminal: it runs once per classified input and produces a [`Solution`].
//! Every numeric output is rounded to exactly 3 decimal places, half away from zero
//! ([`f64::round`] semantics), uniformly across all three solvers.

mod quadratic;
mod simple;
mod simultaneous;

pub use quadratic::solve_quadratic;
pub use simple::solve_simple;
pub use simultaneous::solve_simultaneous;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how the square root of a quadratic discriminant is taken.
///
/// The original behavior truncates the root to an integer before computing the roots, which
/// measurably changes them whenever the discriminant is not a perfect square. That policy is
/// preserved here as the default rather than silently fixed; callers that want full-precision
/// roots opt in to [`Exact`](DiscriminantPolicy::Exact).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiscriminantPolicy {
    /// Truncate the square root of the discriminant to an integer before use.
    #[default]
    Truncate,

    /// Use the full-precision square root.
    Exact,
}

/// Options applied while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveOptions {
    /// How the square root of a quadratic discriminant is taken.
    pub discriminant: DiscriminantPolicy,
}

/// The outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Solution {
    /// The value of the single unknown of a simple equation.
    Simple { x: f64 },

    /// The values of both unknowns of a simultaneous pair.
    Simultaneous { x: f64, y: f64 },

    /// Both roots of a quadratic equation.
    Quadratic { x1: f64, x2: f64 },

    /// The equation has no unique finite solution: zero solutions, infinitely many, or no real
    /// roots. These cases are deliberately not distinguished. This is a valid result value, not
    /// an error.
    Degenerate,
}

/// Rounds a value to 3 decimal places, half away from zero.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round3(0.0005), 0.001);
        assert_eq!(round3(-0.0005), -0.001);
        assert_eq!(round3(1.23449), 1.234);
        assert_eq!(round3(2.0), 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn degenerate_serializes_as_a_value() {
        let json = serde_json::to_string(&Solution::Degenerate).unwrap();
        assert_eq!(json, r#"{"kind":"degenerate"}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn solutions_are_tagged() {
        let json = serde_json::to_string(&Solution::Simultaneous { x: 6.0, y: 4.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"simultaneous","x":6.0,"y":4.0}"#);
    }
}
