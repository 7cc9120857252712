//! The canonical numeric record of one equation.

use crate::error::AmbiguousShape;
use scrawl_error::Error;
use scrawl_parser::parser::{TermKey, TermMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One equation in the canonical form `a·x + b·y + c·x2 = rhs`.
///
/// Built by [`assemble`](CoefficientSet::assemble), which moves every right-hand term to the left
/// and negates the leftover constant. All construction goes through `assemble` so that an
/// equation carrying both a `y` and an `x2` coefficient is rejected before any solver sees it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientSet {
    /// The coefficient of `x`.
    pub x_coeff: f64,

    /// The coefficient of `y`. Zero for single-variable equations.
    pub y_coeff: f64,

    /// The coefficient of the quadratic term `x2`.
    pub x2_coeff: f64,

    /// The constant, moved to the right side.
    pub rhs: f64,

    /// Exponent metadata for the `x` term. The parser always produces degree 1; the field is
    /// kept for the degree-0 policy in the simple solver.
    pub x_exponent: i32,

    /// The original line, retained for diagnostics.
    pub source_text: String,
}

impl Default for CoefficientSet {
    fn default() -> Self {
        Self {
            x_coeff: 0.0,
            y_coeff: 0.0,
            x2_coeff: 0.0,
            rhs: 0.0,
            x_exponent: 1,
            source_text: String::new(),
        }
    }
}

impl CoefficientSet {
    /// Assembles the canonical form from the term maps of both sides of an equation.
    ///
    /// For each key, the combined coefficient is `lhs - rhs`; the combined constant is then
    /// negated to become the `rhs` field, mirroring `a·x + b·y + c·x2 + k = 0` rewritten as
    /// `a·x + b·y + c·x2 = -k`.
    pub fn assemble(lhs: TermMap, rhs: TermMap, source_text: &str) -> Result<Self, Error> {
        let set = Self {
            x_coeff: lhs.get(TermKey::X) - rhs.get(TermKey::X),
            y_coeff: lhs.get(TermKey::Y) - rhs.get(TermKey::Y),
            x2_coeff: lhs.get(TermKey::X2) - rhs.get(TermKey::X2),
            rhs: -(lhs.get(TermKey::Const) - rhs.get(TermKey::Const)),
            x_exponent: 1,
            source_text: source_text.to_string(),
        };

        if set.y_coeff != 0.0 && set.x2_coeff != 0.0 {
            return Err(Error::new(vec![0..source_text.len()], AmbiguousShape));
        }

        Ok(set)
    }
}

/// The equations recovered from one submission: a single equation or a simultaneous pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Equations {
    Single(CoefficientSet),
    Pair(CoefficientSet, CoefficientSet),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn terms(constant: f64, x: f64, y: f64, x2: f64) -> TermMap {
        TermMap { constant, x, y, x2 }
    }

    #[test]
    fn moves_right_terms_left() {
        // 3x + 4 = 10
        let set = CoefficientSet::assemble(terms(4.0, 3.0, 0.0, 0.0), terms(10.0, 0.0, 0.0, 0.0), "3x+4=10").unwrap();
        assert_eq!(set.x_coeff, 3.0);
        assert_eq!(set.rhs, 6.0);
    }

    #[test]
    fn variables_on_both_sides() {
        // 5x - 2 = 2x + 7
        let set = CoefficientSet::assemble(terms(-2.0, 5.0, 0.0, 0.0), terms(7.0, 2.0, 0.0, 0.0), "").unwrap();
        assert_eq!(set.x_coeff, 3.0);
        assert_eq!(set.rhs, 9.0);
    }

    #[test]
    fn quadratic_constant_crosses_sides() {
        // x2 + 3x + 2 = 0
        let set = CoefficientSet::assemble(terms(2.0, 3.0, 0.0, 1.0), terms(0.0, 0.0, 0.0, 0.0), "").unwrap();
        assert_eq!(set.x2_coeff, 1.0);
        assert_eq!(set.x_coeff, 3.0);
        assert_eq!(set.rhs, -2.0);
    }

    #[test]
    fn y_and_x2_together_are_rejected() {
        let err = CoefficientSet::assemble(terms(0.0, 0.0, 1.0, 1.0), TermMap::default(), "x2+y=0");
        assert!(err.is_err());
    }

    #[test]
    fn coefficients_cancelling_to_zero_are_fine() {
        // x2 + y = x2 leaves only y
        let set = CoefficientSet::assemble(terms(0.0, 0.0, 1.0, 1.0), terms(0.0, 0.0, 0.0, 1.0), "").unwrap();
        assert_eq!(set.x2_coeff, 0.0);
        assert_eq!(set.y_coeff, 1.0);
    }
}
