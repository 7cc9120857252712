//! Structural classification of an equation or equation pair.

use crate::coeffs::Equations;
use crate::error::AmbiguousShape;
use scrawl_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shape of a submission, decided once per input and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// A single linear equation in one unknown.
    Simple,

    /// A pair of linear equations in `x` and `y`.
    Simultaneous,

    /// A single equation with a quadratic term.
    Quadratic,
}

/// Decides the shape of the assembled equations.
///
/// A single equation is [`Quadratic`](Shape::Quadratic) when its `x2` coefficient is nonzero and
/// [`Simple`](Shape::Simple) otherwise. A two-equation split is always
/// [`Simultaneous`](Shape::Simultaneous); quadratics are not supported in simultaneous form, so a
/// quadratic term in either member fails with [`AmbiguousShape`].
pub fn classify(equations: &Equations) -> Result<Shape, Error> {
    match equations {
        Equations::Single(eq) => {
            if eq.x2_coeff != 0.0 {
                Ok(Shape::Quadratic)
            } else {
                Ok(Shape::Simple)
            }
        },
        Equations::Pair(a, b) => {
            if let Some(bad) = [a, b].into_iter().find(|eq| eq.x2_coeff != 0.0) {
                Err(Error::new(vec![0..bad.source_text.len()], AmbiguousShape))
            } else {
                Ok(Shape::Simultaneous)
            }
        },
    }
}
