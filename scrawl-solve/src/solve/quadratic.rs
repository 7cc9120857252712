use crate::coeffs::CoefficientSet;
use crate::error::DivisionByZero;
use scrawl_error::Error;
use super::{round3, DiscriminantPolicy, Solution, SolveOptions};

/// Solves a single quadratic equation by the quadratic formula.
///
/// The canonical form `x2_coeff·x² + x_coeff·x = rhs` is rewritten with the constant back on the
/// left (`c = -rhs`) before computing the discriminant `x_coeff² - 4·x2_coeff·c`. A negative
/// discriminant means no real roots, reported as degenerate.
///
/// How the square root of the discriminant is taken is governed by
/// [`SolveOptions::discriminant`]; see [`DiscriminantPolicy`].
///
/// Fails with [`DivisionByZero`] if the quadratic coefficient is zero, which indicates a
/// misclassified equation and should not occur after classification.
pub fn solve_quadratic(eq: &CoefficientSet, opts: SolveOptions) -> Result<Solution, Error> {
    if eq.x2_coeff == 0.0 {
        return Err(Error::new(vec![0..eq.source_text.len()], DivisionByZero));
    }

    let constant = -eq.rhs;
    let discriminant = eq.x_coeff * eq.x_coeff - 4.0 * eq.x2_coeff * constant;
    if discriminant < 0.0 {
        return Ok(Solution::Degenerate);
    }

    let root = match opts.discriminant {
        DiscriminantPolicy::Truncate => discriminant.sqrt().floor(),
        DiscriminantPolicy::Exact => discriminant.sqrt(),
    };

    Ok(Solution::Quadratic {
        x1: round3((-eq.x_coeff + root) / (2.0 * eq.x2_coeff)),
        x2: round3((-eq.x_coeff - root) / (2.0 * eq.x2_coeff)),
    })
}
