use crate::coeffs::CoefficientSet;
use super::{round3, Solution};

/// Solves a single linear equation in one unknown.
///
/// An equation written entirely in `y` is solved as an equation in its only unknown, so `y = 5`
/// behaves exactly like `x = 5`. A zero coefficient means there is no finite unique solution
/// (either no solution or infinitely many, reported identically as degenerate).
///
/// A degree-0 `x` term only balances when both sides already agree, so when the exponent
/// metadata marks the term as degree 0 any computed value other than 1 is degenerate as well.
pub fn solve_simple(eq: &CoefficientSet) -> Solution {
    let coeff = if eq.x_coeff != 0.0 { eq.x_coeff } else { eq.y_coeff };
    if coeff == 0.0 {
        return Solution::Degenerate;
    }

    let x = round3(eq.rhs / coeff);
    if eq.x_exponent == 0 && x != 1.0 {
        return Solution::Degenerate;
    }

    Solution::Simple { x }
}
