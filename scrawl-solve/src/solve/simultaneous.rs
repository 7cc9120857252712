use crate::coeffs::CoefficientSet;
use super::{round3, Solution};

/// Solves a pair of linear equations in `x` and `y` by Cramer's rule.
///
/// For the system `a.x_coeff·x + a.y_coeff·y = a.rhs`, `b.x_coeff·x + b.y_coeff·y = b.rhs`, a
/// zero determinant covers both parallel and identical lines; no-solution and
/// infinitely-many-solutions are reported identically as degenerate, matching the simple solver.
pub fn solve_simultaneous(a: &CoefficientSet, b: &CoefficientSet) -> Solution {
    let det = a.x_coeff * b.y_coeff - b.x_coeff * a.y_coeff;
    if det == 0.0 {
        return Solution::Degenerate;
    }

    let num_x = b.y_coeff * a.rhs - a.y_coeff * b.rhs;
    let num_y = a.x_coeff * b.rhs - b.x_coeff * a.rhs;

    Solution::Simultaneous {
        x: round3(num_x / det),
        y: round3(num_y / det),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    fn eq(x_coeff: f64, y_coeff: f64, rhs: f64) -> CoefficientSet {
        CoefficientSet { x_coeff, y_coeff, rhs, ..Default::default() }
    }

    #[test]
    fn independent_system() {
        // x + y = 10, x - y = 2
        let solution = solve_simultaneous(&eq(1.0, 1.0, 10.0), &eq(1.0, -1.0, 2.0));
        assert_eq!(solution, Solution::Simultaneous { x: 6.0, y: 4.0 });
    }

    #[test]
    fn parallel_lines_are_degenerate() {
        // x + y = 1, x + y = 2
        let solution = solve_simultaneous(&eq(1.0, 1.0, 1.0), &eq(1.0, 1.0, 2.0));
        assert_eq!(solution, Solution::Degenerate);
    }

    #[test]
    fn identical_lines_are_degenerate() {
        // x + y = 1, 2x + 2y = 2
        let solution = solve_simultaneous(&eq(1.0, 1.0, 1.0), &eq(2.0, 2.0, 2.0));
        assert_eq!(solution, Solution::Degenerate);
    }

    #[test]
    fn solutions_satisfy_both_equations() {
        let systems = [
            (eq(2.0, 3.0, 12.0), eq(1.0, -1.0, 1.0)),
            (eq(-1.0, 4.0, 7.0), eq(5.0, 2.0, 3.0)),
            (eq(0.5, 0.25, 2.0), eq(3.0, -2.0, 1.0)),
        ];

        for (a, b) in systems {
            let Solution::Simultaneous { x, y } = solve_simultaneous(&a, &b) else {
                panic!("expected a simultaneous solution");
            };
            // back-substitution holds within the rounding tolerance, scaled by the coefficients
            assert_float_absolute_eq!(a.x_coeff * x + a.y_coeff * y, a.rhs, 5e-3);
            assert_float_absolute_eq!(b.x_coeff * x + b.y_coeff * y, b.rhs, 5e-3);
        }
    }
}
