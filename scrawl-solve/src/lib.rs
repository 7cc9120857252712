//! Classification and numeric solving for OCR'd handwritten equations.
//!
//! The parsed term maps produced by [`scrawl_parser`] are assembled into canonical
//! [`CoefficientSet`](coeffs::CoefficientSet)s (`a·x + b·y + c·x2 = rhs`), classified into one of
//! three [`Shape`](shape::Shape)s, and handed to the matching solver:
//!
//! - **Simple** — one linear equation in one unknown.
//! - **Simultaneous** — a pair of linear equations in `x` and `y`, solved by Cramer's rule.
//! - **Quadratic** — one equation with an `x2` term, solved by the quadratic formula.
//!
//! A solve always terminates in a [`Solution`](solve::Solution); an equation with no unique
//! finite solution produces [`Solution::Degenerate`](solve::Solution::Degenerate), which is a
//! valid result value rather than an error.
//!
//! [`analyze`] runs the entire pipeline, raw text in, solution out.

pub mod analysis;
pub mod coeffs;
pub mod error;
pub mod shape;
pub mod solve;

pub use analysis::{analyze, Analysis, AnalysisError};
