//! The end-to-end pipeline: raw OCR text in, classified equations and a solution out.

use crate::coeffs::{CoefficientSet, Equations};
use crate::shape::{classify, Shape};
use crate::solve::{solve_quadratic, solve_simple, solve_simultaneous, Solution, SolveOptions};
use scrawl_error::Error;
use scrawl_parser::parser::parse_side;
use scrawl_parser::split::{split, EquationCount};
use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of running the full pipeline on one piece of OCR output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// The shape of the submission.
    pub shape: Shape,

    /// The assembled equation(s).
    pub equations: Equations,

    /// The computed solution. [`Solution::Degenerate`] is a valid outcome here, not a failure.
    pub solution: Solution,

    /// The raw input, echoed back for the caller.
    pub echoed_text: String,
}

/// A pipeline failure: the error kind plus the text its spans point into.
///
/// The stages of the pipeline work on different strings (the raw input while splitting, a
/// normalized side while parsing), so the offending text travels with the error instead of being
/// re-derived by the caller.
#[derive(Debug)]
pub struct AnalysisError {
    /// The text the error's spans point into.
    pub text: String,

    /// The underlying error.
    pub error: Error,
}

impl AnalysisError {
    /// Creates a new analysis error for the given text.
    fn new(text: &str, error: Error) -> Self {
        Self { text: text.to_string(), error }
    }

    /// Build a report from this error and print it to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> io::Result<()> {
        self.error.report_to_stderr(src_id, &self.text)
    }
}

/// Runs the full pipeline on one piece of raw OCR output.
///
/// The text is split into one or two equations (guided by `hint` if the caller knows the count),
/// each equation is normalized, parsed, and assembled into a [`CoefficientSet`], the shape of
/// the whole submission is classified, and the matching solver runs. Every stage is pure; two
/// calls with the same input produce the same [`Analysis`].
pub fn analyze(
    raw: &str,
    hint: Option<EquationCount>,
    opts: SolveOptions,
) -> Result<Analysis, AnalysisError> {
    let sides = split(raw, hint).map_err(|err| AnalysisError::new(raw, err))?;

    let mut sets = Vec::with_capacity(sides.len());
    for eq in &sides {
        let lhs = parse_side(&eq.lhs).map_err(|err| AnalysisError::new(&eq.lhs, err))?;
        let rhs = parse_side(&eq.rhs).map_err(|err| AnalysisError::new(&eq.rhs, err))?;
        let set = CoefficientSet::assemble(lhs, rhs, &eq.source_text)
            .map_err(|err| AnalysisError::new(&eq.source_text, err))?;
        sets.push(set);
    }

    let mut sets = sets.into_iter();
    let equations = match (sets.next(), sets.next()) {
        (Some(a), Some(b)) => Equations::Pair(a, b),
        (Some(eq), None) => Equations::Single(eq),
        _ => unreachable!("split always yields one or two equations"),
    };

    let shape = classify(&equations).map_err(|err| AnalysisError::new(raw, err))?;

    let solution = match (shape, &equations) {
        (Shape::Simple, Equations::Single(eq)) => solve_simple(eq),
        (Shape::Simultaneous, Equations::Pair(a, b)) => solve_simultaneous(a, b),
        (Shape::Quadratic, Equations::Single(eq)) => {
            solve_quadratic(eq, opts).map_err(|err| AnalysisError::new(&eq.source_text, err))?
        },
        _ => unreachable!("classify pairs each shape with its equation count"),
    };

    Ok(Analysis {
        shape,
        equations,
        solution,
        echoed_text: raw.to_string(),
    })
}
