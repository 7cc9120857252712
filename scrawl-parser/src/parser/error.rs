//! Error kinds produced while splitting and parsing equation text.

use ariadne::{Fmt, Report};
use scrawl_error::{build_report, ErrorKind, EXPR};
use std::ops::Range;

/// A line of input did not contain exactly one `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedEquation {
    /// The number of `=` signs that were found.
    pub eq_count: usize,
}

impl ErrorKind for MalformedEquation {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "malformed equation".to_string(),
            vec![if self.eq_count == 0 {
                "there is no `=` in this equation".to_string()
            } else {
                format!("there are {} `=` signs in this equation", self.eq_count)
            }],
            Some(format!("an equation must contain exactly one {}", "=".fg(EXPR))),
        )
    }
}

/// The input contained more equations than the pipeline supports, or a different number than the
/// caller said it would.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedEquationCount {
    /// The number of equations that were found.
    pub found: usize,

    /// The number of equations that were expected.
    pub expected: usize,
}

impl ErrorKind for UnsupportedEquationCount {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "unsupported number of equations".to_string(),
            vec![format!("found {} equations, expected {}", self.found, self.expected)],
            Some(format!(
                "write one equation per line; at most {} simultaneous equations are supported",
                "two".fg(EXPR),
            )),
        )
    }
}

/// A token could not be classified as a number, a known variable, or an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct UnparsableExpression {
    /// The lexeme that could not be classified. Empty if the expression ended where a term was
    /// expected.
    pub found: String,
}

impl ErrorKind for UnparsableExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "unparsable expression".to_string(),
            vec![if self.found.is_empty() {
                format!("you might need to add another {} here", "term".fg(EXPR))
            } else {
                format!("I could not understand `{}` here", self.found)
            }],
            Some(format!(
                "a term is a number, or a number times one of {}, {}, or {}",
                "x".fg(EXPR),
                "y".fg(EXPR),
                "x2".fg(EXPR),
            )),
        )
    }
}
