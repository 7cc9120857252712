//! Error kinds produced while assembling, classifying, and solving equations.

use ariadne::{Fmt, Report};
use scrawl_error::{build_report, ErrorKind, EXPR};
use std::ops::Range;

/// The structural cues of an equation conflict, so no single shape fits it.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbiguousShape;

impl ErrorKind for AmbiguousShape {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "ambiguous equation shape".to_string(),
            vec!["this equation mixes shape signals".to_string()],
            Some(format!(
                "a {} term cannot appear in a simultaneous pair, or in the same equation as {}",
                "x2".fg(EXPR),
                "y".fg(EXPR),
            )),
        )
    }
}

/// A solve step would divide by zero outside the documented degenerate policy. This indicates a
/// misclassified equation and should not occur after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "division by zero while solving".to_string(),
            vec!["the quadratic coefficient of this equation is zero".to_string()],
            Some(format!(
                "an equation without an {} term is linear; this is likely a classification bug",
                "x2".fg(EXPR),
            )),
        )
    }
}
