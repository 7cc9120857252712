//! Separates raw OCR output into one or two equations, each split around its `=`.

use crate::normalize::normalize;
use crate::parser::error::{MalformedEquation, UnsupportedEquationCount};
use scrawl_error::Error;

/// The most equations a single submission may contain.
pub const MAX_EQUATIONS: usize = 2;

/// A caller-supplied hint for how many equations the input contains. Absent a hint, the newline
/// count in the text is the sole splitting signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationCount {
    One,
    Two,
}

impl EquationCount {
    /// Returns the hinted count as a number.
    pub fn count(self) -> usize {
        match self {
            EquationCount::One => 1,
            EquationCount::Two => 2,
        }
    }
}

/// One equation, normalized and split around its `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSides {
    /// The normalized text left of the `=`.
    pub lhs: String,

    /// The normalized text right of the `=`.
    pub rhs: String,

    /// The original line, retained for diagnostics.
    pub source_text: String,
}

/// Splits raw OCR output into its equations.
///
/// No line break means a single equation; otherwise each non-empty line is one equation of a
/// simultaneous pair. Each line is normalized and then split on its single `=`.
///
/// Fails with [`UnsupportedEquationCount`] if more than [`MAX_EQUATIONS`] non-empty lines are
/// found, or if a hint disagrees with the number of lines, and with [`MalformedEquation`] if a
/// line does not contain exactly one `=`.
pub fn split(raw: &str, hint: Option<EquationCount>) -> Result<Vec<EquationSides>, Error> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for line in raw.split('\n') {
        if !line.trim().is_empty() {
            lines.push((offset, line));
        }
        offset += line.len() + 1;
    }

    if lines.len() > MAX_EQUATIONS {
        let (start, line) = lines[MAX_EQUATIONS];
        return Err(Error::new(
            vec![start..start + line.len()],
            UnsupportedEquationCount { found: lines.len(), expected: MAX_EQUATIONS },
        ));
    }

    if lines.is_empty() {
        return Err(Error::new(vec![0..raw.len()], MalformedEquation { eq_count: 0 }));
    }

    if let Some(hint) = hint {
        if hint.count() != lines.len() {
            return Err(Error::new(
                vec![0..raw.len()],
                UnsupportedEquationCount { found: lines.len(), expected: hint.count() },
            ));
        }
    }

    lines
        .into_iter()
        .map(|(start, line)| {
            let normalized = normalize(line);
            let mut sides = normalized.split('=');
            match (sides.next(), sides.next(), sides.next()) {
                (Some(lhs), Some(rhs), None) => Ok(EquationSides {
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                    source_text: line.to_string(),
                }),
                _ => Err(Error::new(
                    vec![start..start + line.len()],
                    MalformedEquation { eq_count: normalized.matches('=').count() },
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn single_equation() {
        let sides = split("3x+4=10", None).unwrap();
        assert_eq!(sides, vec![EquationSides {
            lhs: "3*x+4".to_string(),
            rhs: "10".to_string(),
            source_text: "3x+4=10".to_string(),
        }]);
    }

    #[test]
    fn simultaneous_pair() {
        let sides = split("x+y=10\nx-y=2", None).unwrap();
        assert_eq!(sides.len(), 2);
        assert_eq!(sides[0].lhs, "1*x+1*y");
        assert_eq!(sides[1].lhs, "1*x-1*y");
        assert_eq!(sides[1].source_text, "x-y=2");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let sides = split("x+y=10\n\nx-y=2\n", None).unwrap();
        assert_eq!(sides.len(), 2);
    }

    #[test]
    fn three_equations_are_rejected() {
        assert!(split("x=1\ny=2\nx+y=3", None).is_err());
    }

    #[test]
    fn hint_mismatch_is_rejected() {
        assert!(split("3x+4=10", Some(EquationCount::Two)).is_err());
        assert!(split("x+y=10\nx-y=2", Some(EquationCount::One)).is_err());
    }

    #[test]
    fn matching_hint_is_accepted() {
        assert!(split("x+y=10\nx-y=2", Some(EquationCount::Two)).is_ok());
    }

    #[test]
    fn missing_equals_is_rejected() {
        assert!(split("3x+4", None).is_err());
    }

    #[test]
    fn double_equals_is_rejected() {
        assert!(split("3x=4=10", None).is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(split("", None).is_err());
        assert!(split("  \n ", None).is_err());
    }
}
