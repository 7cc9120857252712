pub mod error;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::UnparsableExpression;
use scrawl_error::Error;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The key of one term in a parsed expression.
///
/// `X2` is the quadratic term. It is an independent symbol with its own coefficient, not `x`
/// raised to a power; the grammar has no exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TermKey {
    Const,
    X,
    Y,
    X2,
}

/// A flat map from term key to signed coefficient, accumulated while parsing one side of an
/// equation. Repeated terms of the same key add; absent keys are 0.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TermMap {
    pub constant: f64,
    pub x: f64,
    pub y: f64,
    pub x2: f64,
}

impl TermMap {
    /// Adds `coeff` to the entry for `key`.
    pub fn add(&mut self, key: TermKey, coeff: f64) {
        match key {
            TermKey::Const => self.constant += coeff,
            TermKey::X => self.x += coeff,
            TermKey::Y => self.y += coeff,
            TermKey::X2 => self.x2 += coeff,
        }
    }

    /// Returns the accumulated coefficient for `key`.
    pub fn get(&self, key: TermKey) -> f64 {
        match key {
            TermKey::Const => self.constant,
            TermKey::X => self.x,
            TermKey::Y => self.y,
            TermKey::X2 => self.x2,
        }
    }
}

/// Parses one side of an equation into its term map.
pub fn parse_side(side: &str) -> Result<TermMap, Error> {
    Parser::new(side).parse_terms()
}

/// A parser for one side of a normalized equation.
///
/// The grammar is deliberately restricted: a side is a sum of terms joined by `+` and `-`, and a
/// term is an optional sign sequence followed by factors joined by `*`, where each factor is a
/// numeric literal or one of the symbols `x`, `y`, `x2`. At most one symbol may appear per term.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped. Returns [`None`] if there are no more tokens.
    fn next_token(&mut self) -> Option<Token<'source>> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Some(token.clone());
            }
        }

        None
    }

    /// Creates an error that points at the given token.
    fn error_at(token: &Token) -> Error {
        Error::new(
            vec![token.span.clone()],
            UnparsableExpression { found: token.lexeme.to_string() },
        )
    }

    /// Creates an error that points at the end of the source code, where a term was expected.
    fn error_eof(&self) -> Error {
        Error::new(vec![self.eof_span()], UnparsableExpression { found: String::new() })
    }

    /// Parses the entire source as a sum of terms, accumulating coefficients by key.
    pub fn parse_terms(&mut self) -> Result<TermMap, Error> {
        let mut map = TermMap::default();

        loop {
            self.parse_term(&mut map)?;

            let start = self.cursor;
            match self.next_token() {
                None => return Ok(map),
                Some(token) if matches!(token.kind, TokenKind::Add | TokenKind::Sub) => {
                    // the sign belongs to the next term
                    self.cursor = start;
                },
                Some(token) => return Err(Self::error_at(&token)),
            }
        }
    }

    /// Parses one term and adds its coefficient to the map.
    fn parse_term(&mut self, map: &mut TermMap) -> Result<(), Error> {
        let mut sign = 1.0;
        let mut token = loop {
            match self.next_token() {
                Some(token) if token.kind == TokenKind::Add => (),
                Some(token) if token.kind == TokenKind::Sub => sign = -sign,
                Some(token) => break token,
                None => return Err(self.error_eof()),
            }
        };

        let mut coeff = 1.0;
        let mut symbol = None;

        loop {
            match token.kind {
                TokenKind::Int | TokenKind::Float => {
                    // the token regexes only match valid floats
                    coeff *= token.lexeme.parse::<f64>().unwrap();
                },
                TokenKind::Name => {
                    let key = match token.lexeme {
                        "x" => TermKey::X,
                        "y" => TermKey::Y,
                        "x2" => TermKey::X2,
                        _ => return Err(Self::error_at(&token)),
                    };
                    if symbol.replace(key).is_some() {
                        // two symbols in one term is outside the grammar
                        return Err(Self::error_at(&token));
                    }
                },
                _ => return Err(Self::error_at(&token)),
            }

            let start = self.cursor;
            match self.next_token() {
                Some(next) if next.kind == TokenKind::Mul => {
                    token = self.next_token().ok_or_else(|| self.error_eof())?;
                },
                _ => {
                    self.cursor = start;
                    break;
                },
            }
        }

        map.add(symbol.unwrap_or(TermKey::Const), sign * coeff);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn linear_side() {
        let map = parse_side("3*x+4").unwrap();
        assert_eq!(map, TermMap { constant: 4.0, x: 3.0, ..Default::default() });
    }

    #[test]
    fn two_variables() {
        let map = parse_side("1*x-2*y+7").unwrap();
        assert_eq!(map, TermMap { constant: 7.0, x: 1.0, y: -2.0, ..Default::default() });
    }

    #[test]
    fn quadratic_term() {
        let map = parse_side("1*x2+3*x+2").unwrap();
        assert_eq!(map, TermMap { constant: 2.0, x: 3.0, x2: 1.0, ..Default::default() });
    }

    #[test]
    fn repeated_terms_accumulate() {
        let map = parse_side("2*x+3*x-1*x").unwrap();
        assert_eq!(map, TermMap { x: 4.0, ..Default::default() });
    }

    #[test]
    fn sign_sequences() {
        let map = parse_side("- -3 + -2*x").unwrap();
        assert_eq!(map, TermMap { constant: 3.0, x: -2.0, ..Default::default() });
    }

    #[test]
    fn bare_constant() {
        let map = parse_side("10").unwrap();
        assert_eq!(map, TermMap { constant: 10.0, ..Default::default() });
    }

    #[test]
    fn float_coefficients() {
        let map = parse_side("2.5*x-0.5").unwrap();
        assert_eq!(map, TermMap { constant: -0.5, x: 2.5, ..Default::default() });
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = parse_side("3*z+1").unwrap_err();
        assert_eq!(format!("{:?}", err.kind), format!("{:?}", UnparsableExpression { found: "z".into() }));
    }

    #[test]
    fn ocr_garbage_is_rejected() {
        assert!(parse_side("3*x#4").is_err());
        assert!(parse_side("3?1").is_err());
    }

    #[test]
    fn two_symbols_in_one_term_are_rejected() {
        assert!(parse_side("1*x*y").is_err());
    }

    #[test]
    fn trailing_operator_is_rejected() {
        assert!(parse_side("3*x+").is_err());
    }

    #[test]
    fn empty_side_is_rejected() {
        assert!(parse_side("").is_err());
        assert!(parse_side("   ").is_err());
    }
}
