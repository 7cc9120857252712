//! Text-level processing for OCR'd handwritten equations.
//!
//! Raw text recovered from a handwritten-equation image is noisy: multiplication is implicit
//! (`3x`), bare variables carry no coefficient (`x + 4`), and casing is inconsistent (`X`, `Y`).
//! This crate turns that text into numbers in three steps:
//!
//! 1. [`normalize`](normalize::normalize) rewrites a line into a strictly parseable form
//!    (`3x+4` becomes `3*x+4`).
//! 2. [`split`](split::split) separates the input into one or two equations and each equation
//!    into its `lhs` and `rhs` around the single `=`.
//! 3. [`parse_side`](parser::parse_side) parses one side into a [`TermMap`](parser::TermMap),
//!    a flat map from term key (`const`, `x`, `y`, `x2`) to its signed coefficient.
//!
//! The quadratic term `x2` is a distinct identifier, not `x` raised to a power; the restricted
//! grammar has no exponentiation at all.

pub mod normalize;
pub mod parser;
pub mod split;
pub mod tokenizer;
