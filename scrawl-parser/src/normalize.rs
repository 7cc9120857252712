//! Rewrites raw OCR text into a strictly parseable algebraic string.
//!
//! Three rules, applied in order as a single scan:
//!
//! 1. A digit immediately followed by a letter gains an explicit `*` (`3x` becomes `3*x`).
//! 2. A bare letter (one not already preceded by a digit multiplication) gains a `1*`
//!    coefficient (`x` becomes `1*x`).
//! 3. Variable case is folded (`X` becomes `x`, `Y` becomes `y`).
//!
//! Chained text substitutions get rule 2 wrong: applied globally it re-inserts coefficients on
//! every pass (`1*x` becomes `1*1*x`). Scanning characters instead lets rule 2 see whether the
//! letter is already part of an explicit multiplication, which makes the whole transformation
//! idempotent: `normalize(normalize(s)) == normalize(s)`.

/// Normalizes one line of raw OCR output into a parseable algebraic string.
///
/// The quadratic identifier `x2` is treated as a unit, so `3x2` becomes `3*x2` and `x2` becomes
/// `1*x2`. Characters that are not letters pass through untouched; whether they form a valid
/// expression is the parser's concern.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let letter = c.to_ascii_lowercase();
        let mut ident = String::from(letter);
        if letter == 'x' && chars.peek() == Some(&'2') {
            chars.next();
            ident.push('2');
        }

        let mut rev = out.chars().rev();
        let (last, before) = (rev.next(), rev.next());
        match (before, last) {
            // rule 1: `3x` becomes `3*x`
            (_, Some(digit)) if digit.is_ascii_digit() => out.push('*'),
            // already explicit: `3*x` stays `3*x`
            (Some(digit), Some('*')) if digit.is_ascii_digit() => (),
            // rule 2: a bare letter gains a `1*` coefficient
            _ => out.push_str("1*"),
        }
        out.push_str(&ident);
    }

    out
}
