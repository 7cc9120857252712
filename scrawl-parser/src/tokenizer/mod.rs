pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn normalized_equation() {
        compare_tokens(
            "3*x+4=10",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x"),
                (TokenKind::Add, "+"),
                (TokenKind::Int, "4"),
                (TokenKind::Eq, "="),
                (TokenKind::Int, "10"),
            ],
        );
    }

    #[test]
    fn quadratic_name_is_one_token() {
        compare_tokens(
            "1*x2 - 2.5*x",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "2.5"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn ocr_garbage_becomes_symbols() {
        compare_tokens(
            "x#y",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Symbol, "#"),
                (TokenKind::Name, "y"),
            ],
        );
    }
}
