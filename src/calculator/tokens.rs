//! Token stream for sanitized arithmetic input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A number (`12`, `12.`, `12.5`, `.5`) or a single operator/paren.
    static ref TOKEN: Regex = Regex::new(r"(\d+\.?\d*|\.\d+)|([+\-*/%^()])").unwrap();
}

/// One lexical element of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(char),
}

/// Binding strength of an operator, if it has one.
///
/// Parens carry no precedence (they are handled structurally), and `^` is
/// recognized by the tokenizer but carries none either, so it never
/// participates in precedence comparisons.
pub fn precedence(op: char) -> Option<u8> {
    match op {
        '+' | '-' => Some(1),
        '*' | '/' | '%' => Some(2),
        _ => None,
    }
}

/// Split a sanitized expression into tokens, left to right.
///
/// Fragments that match neither a number nor a known operator are silently
/// skipped rather than rejected; an empty result is legal and fails later
/// as an evaluation fault.
pub fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for caps in TOKEN.captures_iter(expr) {
        if let Some(num) = caps.get(1) {
            if let Ok(value) = num.as_str().parse::<f64>() {
                tokens.push(Token::Number(value));
            }
        } else if let Some(op) = caps.get(2) {
            // Single-character class, so chars().next() always succeeds.
            if let Some(symbol) = op.as_str().chars().next() {
                tokens.push(Token::Operator(symbol));
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(
            tokenize("2+3*4"),
            vec![
                Token::Number(2.0),
                Token::Operator('+'),
                Token::Number(3.0),
                Token::Operator('*'),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(
            tokenize("1.5 .5 2."),
            vec![Token::Number(1.5), Token::Number(0.5), Token::Number(2.0)]
        );
    }

    #[test]
    fn test_parens_and_remainder() {
        assert_eq!(
            tokenize("(8%3)"),
            vec![
                Token::Operator('('),
                Token::Number(8.0),
                Token::Operator('%'),
                Token::Number(3.0),
                Token::Operator(')'),
            ]
        );
    }

    #[test]
    fn test_caret_is_tokenized_but_has_no_precedence() {
        assert_eq!(
            tokenize("2^3"),
            vec![Token::Number(2.0), Token::Operator('^'), Token::Number(3.0)]
        );
        assert_eq!(precedence('^'), None);
        assert_eq!(precedence('('), None);
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(tokenize("a1b2c"), vec![Token::Number(1.0), Token::Number(2.0)]);
        assert_eq!(tokenize(""), Vec::<Token>::new());
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(precedence('+'), Some(1));
        assert_eq!(precedence('-'), Some(1));
        assert_eq!(precedence('*'), Some(2));
        assert_eq!(precedence('/'), Some(2));
        assert_eq!(precedence('%'), Some(2));
    }
}
