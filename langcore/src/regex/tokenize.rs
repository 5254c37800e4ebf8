//! Lexes the Kleene-syntax regex surface into a flat token stream.
//!
//! Grounded in `dandy::parser::regex`'s `nom`-combinator lexing style
//! (`alt`/`value`/`map`/`take(1)`), adapted to this crate's smaller,
//! explicit-concatenation operator set.

use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete::char;
use nom::combinator::{map, value};
use nom::IResult;

/// One lexical unit of the regex surface syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Any non-operator character.
    Symbol(char),
    /// `λ` — the literal empty word.
    Lambda,
    /// `*` — postfix Kleene star.
    Star,
    /// `+` — binary union.
    Union,
    /// `.` — binary, explicit concatenation.
    Concat,
    LParen,
    RParen,
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Union, char('+')),
        value(Token::Concat, char('.')),
        value(Token::Star, char('*')),
        value(Token::Lambda, char('λ')),
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
        map(take(1usize), |s: &str| {
            Token::Symbol(s.chars().next().expect("take(1) yields exactly one char"))
        }),
    ))(input)
}

/// Tokenizes `source` left to right. `token` matches any single character,
/// so this never fails over non-empty input; the procedure does not
/// validate syntactic correctness of the resulting stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        let (next, tok) = token(rest).expect("token recognizes every non-empty &str prefix");
        tokens.push(tok);
        rest = next;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_operators_and_literals() {
        let tokens = tokenize("(a+b)*.a");
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Symbol('a'),
                Token::Union,
                Token::Symbol('b'),
                Token::RParen,
                Token::Star,
                Token::Concat,
                Token::Symbol('a'),
            ]
        );
    }

    #[test]
    fn lambda_literal() {
        assert_eq!(tokenize("λ"), vec![Token::Lambda]);
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
