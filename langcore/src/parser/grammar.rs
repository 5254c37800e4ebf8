//! Parses the grammar textual format from `spec.md` §6:
//!
//! ```text
//! A -> αβγ
//! A ->              # empty right-hand side == lambda
//! ```
//!
//! Non-terminals are exactly the left-hand-side symbols across all rules;
//! terminals are every other symbol appearing on a right-hand side; the
//! axiom is the LHS of the first rule. Adapted from
//! `dandy::parser::fa`'s line-oriented combinator idiom.

use std::collections::BTreeSet;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::{anychar, line_ending, space0};
use nom::combinator::{eof, map, recognize, value, verify};
use nom::multi::many0;
use nom::sequence::{delimited, terminated, tuple};
use nom::IResult;

/// One raw `head -> body` rule, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduction {
    pub head: char,
    pub body: String,
}

enum Line {
    Rule(RawProduction),
    Blank,
}

/// Parses the full grammar text into its raw productions (in rule order,
/// so the first rule's head is the axiom), plus the derived terminal and
/// non-terminal alphabets.
pub fn grammar(input: &str) -> IResult<&str, (BTreeSet<char>, BTreeSet<char>, Vec<RawProduction>)> {
    let (input, lines) = many0(line)(input)?;

    let rules: Vec<RawProduction> = lines
        .into_iter()
        .filter_map(|l| match l {
            Line::Rule(r) => Some(r),
            Line::Blank => None,
        })
        .collect();

    let non_terminals: BTreeSet<char> = rules.iter().map(|p| p.head).collect();
    let terminals: BTreeSet<char> = rules
        .iter()
        .flat_map(|p| p.body.chars())
        .filter(|c| !non_terminals.contains(c))
        .collect();

    Ok((input, (terminals, non_terminals, rules)))
}

fn line(input: &str) -> IResult<&str, Line> {
    alt((value(Line::Blank, blank_line), map(rule_line, Line::Rule)))(input)
}

fn rule_line(input: &str) -> IResult<&str, RawProduction> {
    map(
        terminated(
            tuple((
                delimited(space0, anychar, space0),
                delimited(tag("->"), take_till(is_line_ending_char), space0),
            )),
            alt((line_ending, eof)),
        ),
        |(head, body)| RawProduction {
            head,
            body: body.trim().to_string(),
        },
    )(input)
}

fn is_line_ending_char(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn blank_line(input: &str) -> IResult<&str, ()> {
    value(
        (),
        verify(
            recognize(terminated(space0, alt((line_ending, eof)))),
            |consumed: &str| !consumed.is_empty(),
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arithmetic_grammar() {
        let text = "E -> TX\nX -> +E\nX ->\nT -> iY\nT -> (E)\nY -> *T\nY ->\n";
        let (rest, (terminals, non_terminals, rules)) = grammar(text).unwrap();
        assert!(rest.is_empty());
        assert_eq!(non_terminals, BTreeSet::from(['E', 'X', 'T', 'Y']));
        assert_eq!(terminals, BTreeSet::from(['+', 'i', '(', ')', '*']));
        assert_eq!(rules[0].head, 'E');
        assert_eq!(rules[0].body, "TX");
        assert_eq!(rules[2].body, "");
    }

    #[test]
    fn ignores_blank_lines_between_rules() {
        let text = "S -> a\n\nS -> b\n";
        let (_, (_, _, rules)) = grammar(text).unwrap();
        assert_eq!(rules.len(), 2);
    }
}
