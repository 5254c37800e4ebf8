//! Parses the `Automaton:` textual format from `spec.md` §6:
//!
//! ```text
//! Automaton:
//!   <name> [final]
//!   ...
//!   <src> -<symbol>-> <dst>
//!   <src> --> <dst>          # lambda transition (two dashes)
//!   <src> ---> <dst>         # alternative lambda spelling
//! ```
//!
//! Grounded in `dandy::parser::fa`'s combinator style (`alt`/`tuple`/
//! `delimited`/`many0`), but only parses into the crate's own
//! `NamedState`/`NamedTransition` — validation (unique names, known
//! transition targets) is left to [`crate::automaton::FiniteAutomaton::from_named`],
//! mirroring `dandy`'s parse-then-`TryFrom` pipeline.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{line_ending, space0, space1};
use nom::combinator::{eof, map, opt, recognize, value, verify};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

use crate::automaton::{NamedState, NamedTransition};

/// Either a state declaration or a transition line, before the two are
/// sorted back out by the caller.
enum Line {
    State(NamedState),
    Transition(NamedTransition),
    Blank,
}

/// Parses a full `Automaton:` block into its raw, name-addressed
/// declarations, in the order they appeared (the first state line is the
/// initial state).
pub fn automaton(input: &str) -> IResult<&str, (Vec<NamedState>, Vec<NamedTransition>)> {
    let (input, _) = delimited(space0, tag("Automaton:"), space0)(input)?;
    let (input, _) = alt((line_ending, eof))(input)?;
    let (input, lines) = many0(line)(input)?;

    let mut states = Vec::new();
    let mut transitions = Vec::new();
    for l in lines {
        match l {
            Line::State(s) => states.push(s),
            Line::Transition(t) => transitions.push(t),
            Line::Blank => {}
        }
    }
    Ok((input, (states, transitions)))
}

fn line(input: &str) -> IResult<&str, Line> {
    alt((
        value(Line::Blank, blank_line),
        terminated(
            alt((
                map(transition_line, Line::Transition),
                map(state_line, Line::State),
            )),
            alt((line_ending, eof)),
        ),
    ))(input)
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

fn state_line(input: &str) -> IResult<&str, NamedState> {
    map(
        preceded(
            space0,
            pair(state_name, opt(preceded(space1, tag("final")))),
        ),
        |(name, final_tag)| NamedState {
            name: name.into(),
            accepting: final_tag.is_some(),
        },
    )(input)
}

fn transition_line(input: &str) -> IResult<&str, NamedTransition> {
    map(
        preceded(
            space0,
            tuple((
                terminated(state_name, space1),
                terminated(arrow, space1),
                state_name,
            )),
        ),
        |(src, symbol, dst)| NamedTransition {
            src: src.into(),
            symbol: symbol.map(|s: &str| s.into()),
            dst: dst.into(),
        },
    )(input)
}

/// `-<symbol>->`, where an empty symbol (the `-->` spelling) denotes
/// lambda, as does the three-dash `--->` alternative spelling.
fn arrow(input: &str) -> IResult<&str, Option<&str>> {
    alt((
        value(None, tag("--->")),
        value(None, tag("-->")),
        map(
            delimited(
                nom::character::complete::char('-'),
                take_till1(|c| c == '-'),
                pair(nom::character::complete::char('-'), nom::character::complete::char('>')),
            ),
            Some,
        ),
    ))(input)
}

fn state_name(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_states_and_transitions() {
        let text = "Automaton:\n  1\n  2\n  3\n  4 final\n\n  1 --> 2\n  2 --> 3\n  3 --> 4\n";
        let (rest, (states, transitions)) = automaton(text).unwrap();
        assert!(rest.trim().is_empty());
        assert_eq!(states.len(), 4);
        assert!(states[3].accepting);
        assert_eq!(transitions.len(), 3);
        assert!(transitions.iter().all(|t| t.symbol.is_none()));
    }

    #[test]
    fn parses_labeled_transition() {
        let text = "Automaton:\n  s0\n  s1 final\n\n  s0 -a-> s1\n";
        let (_, (_, transitions)) = automaton(text).unwrap();
        assert_eq!(transitions[0].symbol.as_deref(), Some("a"));
    }

    #[test]
    fn alternative_lambda_spelling() {
        let text = "Automaton:\n  s0\n  s1 final\n\n  s0 ---> s1\n";
        let (_, (_, transitions)) = automaton(text).unwrap();
        assert!(transitions[0].symbol.is_none());
    }
}
