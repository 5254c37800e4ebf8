//! Stack-driven LL(1) predictive parser, with optional parse-tree
//! construction.
//!
//! No pack example implements a predictive parser, so this follows
//! `spec.md` §4.6's own pseudocode directly, in the teacher's general
//! shape: an explicit `Result`-returning driver loop and a `thiserror`
//! error enum at the recognition boundary.

use thiserror::Error;

use super::table::LL1Table;
use super::Symbol;

/// A node of a predictive-parse derivation tree. `label == None` marks a
/// leaf produced by a lambda production; every other leaf or internal
/// node carries the terminal or non-terminal it was expanded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub label: Option<char>,
    pub children: Vec<ParseTree>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no table cell for ({non_terminal}, {lookahead:?})")]
    NoTableCell { non_terminal: char, lookahead: Lookahead },
    #[error("expected '{expected}' but found {found:?}")]
    TerminalMismatch { expected: char, found: Lookahead },
    #[error("{remaining} symbol(s) of input remain after the stack emptied")]
    TrailingInput { remaining: usize },
}

/// The input position's current lookahead: a terminal, or end-of-input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Symbol(char),
    EndOfInput,
}

impl std::fmt::Display for Lookahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookahead::Symbol(c) => write!(f, "'{c}'"),
            Lookahead::EndOfInput => write!(f, "end of input"),
        }
    }
}

enum StackSym {
    Terminal(char),
    NonTerminal(char),
    EndMarker,
}

struct NodeBuilder {
    label: Option<char>,
    children: Vec<usize>,
}

fn alloc(arena: &mut Vec<NodeBuilder>, label: Option<char>) -> usize {
    arena.push(NodeBuilder { label, children: Vec::new() });
    arena.len() - 1
}

fn build_tree(arena: &[NodeBuilder], idx: usize) -> ParseTree {
    ParseTree {
        label: arena[idx].label,
        children: arena[idx].children.iter().map(|&c| build_tree(arena, c)).collect(),
    }
}

/// Recognizes `input` against `table`, without building a parse tree.
pub fn recognize(table: &LL1Table, axiom: char, input: &str) -> Result<(), ParseError> {
    predictive_parse(table, axiom, input, false).map(|_| ())
}

/// Drives the predictive parser to completion, optionally building a
/// derivation tree rooted at `axiom`.
///
/// Pushes `$` then `axiom` onto a stack; at each step pops the top
/// symbol `X`: a non-terminal looks up `(X, lookahead)` in `table` and
/// pushes the production's body in reverse (so its leftmost symbol ends
/// up on top, lambda productions push nothing); a terminal must match the
/// current input symbol; `$` requires the input to be fully consumed.
pub fn predictive_parse(
    table: &LL1Table,
    axiom: char,
    input: &str,
    build_tree_flag: bool,
) -> Result<Option<ParseTree>, ParseError> {
    let symbols: Vec<char> = input.chars().collect();
    let mut pos = 0usize;

    let mut arena: Vec<NodeBuilder> = Vec::new();
    let root = build_tree_flag.then(|| alloc(&mut arena, Some(axiom)));

    let mut stack: Vec<(StackSym, Option<usize>)> = vec![
        (StackSym::EndMarker, None),
        (StackSym::NonTerminal(axiom), root),
    ];

    while let Some((sym, node)) = stack.pop() {
        match sym {
            StackSym::NonTerminal(nt) => {
                let lookahead_sym = pos_symbol(&symbols, pos);
                let table_lookahead = match lookahead_sym {
                    Some(c) => Symbol::Terminal(c),
                    None => Symbol::EndMarker,
                };
                let production = table.get(nt, table_lookahead).ok_or(ParseError::NoTableCell {
                    non_terminal: nt,
                    lookahead: to_lookahead(lookahead_sym),
                })?;

                if production.body.is_empty() {
                    if let Some(parent) = node {
                        let leaf = alloc(&mut arena, None);
                        arena[parent].children.push(leaf);
                    }
                    continue;
                }

                let mut child_nodes = Vec::with_capacity(production.body.len());
                for sym in &production.body {
                    let label = match sym {
                        Symbol::Terminal(c) | Symbol::NonTerminal(c) => Some(*c),
                        Symbol::Epsilon | Symbol::EndMarker => None,
                    };
                    let child = build_tree_flag.then(|| alloc(&mut arena, label));
                    child_nodes.push(child);
                }
                if let Some(parent) = node {
                    for &child in &child_nodes {
                        arena[parent].children.push(child.unwrap());
                    }
                }

                for (sym, child) in production.body.iter().zip(child_nodes).rev() {
                    let stack_sym = match sym {
                        Symbol::Terminal(c) => StackSym::Terminal(*c),
                        Symbol::NonTerminal(c) => StackSym::NonTerminal(*c),
                        Symbol::Epsilon | Symbol::EndMarker => {
                            unreachable!("production bodies never contain epsilon/end-marker symbols")
                        }
                    };
                    stack.push((stack_sym, child));
                }
            }
            StackSym::Terminal(expected) => match pos_symbol(&symbols, pos) {
                Some(found) if found == expected => pos += 1,
                found => {
                    return Err(ParseError::TerminalMismatch {
                        expected,
                        found: to_lookahead(found),
                    })
                }
            },
            StackSym::EndMarker => {
                if pos != symbols.len() {
                    return Err(ParseError::TrailingInput {
                        remaining: symbols.len() - pos,
                    });
                }
            }
        }
    }

    // `$` is pushed first and so pops last (LIFO); its arm above already
    // validated that the input was fully consumed by the time the stack
    // empties.
    Ok(root.map(|r| build_tree(&arena, r)))
}

fn pos_symbol(symbols: &[char], pos: usize) -> Option<char> {
    symbols.get(pos).copied()
}

fn to_lookahead(sym: Option<char>) -> Lookahead {
    match sym {
        Some(c) => Lookahead::Symbol(c),
        None => Lookahead::EndOfInput,
    }
}
