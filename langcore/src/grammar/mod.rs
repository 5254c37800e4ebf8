//! Context-free grammars: the four-tuple model, FIRST/FOLLOW memoization,
//! the LL(1) table builder and the stack-driven predictive parser.
//!
//! Grounded in the validation-at-construction pattern of
//! `dandy::dfa::parse::DfaParseError`'s `TryFrom` impl, adapted to a CFG's
//! invariants instead of a DFA's.

pub mod first_follow;
pub mod predictive;
pub mod table;

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// A single grammar symbol, spanning both the symbols that appear in a
/// production body (`Terminal`/`NonTerminal`) and the markers FIRST/FOLLOW
/// sets and the LL(1) table carry alongside them (`Epsilon`, the lambda
/// marker; `EndMarker`, the reserved `$` sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(char),
    NonTerminal(char),
    /// λ — "no symbol", used inside FIRST sets for nullable strings.
    Epsilon,
    /// `$` — the end-of-input sentinel, used inside FOLLOW sets and as a
    /// reserved LL(1) table column.
    EndMarker,
}

/// One production `head -> body`. An empty `body` is the lambda
/// production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: char,
    pub body: Vec<Symbol>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("terminals must be non-empty")]
    EmptyTerminals,
    #[error("non-terminals must be non-empty")]
    EmptyNonTerminals,
    #[error("'{0}' is reserved for end-of-input and cannot be a terminal")]
    ReservedEndMarker(char),
    #[error("'{0}' is both a terminal and a non-terminal")]
    NotDisjoint(char),
    #[error("axiom '{0}' is not a declared non-terminal")]
    AxiomNotNonTerminal(char),
    #[error("production head '{0}' is not a declared non-terminal")]
    UnknownHead(char),
    #[error("production for '{head}' references unknown symbol '{symbol}'")]
    UnknownBodySymbol { head: char, symbol: char },
    #[error("non-terminal '{0}' has no productions")]
    NoProductions(char),
}

/// A context-free grammar, validated at construction, with FIRST and
/// FOLLOW sets memoized alongside it.
#[derive(Debug, Clone)]
pub struct Grammar {
    terminals: BTreeSet<char>,
    non_terminals: BTreeSet<char>,
    productions: Vec<Production>,
    axiom: char,
    first: BTreeMap<char, BTreeSet<Symbol>>,
    follow: BTreeMap<char, BTreeSet<Symbol>>,
}

impl Grammar {
    /// Builds and validates a grammar from raw, char-addressed
    /// declarations (as produced by the textual format parser), then
    /// memoizes its FIRST and FOLLOW sets.
    pub fn new(
        terminals: BTreeSet<char>,
        non_terminals: BTreeSet<char>,
        raw_productions: Vec<(char, String)>,
        axiom: char,
    ) -> Result<Self, GrammarError> {
        if terminals.is_empty() {
            return Err(GrammarError::EmptyTerminals);
        }
        if non_terminals.is_empty() {
            return Err(GrammarError::EmptyNonTerminals);
        }
        if terminals.contains(&'$') {
            return Err(GrammarError::ReservedEndMarker('$'));
        }
        for t in &terminals {
            if non_terminals.contains(t) {
                return Err(GrammarError::NotDisjoint(*t));
            }
        }
        if !non_terminals.contains(&axiom) {
            return Err(GrammarError::AxiomNotNonTerminal(axiom));
        }

        let mut seen_heads: BTreeSet<char> = BTreeSet::new();
        let mut productions = Vec::with_capacity(raw_productions.len());
        for (head, body) in raw_productions {
            if !non_terminals.contains(&head) {
                return Err(GrammarError::UnknownHead(head));
            }
            let mut resolved = Vec::with_capacity(body.chars().count());
            for c in body.chars() {
                let sym = if non_terminals.contains(&c) {
                    Symbol::NonTerminal(c)
                } else if terminals.contains(&c) {
                    Symbol::Terminal(c)
                } else {
                    return Err(GrammarError::UnknownBodySymbol { head, symbol: c });
                };
                resolved.push(sym);
            }
            seen_heads.insert(head);
            productions.push(Production {
                head,
                body: resolved,
            });
        }
        for nt in &non_terminals {
            if !seen_heads.contains(nt) {
                return Err(GrammarError::NoProductions(*nt));
            }
        }

        let first = first_follow::compute_first(&non_terminals, &productions);
        let follow = first_follow::compute_follow(&non_terminals, &productions, axiom, &first);

        Ok(Grammar {
            terminals,
            non_terminals,
            productions,
            axiom,
            first,
            follow,
        })
    }

    pub fn terminals(&self) -> &BTreeSet<char> {
        &self.terminals
    }

    pub fn non_terminals(&self) -> &BTreeSet<char> {
        &self.non_terminals
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn axiom(&self) -> char {
        self.axiom
    }

    /// FIRST(X) for a non-terminal `x`, memoized at construction.
    pub fn first(&self, x: char) -> &BTreeSet<Symbol> {
        static EMPTY: BTreeSet<Symbol> = BTreeSet::new();
        self.first.get(&x).unwrap_or(&EMPTY)
    }

    /// FOLLOW(A) for a non-terminal `a`, memoized at construction.
    pub fn follow(&self, a: char) -> &BTreeSet<Symbol> {
        static EMPTY: BTreeSet<Symbol> = BTreeSet::new();
        self.follow.get(&a).unwrap_or(&EMPTY)
    }

    /// FIRST(α) for an arbitrary sentential form over this grammar's
    /// alphabet. Returns `Err` if `alpha` references a symbol outside the
    /// grammar's terminals/non-terminals.
    pub fn first_of_string(&self, alpha: &[Symbol]) -> Result<BTreeSet<Symbol>, UnknownSymbolError> {
        for sym in alpha {
            match sym {
                Symbol::Terminal(c) if !self.terminals.contains(c) => {
                    return Err(UnknownSymbolError(Symbol::Terminal(*c)))
                }
                Symbol::NonTerminal(c) if !self.non_terminals.contains(c) => {
                    return Err(UnknownSymbolError(Symbol::NonTerminal(*c)))
                }
                Symbol::Epsilon | Symbol::EndMarker => {
                    return Err(UnknownSymbolError(*sym));
                }
                _ => {}
            }
        }
        Ok(first_follow::first_of_string(alpha, &self.first))
    }
}

/// FIRST computation over a sentential form referenced a symbol outside
/// the grammar (`spec.md` §7 `UnknownSymbol`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("symbol {0:?} does not belong to this grammar")]
pub struct UnknownSymbolError(pub Symbol);

#[cfg(test)]
mod tests {
    use super::*;

    fn expr_grammar() -> Grammar {
        // E -> TX ; X -> +E | lambda ; T -> iY | (E) ; Y -> *T | lambda
        Grammar::new(
            BTreeSet::from(['i', '+', '*', '(', ')']),
            BTreeSet::from(['E', 'X', 'T', 'Y']),
            vec![
                ('E', "TX".into()),
                ('X', "+E".into()),
                ('X', "".into()),
                ('T', "iY".into()),
                ('T', "(E)".into()),
                ('Y', "*T".into()),
                ('Y', "".into()),
            ],
            'E',
        )
        .unwrap()
    }

    #[test]
    fn first_and_follow_of_arithmetic_grammar() {
        let g = expr_grammar();
        assert!(g.first('E').contains(&Symbol::Terminal('i')));
        assert!(g.first('E').contains(&Symbol::Terminal('(')));
        assert!(g.first('X').contains(&Symbol::Epsilon));
        assert!(g.follow('X').contains(&Symbol::EndMarker));
        assert!(g.follow('E').contains(&Symbol::EndMarker));
        assert!(g.follow('E').contains(&Symbol::Terminal(')')));
    }

    #[test]
    fn axiom_must_be_a_non_terminal() {
        let err = Grammar::new(
            BTreeSet::from(['a']),
            BTreeSet::from(['S']),
            vec![('S', "a".into())],
            'Z',
        )
        .unwrap_err();
        assert_eq!(err, GrammarError::AxiomNotNonTerminal('Z'));
    }

    #[test]
    fn every_non_terminal_needs_a_production() {
        let err = Grammar::new(
            BTreeSet::from(['a']),
            BTreeSet::from(['S', 'T']),
            vec![('S', "a".into())],
            'S',
        )
        .unwrap_err();
        assert_eq!(err, GrammarError::NoProductions('T'));
    }

    #[test]
    fn disjointness_is_checked() {
        let err = Grammar::new(
            BTreeSet::from(['a']),
            BTreeSet::from(['a']),
            vec![('a', "".into())],
            'a',
        )
        .unwrap_err();
        assert_eq!(err, GrammarError::NotDisjoint('a'));
    }
}
