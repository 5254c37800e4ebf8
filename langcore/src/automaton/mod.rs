//! Finite automata: states, transitions (including lambda) and the
//! invariants a well-formed automaton must hold.
//!
//! States live in a single arena (`Vec<State>`) and are referred to by
//! their index from everywhere else in the crate — regex construction,
//! determinization and minimization all build new `Vec<State>`s and wrap
//! them up with [`FiniteAutomaton::from_states_unchecked`] once the result
//! is already known to satisfy the invariants below.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

pub mod determinize;
pub mod eval;
pub mod minimize;

pub use eval::Evaluator;

/// A symbol drawn from an automaton's alphabet, or a state's name.
///
/// Cheaply clonable; automata generally have a handful of distinct symbols
/// shared across many transitions.
pub type Symbol = Rc<str>;

/// One outgoing edge from a state. `symbol == None` is the lambda
/// (epsilon) transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub symbol: Option<Symbol>,
    pub target: usize,
}

/// A single automaton state, identified by its position in the arena.
#[derive(Debug, Clone)]
pub struct State {
    pub name: Symbol,
    pub accepting: bool,
    pub transitions: Vec<Transition>,
}

impl State {
    pub fn new(name: Symbol, accepting: bool) -> Self {
        State {
            name,
            accepting,
            transitions: Vec::new(),
        }
    }

    /// Adds a transition, deduplicated by (symbol, target).
    pub fn push_transition(&mut self, symbol: Option<Symbol>, target: usize) {
        let t = Transition { symbol, target };
        if !self.transitions.contains(&t) {
            self.transitions.push(t);
        }
    }
}

/// A raw, name-addressed state declaration, as produced by the textual
/// format parser before names are resolved to arena indices.
#[derive(Debug, Clone)]
pub struct NamedState {
    pub name: Symbol,
    pub accepting: bool,
}

/// A raw, name-addressed transition, as produced by the textual format
/// parser before names are resolved to arena indices.
#[derive(Debug, Clone)]
pub struct NamedTransition {
    pub src: Symbol,
    pub symbol: Option<Symbol>,
    pub dst: Symbol,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("automaton has no states")]
    Empty,
    #[error("duplicate state name: {0}")]
    DuplicateState(String),
    #[error("transition from {src} references unknown state {dst}")]
    UnknownTarget { src: String, dst: String },
}

/// An ordered collection of states, the first of which is always the
/// initial state, plus a derived alphabet and a deterministic flag.
///
/// Equal by construction, not by structural comparison: two automata that
/// accept the same language may have entirely different state sets.
#[derive(Debug, Clone)]
pub struct FiniteAutomaton {
    states: Vec<State>,
    by_name: HashMap<Symbol, usize>,
    alphabet: Rc<[Symbol]>,
    /// `None` means "not yet checked"; determinization sets this to
    /// `Some(true)` on its output.
    deterministic: Option<bool>,
}

impl FiniteAutomaton {
    /// Builds and validates an automaton from name-addressed declarations,
    /// as produced by the textual format parser. The first declared state
    /// is the initial state.
    pub fn from_named(
        decls: Vec<NamedState>,
        edges: Vec<NamedTransition>,
    ) -> Result<Self, AutomatonError> {
        if decls.is_empty() {
            return Err(AutomatonError::Empty);
        }
        let mut by_name = HashMap::with_capacity(decls.len());
        let mut states = Vec::with_capacity(decls.len());
        for decl in decls {
            if by_name.contains_key(&decl.name) {
                return Err(AutomatonError::DuplicateState(decl.name.to_string()));
            }
            by_name.insert(decl.name.clone(), states.len());
            states.push(State::new(decl.name, decl.accepting));
        }
        for edge in edges {
            let src = match by_name.get(&edge.src) {
                Some(idx) => *idx,
                None => {
                    return Err(AutomatonError::UnknownTarget {
                        src: edge.src.to_string(),
                        dst: edge.src.to_string(),
                    })
                }
            };
            let dst = match by_name.get(&edge.dst) {
                Some(idx) => *idx,
                None => {
                    return Err(AutomatonError::UnknownTarget {
                        src: edge.src.to_string(),
                        dst: edge.dst.to_string(),
                    })
                }
            };
            states[src].push_transition(edge.symbol, dst);
        }
        Ok(Self::finish(states, by_name))
    }

    /// Wraps an already-valid state arena (unique names, in-range
    /// transition targets, initial state at index 0) with its derived
    /// alphabet. Used internally by the regex compiler, determinization
    /// and minimization, whose output is valid by construction.
    pub(crate) fn from_states_unchecked(states: Vec<State>) -> Self {
        let mut by_name = HashMap::with_capacity(states.len());
        for (idx, s) in states.iter().enumerate() {
            by_name.insert(s.name.clone(), idx);
        }
        Self::finish(states, by_name)
    }

    fn finish(states: Vec<State>, by_name: HashMap<Symbol, usize>) -> Self {
        let mut symbols: Vec<Symbol> = Vec::new();
        for s in &states {
            for t in &s.transitions {
                if let Some(sym) = &t.symbol {
                    if !symbols.contains(sym) {
                        symbols.push(sym.clone());
                    }
                }
            }
        }
        FiniteAutomaton {
            states,
            by_name,
            alphabet: symbols.into(),
            deterministic: None,
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, idx: usize) -> &State {
        &self.states[idx]
    }

    pub fn initial_idx(&self) -> usize {
        0
    }

    pub fn state_idx(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// `None` if not yet checked; `determinize` sets `Some(true)` on its
    /// result.
    pub fn deterministic_flag(&self) -> Option<bool> {
        self.deterministic
    }

    pub(crate) fn mark_deterministic(&mut self, value: bool) {
        self.deterministic = Some(value);
    }

    /// Serializes back into the `Automaton:` textual format (`spec.md`
    /// §6) this crate parses, so the two round-trip (teacher precedent:
    /// `Dfa::to_table`/`Nfa::to_table` round-trip through the same format
    /// they're parsed from).
    pub fn to_text(&self) -> String {
        let mut out = String::from("Automaton:\n");
        for s in &self.states {
            out.push_str("  ");
            out.push_str(&s.name);
            if s.accepting {
                out.push_str(" final");
            }
            out.push('\n');
        }
        out.push('\n');
        for s in &self.states {
            for t in &s.transitions {
                out.push_str("  ");
                out.push_str(&s.name);
                match &t.symbol {
                    Some(sym) => {
                        out.push_str(" -");
                        out.push_str(sym);
                        out.push_str("-> ");
                    }
                    None => out.push_str(" --> "),
                }
                out.push_str(&self.states[t.target].name);
                out.push('\n');
            }
        }
        out
    }

    /// A pure structural check, independent of the cached flag: every
    /// state has no lambda transitions and exactly one outgoing
    /// transition per alphabet symbol.
    pub fn is_total_deterministic(&self) -> bool {
        self.states.iter().all(|s| {
            if s.transitions.iter().any(|t| t.symbol.is_none()) {
                return false;
            }
            self.alphabet.iter().all(|sym| {
                s.transitions
                    .iter()
                    .filter(|t| t.symbol.as_ref() == Some(sym))
                    .count()
                    == 1
            })
        })
    }
}
