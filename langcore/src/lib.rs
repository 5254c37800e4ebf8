//!# langcore
//!
//! `langcore` is a teaching-grade toolkit for formal-language processing:
//! regular-expression compilation (Kleene syntax) to an NFA, subset
//! construction to a total DFA, Moore-style DFA minimization, on-the-fly
//! NFA evaluation with lambda closure, and context-free grammar FIRST/FOLLOW
//! analysis driving an LL(1) table and a stack-based predictive parser.
//!
//! ## Usage
//!
//! ```rust
//! use langcore::regex;
//! use langcore::automaton::eval::accepts_chars;
//! use langcore::automaton::{determinize::determinize, minimize::minimize};
//!
//! let nfa = regex::compile("(a+b)*.a");
//! assert!(accepts_chars(&nfa, "aba"));
//! assert!(!accepts_chars(&nfa, "ab"));
//!
//! let dfa = determinize(&nfa);
//! assert!(dfa.is_total_deterministic());
//! let minimal = minimize(&dfa);
//! assert!(accepts_chars(&minimal, "aba"));
//! ```
//!
//! ```rust
//! use langcore::grammar::{Grammar, table, predictive};
//! use std::collections::BTreeSet;
//!
//! let g = Grammar::new(
//!     BTreeSet::from(['i', '+', '*', '(', ')']),
//!     BTreeSet::from(['E', 'X', 'T', 'Y']),
//!     vec![
//!         ('E', "TX".into()),
//!         ('X', "+E".into()),
//!         ('X', "".into()),
//!         ('T', "iY".into()),
//!         ('T', "(E)".into()),
//!         ('Y', "*T".into()),
//!         ('Y', "".into()),
//!     ],
//!     'E',
//! ).unwrap();
//!
//! let ll1 = table::build_ll1_table(&g).unwrap();
//! assert!(predictive::recognize(&ll1, g.axiom(), "i+i*i").is_ok());
//! assert!(predictive::recognize(&ll1, g.axiom(), "i+").is_err());
//! ```
//!
//! ## Operations
//!
//! * [Compiling regular expressions to NFAs](regex::compile)
//! * [Evaluating automata with lambda closure](automaton::eval)
//! * [Determinizing an NFA into a total DFA](automaton::determinize::determinize)
//! * [Minimizing a DFA](automaton::minimize::minimize)
//! * [Parsing the `Automaton:` / grammar textual formats](parser)
//! * [FIRST/FOLLOW, LL(1) tables and predictive parsing](grammar)

pub mod automaton;
pub mod grammar;
pub mod parser;
pub mod regex;
pub mod util;

#[cfg(test)]
mod tests;
