//! Textual-format parsers for the automaton and grammar surface syntaxes
//! from `spec.md` §6, `nom`-based like `dandy::parser`.
//!
//! Both parsers are pure: they produce raw, name- or char-addressed
//! declarations and leave construction-time validation to
//! [`crate::automaton::FiniteAutomaton::from_named`] and
//! [`crate::grammar::Grammar::new`], mirroring `dandy`'s parse-then-validate
//! two-step pipeline (`dandy::parser::fa` + `dandy::dfa::parse`).

pub mod automaton;
pub mod grammar;

pub use automaton::automaton;
pub use grammar::grammar;
