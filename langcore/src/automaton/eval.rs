//! Simulates a (possibly nondeterministic) automaton over an input word
//! using a lambda-closed current-state set.
//!
//! [`lambda_closure`] and [`step_set`] are plain functions over a borrowed
//! automaton and subset — no evaluator object involved — so determinization
//! can call them directly instead of driving a mutable evaluator through
//! every frontier subset it discovers.

use std::collections::{HashSet, VecDeque};

use super::FiniteAutomaton;

/// The smallest superset of `seed` closed under lambda transitions.
///
/// Iterative worklist: pop an unvisited state, add its lambda-targets to
/// both the closure set and the worklist. Terminates because the state
/// graph is finite.
pub fn lambda_closure(automaton: &FiniteAutomaton, seed: &HashSet<usize>) -> HashSet<usize> {
    let mut closure: HashSet<usize> = seed.clone();
    let mut worklist: VecDeque<usize> = seed.iter().copied().collect();
    while let Some(idx) = worklist.pop_front() {
        for t in &automaton.state(idx).transitions {
            if t.symbol.is_none() && closure.insert(t.target) {
                worklist.push_back(t.target);
            }
        }
    }
    closure
}

/// `{t : ∃q ∈ subset, (q, symbol, t) ∈ transitions}`. Does not lambda-close
/// the result — callers that need a closed image should follow up with
/// [`lambda_closure`].
pub fn step_set(automaton: &FiniteAutomaton, subset: &HashSet<usize>, symbol: &str) -> HashSet<usize> {
    let mut next = HashSet::new();
    for &q in subset {
        for t in &automaton.state(q).transitions {
            if t.symbol.as_deref() == Some(symbol) {
                next.insert(t.target);
            }
        }
    }
    next
}

fn is_accepting_subset(automaton: &FiniteAutomaton, subset: &HashSet<usize>) -> bool {
    subset.iter().any(|&idx| automaton.state(idx).accepting)
}

/// Tracks the set of states an automaton could be in after consuming a
/// prefix of the input, always kept closed under lambda transitions.
pub struct Evaluator<'a> {
    automaton: &'a FiniteAutomaton,
    current_states: HashSet<usize>,
}

impl<'a> Evaluator<'a> {
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        let seed = HashSet::from([automaton.initial_idx()]);
        Evaluator {
            automaton,
            current_states: lambda_closure(automaton, &seed),
        }
    }

    /// Consuming a symbol not in the alphabet is allowed — it simply
    /// empties the current-state set.
    pub fn process_symbol(&mut self, symbol: &str) {
        let moved = step_set(self.automaton, &self.current_states, symbol);
        self.current_states = lambda_closure(self.automaton, &moved);
    }

    pub fn process_string<'s, I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = &'s str>,
    {
        for s in symbols {
            self.process_symbol(s);
        }
    }

    /// Convenience for single-character alphabets (the common case for
    /// regex-compiled automata): each `char` of `word` is one symbol.
    pub fn process_chars(&mut self, word: &str) {
        for c in word.chars() {
            let mut buf = [0u8; 4];
            self.process_symbol(c.encode_utf8(&mut buf));
        }
    }

    pub fn is_accepting(&self) -> bool {
        is_accepting_subset(self.automaton, &self.current_states)
    }

    pub fn current_states(&self) -> &HashSet<usize> {
        &self.current_states
    }

    /// Save `current_states`, run `process_chars(word)`, read
    /// `is_accepting`, then restore the saved set. Not safe against
    /// concurrent use of the same evaluator instance.
    pub fn accepts(&mut self, word: &str) -> bool {
        let saved = self.current_states.clone();
        self.process_chars(word);
        let accepted = self.is_accepting();
        self.current_states = saved;
        accepted
    }
}

/// Runs a fresh evaluator over `word`, treating each `char` as one symbol.
/// The common-case entry point for checking regex-compiled automata.
pub fn accepts_chars(automaton: &FiniteAutomaton, word: &str) -> bool {
    let mut eval = Evaluator::new(automaton);
    eval.process_chars(word);
    eval.is_accepting()
}
