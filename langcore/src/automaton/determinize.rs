//! Subset construction: turns a (possibly nondeterministic, possibly
//! lambda-bearing) automaton into an equivalent *total* DFA.

use std::collections::{HashMap, HashSet, VecDeque};

use super::eval::{lambda_closure, step_set};
use super::{FiniteAutomaton, State};

fn sorted_vec(set: &HashSet<usize>) -> Vec<usize> {
    let mut v: Vec<usize> = set.iter().copied().collect();
    v.sort_unstable();
    v
}

fn is_accepting_subset(automaton: &FiniteAutomaton, subset: &HashSet<usize>) -> bool {
    subset.iter().any(|&idx| automaton.state(idx).accepting)
}

/// Subset construction producing a total DFA. New state names are
/// assigned `q1`, `q2`, … in creation order, independent of the source
/// automaton's names. The empty subset maps to a distinguished sink state
/// named `"empty"`, with self-loops on every alphabet symbol.
pub fn determinize(automaton: &FiniteAutomaton) -> FiniteAutomaton {
    let alphabet: Vec<_> = automaton.alphabet().to_vec();

    let initial_seed = HashSet::from([automaton.initial_idx()]);
    let initial_closure = lambda_closure(automaton, &initial_seed);

    let mut subset_index: HashMap<Vec<usize>, usize> = HashMap::new();
    let mut states: Vec<State> = Vec::new();
    let mut worklist: VecDeque<Vec<usize>> = VecDeque::new();
    let mut next_q = 1usize;
    let mut empty_idx: Option<usize> = None;

    let initial_key = sorted_vec(&initial_closure);
    subset_index.insert(initial_key.clone(), 0);
    states.push(State::new(
        format!("q{next_q}").into(),
        is_accepting_subset(automaton, &initial_closure),
    ));
    next_q += 1;
    worklist.push_back(initial_key);

    while let Some(subset_key) = worklist.pop_front() {
        let current_idx = subset_index[&subset_key];
        let subset: HashSet<usize> = subset_key.iter().copied().collect();

        for symbol in &alphabet {
            let moved = step_set(automaton, &subset, symbol);
            let moved_closed = lambda_closure(automaton, &moved);

            let target_idx = if moved_closed.is_empty() {
                *empty_idx.get_or_insert_with(|| {
                    let idx = states.len();
                    states.push(State::new("empty".into(), false));
                    idx
                })
            } else {
                let key = sorted_vec(&moved_closed);
                match subset_index.get(&key) {
                    Some(&idx) => idx,
                    None => {
                        let idx = states.len();
                        states.push(State::new(
                            format!("q{next_q}").into(),
                            is_accepting_subset(automaton, &moved_closed),
                        ));
                        next_q += 1;
                        subset_index.insert(key.clone(), idx);
                        worklist.push_back(key);
                        idx
                    }
                }
            };

            states[current_idx].push_transition(Some(symbol.clone()), target_idx);
        }
    }

    if let Some(idx) = empty_idx {
        for symbol in &alphabet {
            states[idx].push_transition(Some(symbol.clone()), idx);
        }
    }

    let mut result = FiniteAutomaton::from_states_unchecked(states);
    result.mark_deterministic(true);
    result
}
