//! DFA minimization: reachability pruning followed by Moore-style
//! equivalence-class partition refinement.
//!
//! Deliberately not Hopcroft's worklist algorithm — the class-id
//! assignment order here is pinned down by a specific tie-break rule so
//! that identical input always yields an identically-named output.

use std::collections::{HashSet, VecDeque};

use super::{FiniteAutomaton, State};

/// Breadth-first search from the initial state over all transitions;
/// returns the reachable indices in their original (initial-first) order.
fn reachable_in_order(automaton: &FiniteAutomaton) -> Vec<usize> {
    let mut visited = HashSet::from([automaton.initial_idx()]);
    let mut queue = VecDeque::from([automaton.initial_idx()]);
    while let Some(idx) = queue.pop_front() {
        for t in &automaton.state(idx).transitions {
            if visited.insert(t.target) {
                queue.push_back(t.target);
            }
        }
    }
    (0..automaton.len()).filter(|i| visited.contains(i)).collect()
}

fn target_class(prev: &[usize], state: &State, symbol: &str) -> Option<usize> {
    state
        .transitions
        .iter()
        .find(|t| t.symbol.as_deref() == Some(symbol))
        .map(|t| prev[t.target])
}

/// One round of the partition refinement: for each still-unassigned state
/// `j` (in index order), assign a fresh class id, then assign the same id
/// to every later, still-unassigned state `i` with equal previous-round
/// class and identical per-symbol transition-target classes.
fn refine(pruned: &[State], alphabet: &[super::Symbol], prev: &[usize]) -> Vec<usize> {
    let n = pruned.len();
    let mut assigned: Vec<Option<usize>> = vec![None; n];
    let mut next_class = 0usize;

    for j in 0..n {
        if assigned[j].is_some() {
            continue;
        }
        assigned[j] = Some(next_class);
        for i in (j + 1)..n {
            if assigned[i].is_some() || prev[i] != prev[j] {
                continue;
            }
            let same = alphabet
                .iter()
                .all(|sym| target_class(prev, &pruned[i], sym) == target_class(prev, &pruned[j], sym));
            if same {
                assigned[i] = Some(next_class);
            }
        }
        next_class += 1;
    }

    assigned.into_iter().map(|c| c.unwrap()).collect()
}

/// Minimizes a total DFA. Input must already be deterministic and total
/// (call [`super::determinize::determinize`] first if unknown).
pub fn minimize(automaton: &FiniteAutomaton) -> FiniteAutomaton {
    let alphabet: Vec<_> = automaton.alphabet().to_vec();

    let reachable = reachable_in_order(automaton);
    let mut old_to_new = std::collections::HashMap::with_capacity(reachable.len());
    for (new_idx, &old_idx) in reachable.iter().enumerate() {
        old_to_new.insert(old_idx, new_idx);
    }
    let pruned: Vec<State> = reachable
        .iter()
        .map(|&old_idx| {
            let s = automaton.state(old_idx);
            let mut ns = State::new(s.name.clone(), s.accepting);
            for t in &s.transitions {
                ns.push_transition(t.symbol.clone(), old_to_new[&t.target]);
            }
            ns
        })
        .collect();

    // Initial partition: accepting states -> class 1, non-accepting -> class 0.
    let mut prev: Vec<usize> = pruned.iter().map(|s| if s.accepting { 1 } else { 0 }).collect();

    loop {
        let next = refine(&pruned, &alphabet, &prev);
        if next == prev {
            break;
        }
        prev = next;
    }
    let classes = prev;

    let class_count = classes.iter().copied().max().map(|m| m + 1).unwrap_or(0);
    // representative = first pruned-index with that class id
    let mut representative = vec![usize::MAX; class_count];
    for (idx, &class) in classes.iter().enumerate() {
        if representative[class] == usize::MAX {
            representative[class] = idx;
        }
    }

    let mut out_states: Vec<State> = (0..class_count)
        .map(|class_id| {
            let rep = &pruned[representative[class_id]];
            State::new(format!("q{class_id}").into(), rep.accepting)
        })
        .collect();
    for (class_id, &rep_idx) in representative.iter().enumerate() {
        let rep = &pruned[rep_idx];
        for t in &rep.transitions {
            out_states[class_id].push_transition(t.symbol.clone(), classes[t.target]);
        }
    }

    let mut result = FiniteAutomaton::from_states_unchecked(out_states);
    result.mark_deterministic(true);
    result
}
