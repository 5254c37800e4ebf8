//! Builds an NFA from an RPN token stream by evaluating a stack of
//! sub-automaton fragments, Thompson-style.
//!
//! Fresh-state-counter bookkeeping is grounded in
//! `dandy::regex::Regex::to_nfa`'s `StateCounter`; the per-operator wiring
//! rules come straight from `spec.md` §4.2. `dandy` pins its NFA's
//! accept/initial pair at fixed arena slots (0 and 1) by pre-allocating them
//! before the recursive build; this evaluator instead allocates fragments
//! on demand (matching the spec's stack-of-sub-automata description) and
//! reorders the arena once at the end ([`reindex`]) so the same "initial at
//! 0, accept at 1" invariant holds on the result regardless of which
//! operator happened to produce the outermost fragment.

use super::tokenize::Token;
use crate::automaton::{FiniteAutomaton, State};

#[derive(Debug, Clone, Copy)]
struct Fragment {
    initial: usize,
    accept: usize,
}

fn fresh(states: &mut Vec<State>) -> usize {
    let idx = states.len();
    states.push(State::new(format!("state{idx}").into(), false));
    idx
}

/// A fresh pair of states for a new constructor. The accept half starts
/// out marked accepting; callers that consume this fragment into a larger
/// one must clear it again once they've wired their own lambda edges to
/// it, per `spec.md`'s "old accepting flag(s) cleared" wording.
fn fresh_pair(states: &mut Vec<State>) -> Fragment {
    let initial = fresh(states);
    let accept = fresh(states);
    states[accept].accepting = true;
    Fragment { initial, accept }
}

/// Builds the NFA for an RPN token stream. Empty input (no tokens at all)
/// is the "empty language" edge case from `spec.md` §4.2: two fresh states
/// with no transitions between them.
pub fn build(rpn: &[Token]) -> FiniteAutomaton {
    let mut states: Vec<State> = Vec::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for tok in rpn {
        match *tok {
            Token::Symbol(c) => {
                let frag = fresh_pair(&mut states);
                let mut buf = [0u8; 4];
                states[frag.initial]
                    .push_transition(Some(c.encode_utf8(&mut buf).into()), frag.accept);
                stack.push(frag);
            }
            Token::Lambda => {
                let frag = fresh_pair(&mut states);
                states[frag.initial].push_transition(None, frag.accept);
                stack.push(frag);
            }
            Token::Star => {
                let Some(a) = stack.pop() else { continue };
                let frag = fresh_pair(&mut states);
                states[frag.initial].push_transition(None, frag.accept);
                states[frag.initial].push_transition(None, a.initial);
                states[a.accept].push_transition(None, frag.initial);
                states[a.accept].accepting = false;
                stack.push(frag);
            }
            Token::Union => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    continue;
                };
                let frag = fresh_pair(&mut states);
                states[frag.initial].push_transition(None, a.initial);
                states[frag.initial].push_transition(None, b.initial);
                states[a.accept].push_transition(None, frag.accept);
                states[b.accept].push_transition(None, frag.accept);
                states[a.accept].accepting = false;
                states[b.accept].accepting = false;
                stack.push(frag);
            }
            Token::Concat => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    continue;
                };
                let frag = fresh_pair(&mut states);
                states[frag.initial].push_transition(None, a.initial);
                states[a.accept].push_transition(None, b.initial);
                states[b.accept].push_transition(None, frag.accept);
                states[a.accept].accepting = false;
                states[b.accept].accepting = false;
                stack.push(frag);
            }
            Token::LParen | Token::RParen => {
                // Not emitted into RPN output by the shunting-yard pass.
            }
        }
    }

    match stack.pop() {
        Some(frag) => FiniteAutomaton::from_states_unchecked(reindex(states, frag)),
        None => {
            let mut states = Vec::new();
            fresh(&mut states);
            fresh(&mut states);
            FiniteAutomaton::from_states_unchecked(states)
        }
    }
}

/// Permutes `states` so `frag.initial` lands at index 0 and `frag.accept`
/// at index 1, remapping every transition target to match.
fn reindex(states: Vec<State>, frag: Fragment) -> Vec<State> {
    let n = states.len();
    let mut order = Vec::with_capacity(n);
    order.push(frag.initial);
    order.push(frag.accept);
    for i in 0..n {
        if i != frag.initial && i != frag.accept {
            order.push(i);
        }
    }
    let mut new_pos = vec![0usize; n];
    for (new_idx, &old_idx) in order.iter().enumerate() {
        new_pos[old_idx] = new_idx;
    }
    order
        .into_iter()
        .map(|old_idx| {
            let s = &states[old_idx];
            let mut ns = State::new(s.name.clone(), s.accepting);
            for t in &s.transitions {
                ns.push_transition(t.symbol.clone(), new_pos[t.target]);
            }
            ns
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::eval::accepts_chars;
    use crate::regex::{shunting_yard::to_rpn, tokenize::tokenize};

    fn compile(src: &str) -> FiniteAutomaton {
        build(&to_rpn(tokenize(src)))
    }

    #[test]
    fn star_accepts_empty_and_repetition() {
        let nfa = compile("a*");
        assert!(accepts_chars(&nfa, ""));
        assert!(accepts_chars(&nfa, "a"));
        assert!(accepts_chars(&nfa, "aaaa"));
        assert!(!accepts_chars(&nfa, "b"));
    }

    #[test]
    fn union_accepts_either_branch_only() {
        let nfa = compile("a+b");
        assert!(accepts_chars(&nfa, "a"));
        assert!(accepts_chars(&nfa, "b"));
        assert!(!accepts_chars(&nfa, "ab"));
        assert!(!accepts_chars(&nfa, ""));
    }

    #[test]
    fn initial_and_accept_pinned_to_zero_and_one() {
        let nfa = compile("(a+b)*.a");
        assert!(!nfa.state(0).accepting);
        assert!(nfa.state(1).accepting);
        assert_eq!(nfa.initial_idx(), 0);
    }
}
