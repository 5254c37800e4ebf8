//! Crate-level property tests, quantifying over "any regex" / "any word"
//! as `spec.md` §8 properties 1-5 require, plus the concrete seed
//! scenarios from §8's last subsection.
//!
//! Grounded in `dandy/src/tests.rs`'s `prop_compose!`/`proptest!` style,
//! adapted to generate [`crate::regex`] source strings over this crate's
//! smaller surface syntax (`*`, `+`, `.`, `λ`, parens, `a`/`b` literals)
//! instead of `dandy`'s `|`/implicit-concatenation syntax.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::automaton::determinize::determinize;
use crate::automaton::eval::{accepts_chars, Evaluator};
use crate::automaton::minimize::minimize;
use crate::grammar::predictive::{predictive_parse, recognize};
use crate::grammar::table::{build_ll1_table, is_ll1};
use crate::grammar::Grammar;
use crate::regex;
use std::collections::BTreeSet;

fn arb_regex(depth: u32) -> BoxedStrategy<String> {
    let leaf = prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("λ".to_string()),
    ];
    if depth == 0 {
        leaf.boxed()
    } else {
        let smaller = arb_regex(depth - 1);
        prop_oneof![
            leaf,
            smaller.clone().prop_map(|s| format!("({s})*")),
            (arb_regex(depth - 1), arb_regex(depth - 1)).prop_map(|(a, b)| format!("({a}+{b})")),
            (arb_regex(depth - 1), arb_regex(depth - 1)).prop_map(|(a, b)| format!("{a}.{b}")),
        ]
        .boxed()
    }
}

fn arb_word() -> BoxedStrategy<String> {
    "[ab]{0,6}".boxed()
}

proptest! {
    /// Property 1: strings accepted by `compile(R)` equal those accepted
    /// by `minimize(determinize(compile(R)))`.
    #[test]
    fn compile_minimize_preserves_language(re in arb_regex(3), word in arb_word()) {
        let nfa = regex::compile(&re);
        let minimal = minimize(&determinize(&nfa));
        prop_assert_eq!(accepts_chars(&nfa, &word), accepts_chars(&minimal, &word));
    }

    /// Property 2: minimizing an already-minimal DFA changes nothing
    /// observable — re-minimizing accepts exactly the same words.
    #[test]
    fn minimize_is_idempotent(re in arb_regex(3), word in arb_word()) {
        let dfa = minimize(&determinize(&regex::compile(&re)));
        let twice = minimize(&dfa);
        prop_assert_eq!(accepts_chars(&dfa, &word), accepts_chars(&twice, &word));
        prop_assert_eq!(dfa.len(), twice.len());
    }

    /// Property 3: determinization produces a total DFA.
    #[test]
    fn determinize_is_total(re in arb_regex(3)) {
        let dfa = determinize(&regex::compile(&re));
        prop_assert!(dfa.is_total_deterministic());
    }

    /// Property 4: the sink is non-accepting and loops to itself on every
    /// symbol.
    #[test]
    fn sink_state_is_absorbing(re in arb_regex(3)) {
        let dfa = determinize(&regex::compile(&re));
        if let Some(idx) = dfa.state_idx("empty") {
            let sink = dfa.state(idx);
            prop_assert!(!sink.accepting);
            for t in &sink.transitions {
                prop_assert_eq!(t.target, idx);
            }
        }
    }

    /// Property 5: after `process_symbol`, no state in `current_states`
    /// has a lambda transition leaving the set (the set is already
    /// lambda-closed).
    #[test]
    fn evaluator_state_stays_lambda_closed(re in arb_regex(3), word in arb_word()) {
        let nfa = regex::compile(&re);
        let mut eval = Evaluator::new(&nfa);
        eval.process_chars(&word);
        for &idx in eval.current_states() {
            for t in &nfa.state(idx).transitions {
                if t.symbol.is_none() {
                    prop_assert!(eval.current_states().contains(&t.target));
                }
            }
        }
    }
}

#[test]
fn seed_regex_alternation_star_concat() {
    let nfa = regex::compile("(a+b)*.a");
    for w in ["a", "ba", "aba"] {
        assert!(accepts_chars(&nfa, w), "expected {w:?} accepted");
    }
    for w in ["", "b", "ab"] {
        assert!(!accepts_chars(&nfa, w), "expected {w:?} rejected");
    }
}

#[test]
fn transition_declaration_order_does_not_affect_acceptance() {
    use crate::automaton::{FiniteAutomaton, NamedState, NamedTransition};

    let states = vec![
        NamedState { name: "1".into(), accepting: false },
        NamedState { name: "2".into(), accepting: false },
        NamedState { name: "3".into(), accepting: true },
    ];
    let mut edges = vec![
        NamedTransition { src: "1".into(), symbol: Some("a".into()), dst: "2".into() },
        NamedTransition { src: "2".into(), symbol: Some("b".into()), dst: "3".into() },
        NamedTransition { src: "1".into(), symbol: Some("a".into()), dst: "1".into() },
    ];
    let baseline = FiniteAutomaton::from_named(states.clone(), edges.clone()).unwrap();

    edges.shuffle(&mut thread_rng());
    let shuffled = FiniteAutomaton::from_named(states, edges).unwrap();

    for word in ["", "a", "ab", "aab", "b"] {
        assert_eq!(accepts_chars(&baseline, word), accepts_chars(&shuffled, word));
    }
}

#[test]
fn seed_lambda_chain_automaton() {
    use crate::automaton::{FiniteAutomaton, NamedState, NamedTransition};

    let states = vec![
        NamedState { name: "1".into(), accepting: false },
        NamedState { name: "2".into(), accepting: false },
        NamedState { name: "3".into(), accepting: false },
        NamedState { name: "4".into(), accepting: true },
    ];
    let edges = vec![
        NamedTransition { src: "1".into(), symbol: None, dst: "2".into() },
        NamedTransition { src: "2".into(), symbol: None, dst: "3".into() },
        NamedTransition { src: "3".into(), symbol: None, dst: "4".into() },
    ];
    let automaton = FiniteAutomaton::from_named(states, edges).unwrap();
    assert!(accepts_chars(&automaton, ""));
    assert!(!accepts_chars(&automaton, "a"));
}

#[test]
fn seed_six_state_cycle_minimizes_to_two() {
    use crate::automaton::{FiniteAutomaton, NamedState, NamedTransition};

    // A 6-state cycle 0->1->2->3->4->5->0 on a single symbol, where every
    // other state (0, 2, 4) is accepting: collapses to a 2-state cycle of
    // alternating accept/non-accept classes.
    let names: Vec<String> = (0..6).map(|i| i.to_string()).collect();
    let states: Vec<NamedState> = names
        .iter()
        .enumerate()
        .map(|(i, n)| NamedState { name: n.as_str().into(), accepting: i % 2 == 0 })
        .collect();
    let edges: Vec<NamedTransition> = (0..6)
        .map(|i| NamedTransition {
            src: names[i].as_str().into(),
            symbol: Some("a".into()),
            dst: names[(i + 1) % 6].as_str().into(),
        })
        .collect();
    let automaton = FiniteAutomaton::from_named(states, edges).unwrap();
    let mut automaton = automaton;
    automaton.mark_deterministic(true);

    let minimal = minimize(&automaton);
    assert_eq!(minimal.len(), 2);
    let accepting_count = minimal.states().iter().filter(|s| s.accepting).count();
    assert_eq!(accepting_count, 1);
    for s in minimal.states() {
        assert_eq!(s.transitions.len(), 1);
    }
}

fn expr_grammar() -> Grammar {
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
fn seed_arithmetic_grammar_is_ll1_with_expected_cells() {
    let g = expr_grammar();
    assert!(is_ll1(&g));
    let table = build_ll1_table(&g).unwrap();
    let cell = table.get('E', crate::grammar::Symbol::Terminal('i')).unwrap();
    assert_eq!(cell.head, 'E');
    let lambda_cell = table.get('X', crate::grammar::Symbol::EndMarker).unwrap();
    assert!(lambda_cell.body.is_empty());
}

#[test]
fn seed_non_ll1_grammar_is_rejected() {
    let g = Grammar::new(
        BTreeSet::from(['a', '*']),
        BTreeSet::from(['I', 'A', 'X', 'D']),
        vec![
            ('I', "A*I".into()),
            ('I', "a".into()),
            ('I', "".into()),
            ('A', "aa*A".into()),
            ('A', "a".into()),
            ('A', "".into()),
            ('X', "I*AD".into()),
            ('D', "*".into()),
            ('D', "".into()),
        ],
        'X',
    )
    .unwrap();
    assert!(!is_ll1(&g));
}

#[test]
fn seed_predictive_parse_accepts_and_rejects() {
    let g = expr_grammar();
    let table = build_ll1_table(&g).unwrap();
    assert!(recognize(&table, g.axiom(), "i+i*i").is_ok());
    assert!(recognize(&table, g.axiom(), "i+").is_err());
}

#[test]
fn seed_predictive_parse_tree_matches_leftmost_derivation() {
    let g = expr_grammar();
    let table = build_ll1_table(&g).unwrap();
    let tree = predictive_parse(&table, g.axiom(), "i+i", true).unwrap().unwrap();
    assert_eq!(tree.label, Some('E'));
    // E -> T X: two children, T first.
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].label, Some('T'));
    assert_eq!(tree.children[1].label, Some('X'));
}
