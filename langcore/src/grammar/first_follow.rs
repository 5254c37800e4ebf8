//! FIRST/FOLLOW fixed-point computation.
//!
//! Grounded in the `first_of_string` + `changed: bool`-driven outer loop
//! pattern from `02e509f8_Youngermaster-Context-Free-Grammar-Parser`'s
//! `first_follow.rs` (the only pack member implementing this algorithm),
//! adapted from its `Symbol`-as-u32-id representation to this crate's
//! `char`-keyed one.

use std::collections::{BTreeMap, BTreeSet};

use super::{Production, Symbol};

/// FIRST(α) for an arbitrary symbol sequence: walk left to right, union in
/// FIRST(s) minus λ for each symbol while every symbol seen so far is
/// nullable, adding λ itself only if the whole walk was nullable (this
/// also covers the empty-slice case, FIRST(ε) = {λ}).
pub fn first_of_string(
    alpha: &[Symbol],
    first: &BTreeMap<char, BTreeSet<Symbol>>,
) -> BTreeSet<Symbol> {
    let mut result = BTreeSet::new();
    let mut nullable_prefix = true;

    for sym in alpha {
        if !nullable_prefix {
            break;
        }
        let first_sym = match sym {
            Symbol::Terminal(t) => BTreeSet::from([Symbol::Terminal(*t)]),
            Symbol::NonTerminal(nt) => first.get(nt).cloned().unwrap_or_default(),
            Symbol::Epsilon | Symbol::EndMarker => BTreeSet::new(),
        };
        for s in &first_sym {
            if *s != Symbol::Epsilon {
                result.insert(*s);
            }
        }
        nullable_prefix = first_sym.contains(&Symbol::Epsilon);
    }

    if nullable_prefix {
        result.insert(Symbol::Epsilon);
    }
    result
}

/// FIRST(X) for every non-terminal, by fixed-point iteration over all
/// productions until no set changes.
pub fn compute_first(
    non_terminals: &BTreeSet<char>,
    productions: &[Production],
) -> BTreeMap<char, BTreeSet<Symbol>> {
    let mut first: BTreeMap<char, BTreeSet<Symbol>> =
        non_terminals.iter().map(|&nt| (nt, BTreeSet::new())).collect();

    let mut changed = true;
    while changed {
        changed = false;
        for p in productions {
            if p.body.is_empty() {
                if first.get_mut(&p.head).unwrap().insert(Symbol::Epsilon) {
                    changed = true;
                }
                continue;
            }
            let rhs_first = first_of_string(&p.body, &first);
            let set = first.get_mut(&p.head).unwrap();
            for sym in rhs_first {
                if set.insert(sym) {
                    changed = true;
                }
            }
        }
    }
    first
}

/// FOLLOW(A) for every non-terminal. FOLLOW(axiom) is seeded with `$`;
/// for every occurrence of a non-terminal `C` inside a production
/// `B -> αCβ`, FIRST(β)\{λ} is added to FOLLOW(C), and FOLLOW(B) is added
/// too whenever β is nullable (including the case where β is empty).
pub fn compute_follow(
    non_terminals: &BTreeSet<char>,
    productions: &[Production],
    axiom: char,
    first: &BTreeMap<char, BTreeSet<Symbol>>,
) -> BTreeMap<char, BTreeSet<Symbol>> {
    let mut follow: BTreeMap<char, BTreeSet<Symbol>> =
        non_terminals.iter().map(|&nt| (nt, BTreeSet::new())).collect();
    follow.get_mut(&axiom).unwrap().insert(Symbol::EndMarker);

    let mut changed = true;
    while changed {
        changed = false;
        for p in productions {
            for (i, sym) in p.body.iter().enumerate() {
                let Symbol::NonTerminal(c) = sym else {
                    continue;
                };
                let beta = &p.body[i + 1..];
                let beta_first = first_of_string(beta, first);

                {
                    let set = follow.get_mut(c).unwrap();
                    for s in &beta_first {
                        if *s != Symbol::Epsilon && set.insert(*s) {
                            changed = true;
                        }
                    }
                }

                if beta.is_empty() || beta_first.contains(&Symbol::Epsilon) {
                    let follow_head = follow.get(&p.head).unwrap().clone();
                    let set = follow.get_mut(c).unwrap();
                    for s in follow_head {
                        if set.insert(s) {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    follow
}
