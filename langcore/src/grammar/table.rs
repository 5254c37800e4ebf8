//! LL(1) predictive-parse table construction.
//!
//! `spec.md` §4.6 pseudocode, no direct teacher precedent (`dandy` has no
//! CFG support at all). Cells are kept in a `BTreeMap` rather than a
//! `HashMap` so iteration and `Debug` output are deterministic in rule
//! order — `spec.md` §8 property 7 requires identical grammars to yield
//! identical tables, and a `BTreeMap` keyed on `(char, Symbol)` makes that
//! true of the table's own representation, not just of the cells a caller
//! happens to look up.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use thiserror::Error;

use super::{Grammar, Production, Symbol};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cell ({non_terminal}, {lookahead:?}) assigned to more than one production")]
pub struct RepeatedCellError {
    pub non_terminal: char,
    pub lookahead: Symbol,
}

/// A two-dimensional (non-terminal × terminal∪{`$`}) → production-body
/// mapping. Each cell is assigned at most once during construction.
#[derive(Debug, Clone)]
pub struct LL1Table {
    cells: BTreeMap<(char, Symbol), Production>,
}

impl LL1Table {
    pub fn get(&self, non_terminal: char, lookahead: Symbol) -> Option<&Production> {
        self.cells.get(&(non_terminal, lookahead))
    }

    pub fn cells(&self) -> impl Iterator<Item = (&(char, Symbol), &Production)> {
        self.cells.iter()
    }
}

/// Builds the LL(1) table for `grammar`. For every production `A -> α`:
/// a cell `(A, t)` for every terminal `t` in FIRST(α); if λ ∈ FIRST(α),
/// additionally a cell `(A, t)` for every terminal (including `$`) in
/// FOLLOW(A). Fails on the first cell that would be assigned twice.
pub fn build_ll1_table(grammar: &Grammar) -> Result<LL1Table, RepeatedCellError> {
    let mut cells: BTreeMap<(char, Symbol), Production> = BTreeMap::new();

    let mut assign = |cells: &mut BTreeMap<(char, Symbol), Production>,
                       head: char,
                       lookahead: Symbol,
                       production: Production|
     -> Result<(), RepeatedCellError> {
        match cells.entry((head, lookahead)) {
            Entry::Occupied(_) => Err(RepeatedCellError {
                non_terminal: head,
                lookahead,
            }),
            Entry::Vacant(slot) => {
                slot.insert(production);
                Ok(())
            }
        }
    };

    for p in grammar.productions() {
        let first_alpha = grammar
            .first_of_string(&p.body)
            .expect("production bodies are resolved against this grammar's own symbols");

        for sym in &first_alpha {
            if let Symbol::Terminal(_) = sym {
                assign(&mut cells, p.head, *sym, p.clone())?;
            }
        }
        if first_alpha.contains(&Symbol::Epsilon) {
            for sym in grammar.follow(p.head) {
                assign(&mut cells, p.head, *sym, p.clone())?;
            }
        }
    }

    Ok(LL1Table { cells })
}

/// `get_ll1_table(grammar)` per `spec.md`: `NotLL1` is surfaced as the
/// absence of a table, not a propagated error.
pub fn get_ll1_table(grammar: &Grammar) -> Option<LL1Table> {
    build_ll1_table(grammar).ok()
}

pub fn is_ll1(grammar: &Grammar) -> bool {
    get_ll1_table(grammar).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

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
    fn arithmetic_grammar_is_ll1_with_expected_cells() {
        let g = expr_grammar();
        let table = build_ll1_table(&g).expect("this grammar is LL(1)");
        let cell = table.get('E', Symbol::Terminal('i')).unwrap();
        assert_eq!(cell.body, vec![Symbol::NonTerminal('T'), Symbol::NonTerminal('X')]);
        let lambda_cell = table.get('X', Symbol::EndMarker).unwrap();
        assert!(lambda_cell.body.is_empty());
    }

    #[test]
    fn ambiguous_grammar_is_rejected() {
        // I -> A*I | a | lambda ; A -> aa*A | a | lambda ; X -> I*AD ; D -> * | lambda
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
}
