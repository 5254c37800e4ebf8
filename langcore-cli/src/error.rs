//! The CLI's top-level error type, unifying file I/O, textual-format
//! parsing and construction failures behind one `Display` impl.
//!
//! Grounded in `dandy-cli::automata::Error`'s shape: one variant per
//! failure boundary, each wrapping the underlying error rather than
//! stringifying it early.

use std::path::PathBuf;

use langcore::automaton::AutomatonError;
use langcore::grammar::table::RepeatedCellError;
use langcore::grammar::GrammarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error reading {0}: {1}")]
    File(PathBuf, std::io::Error),
    #[error("error parsing automaton text: {0}")]
    AutomatonParse(String),
    #[error("error building automaton: {0}")]
    AutomatonBuild(#[from] AutomatonError),
    #[error("error parsing grammar text: {0}")]
    GrammarParse(String),
    #[error("error building grammar: {0}")]
    GrammarBuild(#[from] GrammarError),
    #[error("grammar is not LL(1): {0}")]
    NotLl1(#[from] RepeatedCellError),
    #[error("parse failed: {0}")]
    Parse(#[from] langcore::grammar::predictive::ParseError),
}
