//! `determinize`, `minimize` and `eval` subcommands, all driven off an
//! `Automaton:` file.
//!
//! Grounded in `dandy-cli::union`/`intersection`'s read-parse-validate-act
//! shape, trimmed to a single input automaton instead of two.

use std::path::PathBuf;

use clap::Args;
use nom::Finish;

use langcore::automaton::determinize::determinize as run_determinize;
use langcore::automaton::eval::accepts_chars;
use langcore::automaton::minimize::minimize as run_minimize;
use langcore::automaton::FiniteAutomaton;
use langcore::parser;

use crate::error::Error;
use crate::read_input;

fn load(path: &PathBuf) -> Result<FiniteAutomaton, Error> {
    let text = read_input(path)?;
    let (_, (states, transitions)) = parser::automaton(&text)
        .finish()
        .map_err(|e| Error::AutomatonParse(e.to_string()))?;
    Ok(FiniteAutomaton::from_named(states, transitions)?)
}

#[derive(Debug, Args)]
pub struct DeterminizeArgs {
    /// Path to an `Automaton:` file.
    pub automaton: PathBuf,
}

pub fn determinize(args: &DeterminizeArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let automaton = load(&args.automaton)?;
    log(&format!("Loaded {} states", automaton.len()));
    let dfa = run_determinize(&automaton);
    println!("{}", dfa.to_text());
    Ok(())
}

#[derive(Debug, Args)]
pub struct MinimizeArgs {
    /// Path to an `Automaton:` file, already deterministic and total.
    pub automaton: PathBuf,
}

pub fn minimize(args: &MinimizeArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let automaton = load(&args.automaton)?;
    log(&format!("Loaded {} states", automaton.len()));
    let minimal = run_minimize(&automaton);
    log(&format!("Minimized to {} states", minimal.len()));
    println!("{}", minimal.to_text());
    Ok(())
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Path to an `Automaton:` file.
    pub automaton: PathBuf,
    /// The word to test, read character by character.
    pub word: String,
}

pub fn eval(args: &EvalArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let automaton = load(&args.automaton)?;
    log(&format!("Loaded {} states", automaton.len()));
    println!("{}", accepts_chars(&automaton, &args.word));
    Ok(())
}
