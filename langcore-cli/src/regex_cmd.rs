//! `compile` and `regex-eval` subcommands: drive [`langcore::regex::compile`]
//! over a Kleene-syntax source string, either printing the resulting NFA's
//! textual form or testing it against a word.
//!
//! Grounded in `dandy-cli::enumerate::enumerate_regex`'s shape — take the
//! regex as an argument (not a file), compile, then act on the NFA.

use clap::Args;

use langcore::automaton::eval::accepts_chars;
use langcore::regex;

use crate::error::Error;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// The regular expression source, e.g. `(a+b)*.a`.
    pub source: String,
}

pub fn compile(args: &CompileArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let nfa = regex::compile(&args.source);
    log(&format!("Compiled {} states:", nfa.len()));
    println!("{}", nfa.to_text());
    Ok(())
}

#[derive(Debug, Args)]
pub struct RegexEvalArgs {
    /// The regular expression source, e.g. `(a+b)*.a`.
    pub source: String,
    /// The word to test, read character by character.
    pub word: String,
}

pub fn eval(args: &RegexEvalArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let nfa = regex::compile(&args.source);
    log(&format!("Compiled {} states", nfa.len()));
    let accepted = accepts_chars(&nfa, &args.word);
    println!("{accepted}");
    Ok(())
}
