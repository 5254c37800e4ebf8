mod automaton_cmd;
mod error;
mod grammar_cmd;
mod regex_cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use error::Error;

#[derive(Debug, Parser)]
#[command(name = "langcore", version, about = "Regex/automaton/grammar toolkit")]
pub struct Cli {
    /// Suppress the informational lines that precede each command's result.
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a Kleene-syntax regular expression to an NFA.
    Compile(regex_cmd::CompileArgs),
    /// Test whether a regular expression accepts a word.
    RegexEval(regex_cmd::RegexEvalArgs),
    /// Determinize an automaton read from an `Automaton:` file.
    Determinize(automaton_cmd::DeterminizeArgs),
    /// Minimize a deterministic automaton read from an `Automaton:` file.
    Minimize(automaton_cmd::MinimizeArgs),
    /// Test whether an automaton accepts a word.
    Eval(automaton_cmd::EvalArgs),
    /// Print FIRST/FOLLOW sets for every non-terminal of a grammar file.
    FirstFollow(grammar_cmd::FirstFollowArgs),
    /// Build and print the LL(1) table for a grammar file.
    Table(grammar_cmd::TableArgs),
    /// Run the predictive parser over an input string.
    Parse(grammar_cmd::ParseArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = |s: &str| {
        if !cli.no_log {
            println!("{s}");
        }
    };

    let result = match &cli.command {
        Command::Compile(args) => regex_cmd::compile(args, log),
        Command::RegexEval(args) => regex_cmd::eval(args, log),
        Command::Determinize(args) => automaton_cmd::determinize(args, log),
        Command::Minimize(args) => automaton_cmd::minimize(args, log),
        Command::Eval(args) => automaton_cmd::eval(args, log),
        Command::FirstFollow(args) => grammar_cmd::first_follow(args, log),
        Command::Table(args) => grammar_cmd::table(args, log),
        Command::Parse(args) => grammar_cmd::parse(args, log),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads `path`, mapping I/O failure through [`Error::File`].
pub(crate) fn read_input(path: &PathBuf) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::File(path.clone(), e))
}
