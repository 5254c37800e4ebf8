//! `first-follow`, `table` and `parse` subcommands, all driven off a
//! grammar file in the `A -> body` textual format.
//!
//! Grounded in `dandy-cli::test_files::test_files`'s load-then-drive shape.

use std::path::PathBuf;

use clap::Args;
use nom::Finish;

use langcore::grammar::predictive::predictive_parse;
use langcore::grammar::table::build_ll1_table;
use langcore::grammar::{Grammar, Symbol};
use langcore::parser;

use crate::error::Error;
use crate::read_input;

fn load(path: &PathBuf) -> Result<Grammar, Error> {
    let text = read_input(path)?;
    let (_, (terminals, non_terminals, rules)) = parser::grammar(&text)
        .finish()
        .map_err(|e| Error::GrammarParse(e.to_string()))?;
    let axiom = rules
        .first()
        .map(|p| p.head)
        .ok_or_else(|| Error::GrammarParse("grammar file has no rules".into()))?;
    let raw_productions = rules.into_iter().map(|p| (p.head, p.body)).collect();
    Ok(Grammar::new(terminals, non_terminals, raw_productions, axiom)?)
}

fn fmt_symbol(sym: &Symbol) -> String {
    match sym {
        Symbol::Terminal(c) => c.to_string(),
        Symbol::NonTerminal(c) => c.to_string(),
        Symbol::Epsilon => "λ".to_string(),
        Symbol::EndMarker => "$".to_string(),
    }
}

#[derive(Debug, Args)]
pub struct FirstFollowArgs {
    /// Path to a grammar file.
    pub grammar: PathBuf,
}

pub fn first_follow(args: &FirstFollowArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let grammar = load(&args.grammar)?;
    log(&format!("Loaded {} non-terminals", grammar.non_terminals().len()));
    for nt in grammar.non_terminals() {
        let first: Vec<String> = grammar.first(*nt).iter().map(fmt_symbol).collect();
        let follow: Vec<String> = grammar.follow(*nt).iter().map(fmt_symbol).collect();
        println!("FIRST({nt}) = {{{}}}", first.join(", "));
        println!("FOLLOW({nt}) = {{{}}}", follow.join(", "));
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Path to a grammar file.
    pub grammar: PathBuf,
}

pub fn table(args: &TableArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let grammar = load(&args.grammar)?;
    let table = build_ll1_table(&grammar)?;
    log(&format!("Grammar is LL(1); {} cells", table.cells().count()));
    for ((head, lookahead), production) in table.cells() {
        let body: Vec<String> = production.body.iter().map(fmt_symbol).collect();
        let rhs = if body.is_empty() { "λ".to_string() } else { body.join("") };
        println!("({head}, {}) -> {rhs}", fmt_symbol(lookahead));
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to a grammar file.
    pub grammar: PathBuf,
    /// The input string to parse, over the grammar's terminal alphabet.
    pub input: String,
}

pub fn parse(args: &ParseArgs, log: impl Fn(&str)) -> Result<(), Error> {
    let grammar = load(&args.grammar)?;
    let table = build_ll1_table(&grammar)?;
    log(&format!("Parsing {:?} from axiom {}", args.input, grammar.axiom()));
    predictive_parse(&table, grammar.axiom(), &args.input, false)?;
    println!("accepted");
    Ok(())
}
