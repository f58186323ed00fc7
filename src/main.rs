mod builtins;
mod config;
mod context;
mod debug;
mod driver;
mod error;
mod eval;
mod frame;
mod highlighter;
mod node;
mod parser;
mod scheduler;
mod symtab;
mod value;

use clap::Parser as ClapParser;
use config::{DEFAULT_MAX_WORKERS, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use context::Context;
use debug::DebugSink;
use driver::{run_form, Outcome};
use highlighter::LispHelper;
use node::TopLevelForm;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use scheduler::Scheduler;
use std::path::PathBuf;
use std::sync::Arc;
use symtab::SymbolTable;

/// forklisp: a speculatively-parallel Lisp evaluator.
#[derive(ClapParser, Debug)]
#[command(name = "forklisp")]
#[command(version = config::VERSION)]
#[command(about = "A first-order Lisp evaluator with speculatively-parallel argument evaluation")]
struct CliArgs {
    /// Read top-level forms from this file instead of standard input.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    script: Option<PathBuf>,

    /// Enable debug tracing, to PATH if given or to standard output otherwise.
    #[arg(short = 'd', long = "debug", value_name = "PATH", num_args = 0..=1, default_missing_value = "-")]
    debug: Option<String>,

    /// Disable the fork/join scheduler: every argument evaluates inline.
    #[arg(short = 's', long = "serial")]
    serial: bool,
}

fn main() {
    let args = CliArgs::parse();

    let debug_sink = match build_debug_sink(&args.debug) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Failed to open debug sink: {e}");
            std::process::exit(1);
        }
    };

    let max_workers = if args.serial { 0 } else { DEFAULT_MAX_WORKERS };
    let symtab = SymbolTable::new();
    for name in builtins::RESERVED_NAMES {
        symtab.reserve(name);
    }
    let ctx = Context::new(symtab, Scheduler::new(max_workers), Arc::new(debug_sink));

    match args.script {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(source) => run_source(&source, &ctx),
            Err(e) => {
                eprintln!("Could not open {}: {e}; reading from standard input instead", path.display());
                run_repl(&ctx);
            }
        },
        None => run_repl(&ctx),
    }
}

fn build_debug_sink(flag: &Option<String>) -> std::io::Result<DebugSink> {
    match flag {
        None => Ok(DebugSink::disabled()),
        Some(path) if path == "-" => Ok(DebugSink::stdout()),
        Some(path) => DebugSink::file(std::path::Path::new(path)),
    }
}

/// Batch mode (`-f <path>`): evaluate every top-level form in `source` in
/// order, printing each result or diagnostic, then return. A parse failure
/// stops the batch (there is no reliable resynchronization point in this
/// grammar); earlier forms' effects on the symbol table stand.
fn run_source(source: &str, ctx: &Context) {
    let mut remaining = source;
    loop {
        match parser::parse_form(remaining) {
            Ok((TopLevelForm::Eof, _)) => break,
            Ok((form, rest)) => {
                print_outcome(run_form(&form, ctx));
                remaining = rest;
            }
            Err(e) => {
                eprintln!("Parse error: {e}");
                break;
            }
        }
    }
}

fn run_repl(ctx: &Context) {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<LispHelper, rustyline::history::DefaultHistory> =
        match Editor::with_config(rl_config) {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize REPL: {e}");
                std::process::exit(1);
            }
        };
    rl.set_helper(Some(LispHelper::new()));

    let history_file = ".forklisp_history";
    let _ = rl.load_history(history_file);

    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");

    loop {
        match rl.readline("forklisp> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match trimmed {
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "clear" => {
                        print!("\x1B[2J\x1B[H");
                        continue;
                    }
                    _ => {}
                }
                match parser::parse_form(&line) {
                    Ok((TopLevelForm::Eof, _)) => {}
                    Ok((form, _)) => print_outcome(run_form(&form, ctx)),
                    Err(e) => eprintln!("Parse error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
}

fn print_outcome(outcome: Result<Outcome, error::EvalError>) {
    match outcome {
        Ok(Outcome::DefinedConstant { name, value }) => println!("Defined {name} = {value}"),
        Ok(Outcome::DefinedFunction { name }) => println!("Defined function {name}"),
        Ok(Outcome::Value(value)) => println!("{value}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
