use std::fs;

use clap::Parser;
use reckon::eval_line;
use rustyline::DefaultEditor;

/// reckon is an interactive evaluator for infix integer arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead of the command
    /// line.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// The expression to evaluate. When omitted, an interactive session
    /// starts.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(contents) => {
            let expression = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              &contents);
                    std::process::exit(1);
                })
            } else {
                contents
            };

            match eval_line(&expression) {
                Ok(value) => println!("{value:.2}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            }
        },
        None => repl(),
    }
}

/// Runs the interactive session.
///
/// Reads one expression per line, evaluates it, and prints the result with
/// two decimal digits. A syntax error is reported for the offending line and
/// the session continues with the next one. Ctrl-C discards the current line;
/// Ctrl-D ends the session.
fn repl() {
    let mut rl = DefaultEditor::new().expect("could not initialize line editor");

    loop {
        let input = match rl.readline(">>> ") {
            Ok(line) => {
                rl.add_history_entry(&line)
                  .expect("could not add history entry");
                line
            },
            Err(rustyline::error::ReadlineError::Interrupted) => continue,
            Err(_) => break,
        };

        if input.trim().is_empty() {
            continue;
        }

        match eval_line(&input) {
            Ok(value) => println!("  = {value:.2}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
