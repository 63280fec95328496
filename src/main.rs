use std::io::{self, BufRead, Write};

use clap::Parser;
use summa::evaluate;

/// summa is an easy to use command-line calculator for signed integer
/// arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }

        return;
    }

    if let Err(e) = repl() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt until end of input or an explicit quit.
///
/// Each line is evaluated to completion before the next one is read. A
/// malformed line prints its error and processing continues with the next
/// line; blank lines are skipped.
fn repl() -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b"expr> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            return Ok(());
        }

        match evaluate(input) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
