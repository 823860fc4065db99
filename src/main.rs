use std::process::ExitCode;

use calcula::{calculate, interpreter::lexer::Lexer, parse};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// calcula evaluates a single-line arithmetic expression, such as
/// `2√9 + sin(30) * 3!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the token stream before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed expression, fully parenthesized, before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Enables debug logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate.
    expression: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "calcula=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                   .with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.tokens {
        for token in Lexer::new(&args.expression) {
            println!("{:<10} {}", token.kind, token.text);
        }
    }

    if args.ast {
        match parse(&args.expression) {
            Ok(program) => println!("{program}"),
            Err(errors) => {
                for error in errors {
                    eprintln!("{error}");
                }
                return ExitCode::FAILURE;
            },
        }
    }

    match calculate(&args.expression) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
