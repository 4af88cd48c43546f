use std::{fs, process};

use clap::Parser;
use decalc::{
    interpreter::{environment::Environment, parser::core::parse_program},
    util::context::DecimalContext,
};

/// decalc evaluates arbitrary-precision decimal expressions, one statement per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells decalc to read the contents from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Number of significant digits kept by inexact operations such as `/`.
    #[arg(short, long, default_value_t = decalc::util::context::DEFAULT_PRECISION)]
    precision: u64,

    /// Prints each statement simplified instead of evaluating it.
    #[arg(short, long)]
    simplify: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let Some(context) = DecimalContext::with_precision(args.precision) else {
        eprintln!("Precision must be between 1 and {}.",
                  decalc::util::context::MAX_PRECISION);
        process::exit(1);
    };

    let statements = parse_program(&script).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let mut env = Environment::with_context(context);
    for statement in &statements {
        if args.simplify {
            println!("{}", statement.simplify(&mut env));
            continue;
        }

        match statement.value(&mut env) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }
}
