//! Lumen CLI.

use std::process::ExitCode;

use lumenc::commands::{explain_error, lex_file, parse_file, parse_run_args, run_file};
use lumenc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok((path, options)) => run_file(&path, &options),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!("Usage: lumen run <file> [--max-depth=N] [--color=auto|always|never]");
                ExitCode::FAILURE
            }
        },
        "lex" | "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lumen {} <file>", args[1]);
                return ExitCode::FAILURE;
            };
            if args[1] == "lex" {
                lex_file(path)
            } else {
                parse_file(path)
            }
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: lumen explain <ERROR_CODE>");
                eprintln!("Example: lumen explain E6001");
                return ExitCode::FAILURE;
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("lumen {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Lumen interpreter");
    println!();
    println!("Usage: lumen <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>     Evaluate a program");
    println!("  lex <file>     Print the token stream");
    println!("  parse <file>   Print the AST as an S-expression");
    println!("  explain <code> Describe an error code (e.g. E6001)");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=N                 Closure call depth limit (default 10000)");
    println!("  --color=auto|always|never     Colored diagnostics");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lumen_eval=trace) for interpreter logs.");
}
