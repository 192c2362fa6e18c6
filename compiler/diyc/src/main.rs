//! DIY Lisp CLI.

use std::path::Path;

use diyc::{eval_expression, init_tracing, run_file, CliError, Repl, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (config, positional) = parse_options(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: diy run <file.diy> [--no-prelude]");
                std::process::exit(1);
            };
            report(run_file(Path::new(path), &config).map(|value| value.to_string()));
        }
        "eval" => {
            let (config, positional) = parse_options(&args[2..]);
            if positional.is_empty() {
                eprintln!("Usage: diy eval <expression> [--no-prelude]");
                std::process::exit(1);
            }
            report(eval_expression(&positional.join(" "), &config));
        }
        "repl" => {
            let (config, _) = parse_options(&args[2..]);
            start_repl(&config);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("DIY Lisp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare file path runs it.
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("diy"))
            {
                let (config, _) = parse_options(&args[2..]);
                report(run_file(Path::new(command), &config).map(|value| value.to_string()));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_options(args: &[String]) -> (RunConfig, Vec<String>) {
    match RunConfig::parse_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn report(result: Result<String, CliError>) {
    match result {
        Ok(printed) => println!("{printed}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn start_repl(config: &RunConfig) {
    let mut repl = match Repl::new(config) {
        Ok(repl) => repl,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let stdin = std::io::stdin();
    if let Err(err) = repl.run(stdin.lock(), std::io::stdout()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("DIY Lisp");
    println!();
    println!("Usage: diy <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.diy>       Evaluate a program and print its last value");
    println!("  eval <expression>    Evaluate one expression and print it");
    println!("  repl                 Start an interactive session");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --no-prelude         Start from an empty environment");
    println!();
    println!("Environment:");
    println!("  DIY_LOG, RUST_LOG    Tracing filter, e.g. DIY_LOG=diy_eval=debug");
    println!();
    println!("Examples:");
    println!("  diy run fib.diy");
    println!("  diy eval '(sort (quote (3 1 2)))'");
    println!("  diy repl --no-prelude");
}
