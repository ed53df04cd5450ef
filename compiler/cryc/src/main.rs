//! Cry CLI

use cryc::commands::{parse_run_options, run_file};

fn main() {
    cryc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let (options, path) = match parse_run_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    print_run_usage();
                    std::process::exit(1);
                }
            };
            let Some(path) = path else {
                eprintln!("error: missing file path");
                print_run_usage();
                std::process::exit(1);
            };
            run_file(&path, &options);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Cry evaluator");
    eprintln!();
    eprintln!("Usage: cry <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <ast.json>   Evaluate a syntax tree serialized as JSON");
    eprintln!("  help             Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=cry_eval=debug) to enable tracing.");
}

fn print_run_usage() {
    eprintln!("Usage: cry run <ast.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict-operands   Fail on mixed-kind arithmetic instead of yielding null");
    eprintln!("  --lenient-arity     Bind missing parameters to null, drop extra arguments");
    eprintln!("  --ieee-division     Division by zero yields Infinity/NaN instead of failing");
    eprintln!("  --max-depth=<n>     Call depth limit (default 10000, 'none' for unlimited)");
    eprintln!("  --print-result      Print the program's final value");
}
